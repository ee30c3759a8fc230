use crate::config::TensorLayout;
use image::{imageops, DynamicImage, ImageReader};
use std::path::Path;
use tract_onnx::prelude::*;

/// Decodes an image, guessing the format from its content.
pub fn load_image(path: &Path) -> Result<DynamicImage, Box<dyn std::error::Error + Send + Sync>> {
    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(image)
}

/// Stretches to exactly `width`x`height` with nearest-neighbour sampling,
/// the way Keras `load_img(target_size=...)` does. No aspect-ratio padding.
pub fn resize_image(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    if image.width() == width && image.height() == height {
        return image.clone();
    }
    image.resize_exact(width, height, imageops::FilterType::Nearest)
}

/// MobileNetV2 input scaling, `[0, 255]` to `[-1, 1]`.
pub fn normalize(value: u8) -> f32 {
    value as f32 / 127.5 - 1.0
}

fn image_to_tensor(image: &DynamicImage, layout: TensorLayout) -> Tensor {
    let rgb = image.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);

    match layout {
        TensorLayout::Nhwc => {
            tract_ndarray::Array4::from_shape_fn((1, height, width, 3), |(_, y, x, c)| {
                normalize(rgb.get_pixel(x as u32, y as u32)[c])
            })
            .into_tensor()
        }
        TensorLayout::Nchw => {
            tract_ndarray::Array4::from_shape_fn((1, 3, height, width), |(_, c, y, x)| {
                normalize(rgb.get_pixel(x as u32, y as u32)[c])
            })
            .into_tensor()
        }
    }
}

pub fn resize_image_to_tensor(
    image: &DynamicImage,
    width: u32,
    height: u32,
    layout: TensorLayout,
) -> Tensor {
    let resized = resize_image(image, width, height);
    image_to_tensor(&resized, layout)
}

pub fn input_shape(width: u32, height: u32, layout: TensorLayout) -> TVec<usize> {
    let (width, height) = (width as usize, height as usize);
    match layout {
        TensorLayout::Nhwc => tvec![1, height, width, 3],
        TensorLayout::Nchw => tvec![1, 3, height, width],
    }
}
