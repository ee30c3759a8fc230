use crate::config::TensorLayout;
use crate::feature_extractor::interface::FeatureExtractor;
use crate::feature_extractor::tract::image::resize_image_to_tensor;
use image::DynamicImage;

/// Mean of each normalised RGB channel, three features per image.
pub struct FeatureExtractorFake {
    input_shape: (u32, u32),
}

impl FeatureExtractorFake {
    pub fn new(input_shape: (u32, u32)) -> Self {
        Self { input_shape }
    }
}

impl FeatureExtractor for FeatureExtractorFake {
    fn extract(&self, image: &DynamicImage) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>> {
        let (height, width) = self.input_shape;
        let tensor = resize_image_to_tensor(image, width, height, TensorLayout::Nhwc);
        let values = tensor.as_slice::<f32>()?;

        let pixels = (values.len() / 3).max(1) as f32;
        let mut sums = [0.0f32; 3];
        for pixel in values.chunks(3) {
            for (sum, value) in sums.iter_mut().zip(pixel) {
                *sum += value;
            }
        }

        Ok(sums.iter().map(|sum| sum / pixels).collect())
    }
}
