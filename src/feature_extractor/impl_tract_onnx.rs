use crate::config::TensorLayout;
use crate::error::LoadError;
use crate::feature_extractor::interface::FeatureExtractor;
use crate::feature_extractor::tract::image::{input_shape, resize_image_to_tensor};
use crate::model_config::ModelConfig;
use image::DynamicImage;
use std::path::Path;
use tract_onnx::prelude::*;

/// Headless CNN exported to ONNX; its output is flattened into the feature vector.
pub struct FeatureExtractorTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    /// (height, width)
    input_shape: (u32, u32),
    layout: TensorLayout,
}

impl FeatureExtractorTractOnnx {
    pub fn new(config: &ModelConfig) -> Result<Self, LoadError> {
        let path = &config.feature_extractor_path;
        let model = Self::load_model(path, config.input_shape, config.layout)
            .map_err(|e| LoadError::new("feature extractor", path, e))?;

        Ok(Self {
            model,
            input_shape: config.input_shape,
            layout: config.layout,
        })
    }

    fn load_model(
        path: &Path,
        (height, width): (u32, u32),
        layout: TensorLayout,
    ) -> TractResult<SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>> {
        tract_onnx::onnx()
            .model_for_path(path)?
            .with_input_fact(
                0,
                InferenceFact::dt_shape(f32::datum_type(), input_shape(width, height, layout)),
            )?
            .into_optimized()?
            .into_runnable()
    }
}

impl FeatureExtractor for FeatureExtractorTractOnnx {
    fn extract(&self, image: &DynamicImage) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>> {
        let (height, width) = self.input_shape;
        let input = resize_image_to_tensor(image, width, height, self.layout);

        let outputs = self.model.run(tvec!(input.into_tvalue()))?;
        let output = outputs
            .first()
            .ok_or("feature extractor produced no output")?
            .to_array_view::<f32>()?;

        Ok(output.iter().copied().collect())
    }
}
