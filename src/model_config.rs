use crate::config::{Config, TensorLayout};
use std::path::PathBuf;

/// Resolved locations of the three artifacts plus the extractor's input geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub classifier_path: PathBuf,
    pub feature_extractor_path: PathBuf,
    pub label_encoder_path: PathBuf,
    /// (height, width)
    pub input_shape: (u32, u32),
    pub layout: TensorLayout,
}

impl ModelConfig {
    pub fn new(config: &Config) -> Self {
        let names = &config.artifact_names;
        Self {
            classifier_path: config.models_dir.join(&names.classifier),
            feature_extractor_path: config.models_dir.join(&names.feature_extractor),
            label_encoder_path: config.models_dir.join(&names.label_encoder),
            input_shape: config.input_shape,
            layout: config.layout,
        }
    }
}
