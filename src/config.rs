use crate::diagnosis::Severity;
use chrono::Offset;
use std::ops::Range;
use std::path::PathBuf;

pub const RECOMMENDATION: &str = "Consultez un dermatologue pour confirmer.";

/// Memory order of the tensor fed to the feature extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TensorLayout {
    /// `[batch, height, width, channels]`, the Keras layout.
    #[default]
    Nhwc,
    /// `[batch, channels, height, width]`.
    Nchw,
}

#[derive(Debug, Clone)]
pub struct ArtifactNames {
    pub classifier: String,
    pub feature_extractor: String,
    pub label_encoder: String,
}

impl Default for ArtifactNames {
    fn default() -> Self {
        Self {
            classifier: "svm_skin_model.json".to_string(),
            feature_extractor: "mobilenetv2_features_model.onnx".to_string(),
            label_encoder: "label_encoder.json".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub models_dir: PathBuf,
    pub artifact_names: ArtifactNames,
    /// (height, width)
    pub input_shape: (u32, u32),
    pub layout: TensorLayout,
    pub confidence_range: Range<f64>,
    pub confidence_seed: Option<u64>,
    pub recommendation: String,
    pub severity: Severity,
    pub logger_timezone: chrono::FixedOffset,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            models_dir: default_models_dir(),
            artifact_names: ArtifactNames::default(),
            input_shape: (224, 224),
            layout: TensorLayout::Nhwc,
            confidence_range: 75.0..95.0,
            confidence_seed: None,
            recommendation: RECOMMENDATION.to_string(),
            severity: Severity::Medium,
            logger_timezone: utc(),
            verbose: false,
        }
    }
}

/// `../modelsIA` next to the directory holding the executable.
fn default_models_dir() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
        .unwrap_or_default();

    exe_dir.join("..").join("modelsIA")
}

fn utc() -> chrono::FixedOffset {
    chrono::Utc.fix()
}
