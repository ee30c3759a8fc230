use crate::config::{Config, TensorLayout};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "predict", about = "Classify one skin image and print the verdict as JSON")]
pub struct Arguments {
    /// Image to classify
    pub image_path: PathBuf,
    /// Directory holding the classifier, feature extractor and label encoder
    #[arg(long = "models-dir")]
    pub models_dir: Option<PathBuf>,
    /// Input layout expected by the feature extractor
    #[arg(long, value_enum, default_value = "nhwc")]
    pub layout: TensorLayout,
    /// Seed for the confidence draw
    #[arg(long)]
    pub seed: Option<u64>,
    /// Log debug lines on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    pub fn config(&self) -> Config {
        let defaults = Config::default();
        Config {
            models_dir: self.models_dir.clone().unwrap_or(defaults.models_dir.clone()),
            layout: self.layout,
            confidence_seed: self.seed,
            verbose: self.verbose,
            ..defaults
        }
    }
}
