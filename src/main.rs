use clap::Parser;
use cli::Arguments;
use library::logger::impl_console::LoggerConsole;
use predictor::Predictor;
use std::sync::Arc;

mod classifier;
mod cli;
mod confidence;
mod config;
mod diagnosis;
mod error;
mod feature_extractor;
mod label_encoder;
mod library;
mod model_config;
mod predictor;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let arguments = Arguments::parse();

    let config = arguments.config();

    let logger = Arc::new(LoggerConsole::new(config.logger_timezone, config.verbose));

    let predictor = Predictor::load(config, logger)?;

    let diagnosis = predictor.predict(&arguments.image_path)?;

    println!("{}", diagnosis.to_json_line()?);

    Ok(())
}
