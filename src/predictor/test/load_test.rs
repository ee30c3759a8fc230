use crate::config::Config;
use crate::library::logger::impl_fake::LoggerFake;
use crate::model_config::ModelConfig;
use crate::predictor::test::fixture::{write_all_artifacts, write_artifacts};
use crate::predictor::Predictor;
use image::{DynamicImage, ImageBuffer, Rgb};
use std::sync::Arc;

fn config_in(dir: &tempfile::TempDir) -> Config {
    Config {
        models_dir: dir.path().to_path_buf(),
        ..Config::default()
    }
}

fn load_error(config: Config) -> String {
    match Predictor::load(config, Arc::new(LoggerFake::new())) {
        Ok(_) => panic!("loading should fail"),
        Err(e) => e.to_string(),
    }
}

#[test]
fn test_empty_models_dir_fails_on_the_classifier() {
    let dir = tempfile::tempdir().unwrap();

    let error = load_error(config_in(&dir));

    assert!(error.contains("classifier"), "{}", error);
    assert!(error.contains("svm_skin_model.json"), "{}", error);
}

#[test]
fn test_missing_feature_extractor_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    write_artifacts(&config);

    let error = load_error(config);

    assert!(error.contains("feature extractor"), "{}", error);
}

#[test]
fn test_corrupt_classifier_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    write_artifacts(&config);
    std::fs::write(ModelConfig::new(&config).classifier_path, b"{\"kernel\":").unwrap();

    let error = load_error(config);

    assert!(error.contains("classifier"), "{}", error);
}

#[test]
fn test_missing_label_encoder_fails_after_the_models_load() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    write_all_artifacts(&config);
    std::fs::remove_file(ModelConfig::new(&config).label_encoder_path).unwrap();

    let error = load_error(config);

    assert!(error.contains("label encoder"), "{}", error);
    assert!(error.contains("label_encoder.json"), "{}", error);
}

#[test]
fn test_load_then_predict_with_onnx_extractor() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        confidence_seed: Some(3),
        ..config_in(&dir)
    };
    write_all_artifacts(&config);
    let logger = LoggerFake::new();

    let predictor = match Predictor::load(config, Arc::new(logger.clone())) {
        Ok(predictor) => predictor,
        Err(e) => panic!("loading failed: {}", e),
    };

    let red = dir.path().join("red.png");
    DynamicImage::ImageRgb8(ImageBuffer::from_pixel(300, 200, Rgb([230, 20, 10])))
        .save(&red)
        .unwrap();
    let blue = dir.path().join("blue.png");
    DynamicImage::ImageRgb8(ImageBuffer::from_pixel(120, 160, Rgb([15, 30, 240])))
        .save(&blue)
        .unwrap();

    let diagnosis = predictor.predict(&red).unwrap();
    assert_eq!(diagnosis.diagnosis, "Acne");
    assert!((75.0..95.0).contains(&diagnosis.confidence));
    assert_eq!(predictor.predict(&blue).unwrap().diagnosis, "Melanoma");

    let lines = logger.lines();
    assert!(lines.iter().any(|line| line == "predictor:load: Models loaded"));
    assert!(lines
        .iter()
        .any(|line| line == "predictor: Predicted class 1 (Melanoma)"));
}
