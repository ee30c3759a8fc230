use crate::classifier::{impl_svm::ClassifierSvm, interface::Classifier};
use crate::confidence::{impl_random::ConfidenceRandom, interface::ConfidenceScorer};
use crate::config::Config;
use crate::diagnosis::Diagnosis;
use crate::error::LoadError;
use crate::feature_extractor::impl_tract_onnx::FeatureExtractorTractOnnx;
use crate::feature_extractor::interface::FeatureExtractor;
use crate::feature_extractor::tract::image::load_image;
use crate::label_encoder::LabelEncoder;
use crate::library::logger::interface::Logger;
use crate::model_config::ModelConfig;
use std::path::Path;
use std::sync::Arc;

#[cfg(test)]
pub(crate) mod test;

/// Loads the three artifacts once and turns one image into a [`Diagnosis`].
pub struct Predictor {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    feature_extractor: Box<dyn FeatureExtractor>,
    classifier: Box<dyn Classifier>,
    label_encoder: LabelEncoder,
    confidence: Box<dyn ConfidenceScorer>,
}

impl Predictor {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        feature_extractor: Box<dyn FeatureExtractor>,
        classifier: Box<dyn Classifier>,
        label_encoder: LabelEncoder,
        confidence: Box<dyn ConfidenceScorer>,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("predictor"),
            feature_extractor,
            classifier,
            label_encoder,
            confidence,
        }
    }

    /// Reads classifier, feature extractor and label encoder, in that order.
    pub fn load(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let model_config = ModelConfig::new(&config);
        let log = logger.with_namespace("predictor").with_namespace("load");

        log.debug(&format!(
            "Loading classifier from {}",
            model_config.classifier_path.display()
        ))?;
        let classifier = ClassifierSvm::load(&model_config.classifier_path)?;
        log.debug(&format!(
            "Classifier expects {} features",
            classifier.n_features()
        ))?;

        log.debug(&format!(
            "Loading feature extractor from {}",
            model_config.feature_extractor_path.display()
        ))?;
        let feature_extractor = FeatureExtractorTractOnnx::new(&model_config)?;

        log.debug(&format!(
            "Loading label encoder from {}",
            model_config.label_encoder_path.display()
        ))?;
        let label_encoder = LabelEncoder::load(&model_config.label_encoder_path)?;
        log.debug(&format!(
            "Label encoder knows {} classes",
            label_encoder.classes().len()
        ))?;

        let confidence =
            ConfidenceRandom::new(config.confidence_range.clone(), config.confidence_seed)?;

        log.info("Models loaded")?;

        Ok(Self::new(
            config,
            logger,
            Box::new(feature_extractor),
            Box::new(classifier),
            label_encoder,
            Box::new(confidence),
        ))
    }

    pub fn predict(
        &self,
        image_path: &Path,
    ) -> Result<Diagnosis, Box<dyn std::error::Error + Send + Sync>> {
        let image = load_image(image_path).map_err(|e| LoadError::new("image", image_path, e))?;
        self.logger.debug(&format!(
            "Loaded {}x{} image from {}",
            image.width(),
            image.height(),
            image_path.display()
        ))?;

        let features = self.feature_extractor.extract(&image)?;
        self.logger
            .debug(&format!("Extracted {} features", features.len()))?;

        let index = self.classifier.predict(&features)?;
        let label = self.label_encoder.inverse_transform(index)?;

        let confidence = self.confidence.score()?;

        self.logger
            .info(&format!("Predicted class {} ({})", index, label))?;

        Ok(Diagnosis {
            diagnosis: label.to_string(),
            recommendation: self.config.recommendation.clone(),
            severity: self.config.severity,
            confidence,
        })
    }
}
