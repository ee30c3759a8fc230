use crate::error::LoadError;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum LabelEncoderError {
    #[error("label encoder has no classes")]
    Empty,
    #[error("y contains previously unseen labels: {0}")]
    UnseenLabel(i64),
}

/// Maps class indices produced by the classifier back to class names.
#[derive(Debug, Clone, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn new(classes: Vec<String>) -> Result<Self, LabelEncoderError> {
        if classes.is_empty() {
            return Err(LabelEncoderError::Empty);
        }
        Ok(Self { classes })
    }

    pub fn from_json(json: &str) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let encoder: LabelEncoder = serde_json::from_str(json)?;
        Ok(Self::new(encoder.classes)?)
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let read = || -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
            let json = std::fs::read_to_string(path)?;
            Self::from_json(&json)
        };

        read().map_err(|e| LoadError::new("label encoder", path, e))
    }

    pub fn inverse_transform(&self, index: i64) -> Result<&str, LabelEncoderError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.classes.get(i))
            .map(String::as_str)
            .ok_or(LabelEncoderError::UnseenLabel(index))
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}
