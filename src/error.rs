use std::path::PathBuf;

/// Failure to read a model artifact or the input image, tagged with its path.
#[derive(Debug, thiserror::Error)]
#[error("failed to load {kind} from {}: {source}", .path.display())]
pub struct LoadError {
    pub kind: &'static str,
    pub path: PathBuf,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl LoadError {
    pub fn new(
        kind: &'static str,
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            kind,
            path: path.into(),
            source: source.into(),
        }
    }
}
