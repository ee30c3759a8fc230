pub trait ConfidenceScorer {
    /// Confidence attached to a verdict, in percent.
    fn score(&self) -> Result<f64, Box<dyn std::error::Error + Send + Sync>>;
}
