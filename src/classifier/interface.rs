pub trait Classifier {
    /// Returns the class index predicted for one flat feature vector.
    fn predict(&self, features: &[f32]) -> Result<i64, Box<dyn std::error::Error + Send + Sync>>;
}
