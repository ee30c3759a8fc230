use image::DynamicImage;

pub trait FeatureExtractor {
    /// Maps one image to a flat feature vector.
    fn extract(&self, image: &DynamicImage) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>>;
}
