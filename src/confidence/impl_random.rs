use crate::confidence::interface::ConfidenceScorer;
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::ops::Range;
use std::sync::Mutex;

/// Draws the confidence uniformly from a half-open range. It is not derived
/// from the classifier's output.
pub struct ConfidenceRandom {
    distribution: Uniform<f64>,
    rng: Mutex<StdRng>,
}

impl ConfidenceRandom {
    pub fn new(
        range: Range<f64>,
        seed: Option<u64>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let distribution = Uniform::new(range.start, range.end)?;

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            distribution,
            rng: Mutex::new(rng),
        })
    }
}

impl ConfidenceScorer for ConfidenceRandom {
    fn score(&self) -> Result<f64, Box<dyn std::error::Error + Send + Sync>> {
        let mut rng = self.rng.lock().map_err(|e| e.to_string())?;
        Ok(self.distribution.sample(&mut *rng))
    }
}
