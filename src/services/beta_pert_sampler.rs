use rand::Rng;
use rand_distr::{Beta, Distribution};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SamplerError {
    #[error("range is inverted: min {min} is above max {max}")]
    InvertedRange { min: f64, max: f64 },
    #[error("most likely value {most_likely} lies outside [{min}, {max}]")]
    MostLikelyOutsideRange { min: f64, most_likely: f64, max: f64 },
    #[error("invalid beta distribution: {0}")]
    Distribution(String),
}

pub trait ThreePointSampler {
    fn sample(&mut self, min: f64, most_likely: f64, max: f64) -> Result<f64, SamplerError>;
}

/// Draws from a PERT distribution (a Beta scaled onto `[min, max]`).
pub struct BetaPertSampler<R: Rng> {
    rng: R,
}

impl<R: Rng> BetaPertSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ThreePointSampler for BetaPertSampler<R> {
    fn sample(&mut self, min: f64, most_likely: f64, max: f64) -> Result<f64, SamplerError> {
        if max < min {
            return Err(SamplerError::InvertedRange { min, max });
        }
        if (max - min).abs() < f64::EPSILON {
            return Ok(min);
        }
        if most_likely < min || most_likely > max {
            return Err(SamplerError::MostLikelyOutsideRange {
                min,
                most_likely,
                max,
            });
        }

        let range = max - min;
        let alpha = 1.0 + 4.0 * ((most_likely - min) / range);
        let beta = 1.0 + 4.0 * ((max - most_likely) / range);
        let beta_dist = Beta::new(alpha, beta).map_err(|e| SamplerError::Distribution(e.to_string()))?;
        let sample = beta_dist.sample(&mut self.rng);
        Ok(min + sample * range)
    }
}
