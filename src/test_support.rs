use crate::domain::case_study::CaseStudy;
use crate::domain::constants::BusinessConstants;
use crate::services::beta_pert_sampler::ThreePointSampler;
use crate::services::beta_pert_sampler::SamplerError;

// A ThreePointSampler that always returns the most likely value
pub struct MostLikelySampler;
impl ThreePointSampler for MostLikelySampler {
    fn sample(&mut self, _min: f64, most_likely: f64, _max: f64) -> Result<f64, SamplerError> {
        Ok(most_likely)
    }
}

pub fn builtin_constants() -> BusinessConstants {
    CaseStudy::builtin().constants
}

/// Relative comparison for values built from decimal fractions.
pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}
