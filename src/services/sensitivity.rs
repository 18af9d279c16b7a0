use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

use crate::domain::constants::BusinessConstants;
use crate::services::beta_pert_sampler::{BetaPertSampler, SamplerError, ThreePointSampler};
use crate::services::currency_format::CRORE;
use crate::services::histogram::{HistogramError, write_histogram_png};
use crate::services::percentiles::ebitda_at_percentile;
use crate::services::pnl_calculator::compute_annual_ebitda;
use crate::services::sensitivity_types::{
    EbitdaPercentile, RangeError, SensitivityOutput, SensitivityRanges, SensitivityReport,
    ThreePointRange,
};

#[derive(Error, Debug)]
pub enum SensitivityError {
    #[error("iterations must be greater than zero")]
    InvalidIterations,
    #[error("invalid range for {input}: {source}")]
    InvalidRange {
        input: &'static str,
        source: RangeError,
    },
    #[error("failed to sample input: {0}")]
    Sampler(#[from] SamplerError),
    #[error(transparent)]
    Histogram(#[from] HistogramError),
}

pub fn simulate_sensitivity_to_file(
    constants: &BusinessConstants,
    ranges: &SensitivityRanges,
    iterations: usize,
    seed: Option<u64>,
    histogram_path: Option<&str>,
) -> Result<SensitivityOutput, SensitivityError> {
    let simulation = run_sensitivity(constants, ranges, iterations, seed)?;
    if let Some(path) = histogram_path {
        let results_cr: Vec<f64> = simulation.results.iter().map(|value| value / CRORE).collect();
        write_histogram_png(path, &results_cr)?;
    }
    Ok(simulation)
}

pub fn run_sensitivity(
    constants: &BusinessConstants,
    ranges: &SensitivityRanges,
    iterations: usize,
    seed: Option<u64>,
) -> Result<SensitivityOutput, SensitivityError> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut sampler = BetaPertSampler::new(rng);
    let mut output = run_sensitivity_with_sampler(constants, ranges, iterations, &mut sampler)?;
    output.report.seed = seed;
    Ok(output)
}

pub fn run_sensitivity_with_sampler<S: ThreePointSampler + ?Sized>(
    constants: &BusinessConstants,
    ranges: &SensitivityRanges,
    iterations: usize,
    sampler: &mut S,
) -> Result<SensitivityOutput, SensitivityError> {
    if iterations == 0 {
        return Err(SensitivityError::InvalidIterations);
    }
    check_range("daily_orders", &ranges.daily_orders)?;
    check_range("ad_rate_pct", &ranges.ad_rate_pct)?;
    check_range("wastage_rate_pct", &ranges.wastage_rate_pct)?;

    tracing::debug!(iterations, "running EBITDA sensitivity");

    let mut results = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let daily_orders = draw(sampler, &ranges.daily_orders)?;
        let ad_rate_pct = draw(sampler, &ranges.ad_rate_pct)?;
        let wastage_rate_pct = draw(sampler, &ranges.wastage_rate_pct)?;
        let result = compute_annual_ebitda(daily_orders, ad_rate_pct, wastage_rate_pct, constants);
        results.push(result.ebitda);
    }
    results.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let count = results.len() as f64;
    let mean_ebitda = results.iter().sum::<f64>() / count;
    let losses = results.iter().filter(|ebitda| **ebitda < 0.0).count();

    let report = SensitivityReport {
        data_source: String::new(),
        iterations,
        seed: None,
        ranges: *ranges,
        mean_ebitda,
        probability_of_loss: losses as f64 / count,
        p0: percentile(&results, 0.0),
        p50: percentile(&results, 50.0),
        p85: percentile(&results, 85.0),
        p100: percentile(&results, 100.0),
    };

    Ok(SensitivityOutput { report, results })
}

fn check_range(input: &'static str, range: &ThreePointRange) -> Result<(), SensitivityError> {
    range
        .validate()
        .map_err(|source| SensitivityError::InvalidRange { input, source })
}

fn draw<S: ThreePointSampler + ?Sized>(sampler: &mut S, range: &ThreePointRange) -> Result<f64, SamplerError> {
    sampler.sample(range.min, range.most_likely, range.max)
}

fn percentile(sorted_results: &[f64], percentile: f64) -> EbitdaPercentile {
    let ebitda = ebitda_at_percentile(sorted_results, percentile);
    EbitdaPercentile {
        ebitda,
        ebitda_cr: ebitda / CRORE,
    }
}
