use std::collections::BTreeMap;

use plotters::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("failed to render histogram: {0}")]
    Render(String),
}

/// Outcome counts keyed by bucket index; bucket `i` covers values around
/// `i * bin_width`.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBins {
    pub bin_width: f64,
    pub counts: BTreeMap<i64, usize>,
}

impl HistogramBins {
    pub fn max_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }
}

/// Square-root rule binning. A single repeated value gets one bucket of
/// width 1.
pub fn bin_results(results: &[f64]) -> HistogramBins {
    let min_value = results.iter().copied().fold(f64::INFINITY, f64::min);
    let max_value = results.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let range = max_value - min_value;
    let bin_width = if results.is_empty() || range < f64::EPSILON {
        1.0
    } else {
        range / (results.len() as f64).sqrt()
    };

    let mut counts = BTreeMap::new();
    for value in results {
        let bucket = (*value / bin_width).round() as i64;
        *counts.entry(bucket).or_insert(0usize) += 1;
    }

    HistogramBins { bin_width, counts }
}

pub fn write_histogram_png(output_path: &str, results_cr: &[f64]) -> Result<(), HistogramError> {
    if results_cr.is_empty() {
        return Ok(());
    }

    let bins = bin_results(results_cr);
    let bin_width = bins.bin_width;
    let max_count = bins.max_count();

    let min_bucket = bins.counts.keys().next().copied().unwrap_or(0) - 1;
    let max_bucket = bins.counts.keys().next_back().copied().unwrap_or(0) + 1;

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Annual EBITDA Sensitivity", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(min_bucket..max_bucket, 0..(max_count + 1))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("EBITDA (Rs Cr)")
        .y_desc("Frequency")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_label_formatter(&|bucket| format!("{:.1}", *bucket as f64 * bin_width))
        .draw()
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let loss_color = RGBColor(239, 68, 68);
    let profit_color = RGBColor(30, 122, 204);
    chart
        .draw_series(bins.counts.iter().map(|(bucket, count)| {
            let color = if (*bucket as f64) * bin_width < 0.0 {
                loss_color
            } else {
                profit_color
            };
            Rectangle::new([(*bucket, 0), (*bucket + 1, *count)], color.filled())
        }))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| HistogramError::Render(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_values_fall_into_one_bucket() {
        let bins = bin_results(&[70.08, 70.08, 70.08]);
        assert_eq!(bins.bin_width, 1.0);
        assert_eq!(bins.counts.len(), 1);
        assert_eq!(bins.max_count(), 3);
    }

    #[test]
    fn every_result_is_counted_once() {
        let results: Vec<f64> = (0..100).map(|i| -20.0 + i as f64 * 1.5).collect();
        let bins = bin_results(&results);
        assert_eq!(bins.counts.values().sum::<usize>(), 100);
        // range 148.5 over sqrt(100) buckets
        assert!((bins.bin_width - 14.85).abs() < 1e-9);
        assert!(bins.counts.keys().next().copied().unwrap() < 0);
    }

    #[test]
    fn empty_input_has_no_buckets() {
        let bins = bin_results(&[]);
        assert!(bins.counts.is_empty());
        assert_eq!(bins.max_count(), 0);
    }
}
