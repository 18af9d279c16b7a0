//! Nearest-rank lookup for the P0/P50/P85/P100 rows of the sensitivity report.

/// EBITDA at `percentile` of outcomes sorted ascending. Percentiles at or
/// below 0 give the worst outcome, at or above 100 the best; an empty run
/// reports 0.
pub fn ebitda_at_percentile(sorted_ebitda: &[f64], percentile: f64) -> f64 {
    let Some(last) = sorted_ebitda.len().checked_sub(1) else {
        return 0.0;
    };

    let index = if percentile <= 0.0 {
        0
    } else if percentile >= 100.0 {
        last
    } else {
        ((percentile / 100.0) * last as f64).round() as usize
    };

    sorted_ebitda[index.min(last)]
}
