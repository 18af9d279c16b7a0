use chrono::Month;
use serde::Serialize;

use crate::domain::constants::BusinessConstants;
use crate::domain::seasonal::month_label;

/// Factors above this mark the winter spike months.
pub const SPIKE_THRESHOLD: f64 = 1.10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalPoint {
    pub month: String,
    pub factor: f64,
    pub price_per_egg: f64,
    pub delta_pct: f64,
    pub is_spike: bool,
}

/// Farm-gate price per egg across the fiscal year.
pub fn build_seasonal_curve(constants: &BusinessConstants) -> Vec<SeasonalPoint> {
    let base_rate = constants.supply_chain().farm_gate_rate;
    constants
        .seasonal()
        .iter()
        .map(|(month, factor)| seasonal_point(month, factor, base_rate))
        .collect()
}

pub fn seasonal_point_for(constants: &BusinessConstants, month: Month) -> SeasonalPoint {
    seasonal_point(
        month,
        constants.seasonal().factor(month),
        constants.supply_chain().farm_gate_rate,
    )
}

fn seasonal_point(month: Month, factor: f64, base_rate: f64) -> SeasonalPoint {
    SeasonalPoint {
        month: month_label(month),
        factor,
        price_per_egg: base_rate * factor,
        delta_pct: (factor - 1.0) * 100.0,
        is_spike: factor > SPIKE_THRESHOLD,
    }
}
