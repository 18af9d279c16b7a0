use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ScenarioError {
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },
}

/// Slider values for one simulator run. Percentages are given as 0..100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationInput {
    pub daily_orders: f64,
    pub ad_rate_pct: f64,
    pub wastage_rate_pct: f64,
}

impl SimulationInput {
    /// Rejects NaN and infinities. Negative and out-of-range values pass through.
    pub fn new(daily_orders: f64, ad_rate_pct: f64, wastage_rate_pct: f64) -> Result<Self, ScenarioError> {
        for (field, value) in [
            ("daily_orders", daily_orders),
            ("ad_rate_pct", ad_rate_pct),
            ("wastage_rate_pct", wastage_rate_pct),
        ] {
            if !value.is_finite() {
                return Err(ScenarioError::NonFinite { field, value });
            }
        }
        Ok(Self {
            daily_orders,
            ad_rate_pct,
            wastage_rate_pct,
        })
    }
}

impl Default for SimulationInput {
    fn default() -> Self {
        Self {
            daily_orders: 100_000.0,
            ad_rate_pct: 15.0,
            wastage_rate_pct: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationResult {
    pub total_revenue: f64,
    pub gross_profit: f64,
    pub ad_income: f64,
    pub wastage_loss: f64,
    pub logistics_cost: f64,
    pub ebitda: f64,
}

impl SimulationResult {
    /// EBITDA as a fraction of revenue, `None` when there is no revenue.
    pub fn ebitda_margin(&self) -> Option<f64> {
        if self.total_revenue == 0.0 {
            None
        } else {
            Some(self.ebitda / self.total_revenue)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_negative_and_out_of_range_values() {
        let input = SimulationInput::new(-5.0, 140.0, -3.0).unwrap();
        assert_eq!(input.daily_orders, -5.0);
        assert_eq!(input.ad_rate_pct, 140.0);
        assert_eq!(input.wastage_rate_pct, -3.0);
    }

    #[test]
    fn new_rejects_nan_and_infinity_with_field_name() {
        let error = SimulationInput::new(f64::NAN, 15.0, 2.0).expect_err("expected NaN error");
        assert!(matches!(
            error,
            ScenarioError::NonFinite {
                field: "daily_orders",
                ..
            }
        ));

        let error = SimulationInput::new(1.0, 15.0, f64::NEG_INFINITY).expect_err("expected infinity error");
        assert_eq!(
            error,
            ScenarioError::NonFinite {
                field: "wastage_rate_pct",
                value: f64::NEG_INFINITY
            }
        );
    }

    #[test]
    fn default_matches_simulator_sliders() {
        let input = SimulationInput::default();
        assert_eq!(input.daily_orders, 100_000.0);
        assert_eq!(input.ad_rate_pct, 15.0);
        assert_eq!(input.wastage_rate_pct, 2.0);
    }

    #[test]
    fn ebitda_margin_is_none_without_revenue() {
        let result = SimulationResult {
            total_revenue: 0.0,
            gross_profit: 0.0,
            ad_income: 0.0,
            wastage_loss: 0.0,
            logistics_cost: 0.0,
            ebitda: 0.0,
        };
        assert_eq!(result.ebitda_margin(), None);
    }
}
