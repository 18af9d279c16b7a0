use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RangeError {
    #[error("expected three comma-separated numbers min,most_likely,max, got '{0}'")]
    Format(String),
    #[error("range values must be finite")]
    NonFinite,
    #[error("range must satisfy min <= most_likely <= max, got {min},{most_likely},{max}")]
    Unordered { min: f64, most_likely: f64, max: f64 },
}

/// Min, most likely and max of one uncertain simulator input.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ThreePointRange {
    pub min: f64,
    pub most_likely: f64,
    pub max: f64,
}

impl ThreePointRange {
    pub fn new(min: f64, most_likely: f64, max: f64) -> Result<Self, RangeError> {
        let range = Self {
            min,
            most_likely,
            max,
        };
        range.validate()?;
        Ok(range)
    }

    pub fn fixed(value: f64) -> Self {
        Self {
            min: value,
            most_likely: value,
            max: value,
        }
    }

    pub fn validate(&self) -> Result<(), RangeError> {
        if ![self.min, self.most_likely, self.max].iter().all(|v| v.is_finite()) {
            return Err(RangeError::NonFinite);
        }
        if self.min > self.most_likely || self.most_likely > self.max {
            return Err(RangeError::Unordered {
                min: self.min,
                most_likely: self.most_likely,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl FromStr for ThreePointRange {
    type Err = RangeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let values = input
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| RangeError::Format(input.to_string()))?;
        match values.as_slice() {
            [min, most_likely, max] => Self::new(*min, *most_likely, *max),
            _ => Err(RangeError::Format(input.to_string())),
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct SensitivityRanges {
    pub daily_orders: ThreePointRange,
    pub ad_rate_pct: ThreePointRange,
    pub wastage_rate_pct: ThreePointRange,
}

impl Default for SensitivityRanges {
    fn default() -> Self {
        Self {
            daily_orders: ThreePointRange {
                min: 50_000.0,
                most_likely: 100_000.0,
                max: 150_000.0,
            },
            ad_rate_pct: ThreePointRange {
                min: 10.0,
                most_likely: 15.0,
                max: 25.0,
            },
            wastage_rate_pct: ThreePointRange {
                min: 1.0,
                most_likely: 2.0,
                max: 4.0,
            },
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EbitdaPercentile {
    pub ebitda: f64,
    pub ebitda_cr: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SensitivityReport {
    pub data_source: String,
    pub iterations: usize,
    pub seed: Option<u64>,
    pub ranges: SensitivityRanges,
    pub mean_ebitda: f64,
    pub probability_of_loss: f64,
    pub p0: EbitdaPercentile,
    pub p50: EbitdaPercentile,
    pub p85: EbitdaPercentile,
    pub p100: EbitdaPercentile,
}

#[derive(Serialize, Debug, Clone)]
pub struct SensitivityOutput {
    pub report: SensitivityReport,
    pub results: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_triples() {
        let range: ThreePointRange = "50000, 100000,150000".parse().unwrap();
        assert_eq!(range.min, 50_000.0);
        assert_eq!(range.most_likely, 100_000.0);
        assert_eq!(range.max, 150_000.0);
    }

    #[test]
    fn rejects_wrong_arity_and_garbage() {
        assert!(matches!("1,2".parse::<ThreePointRange>(), Err(RangeError::Format(_))));
        assert!(matches!("1,x,3".parse::<ThreePointRange>(), Err(RangeError::Format(_))));
    }

    #[test]
    fn rejects_unordered_and_non_finite_values() {
        assert!(matches!(
            "5,1,10".parse::<ThreePointRange>(),
            Err(RangeError::Unordered { .. })
        ));
        assert_eq!("1,NaN,3".parse::<ThreePointRange>(), Err(RangeError::NonFinite));
    }

    #[test]
    fn default_ranges_are_valid() {
        let ranges = SensitivityRanges::default();
        assert_eq!(ranges.daily_orders.validate(), Ok(()));
        assert_eq!(ranges.ad_rate_pct.validate(), Ok(()));
        assert_eq!(ranges.wastage_rate_pct.validate(), Ok(()));
        assert_eq!(ThreePointRange::fixed(3.0).validate(), Ok(()));
    }
}
