use chrono::Month;
use thiserror::Error;

/// Months in fiscal-year order, April first.
pub const FISCAL_MONTHS: [Month; 12] = [
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
    Month::January,
    Month::February,
    Month::March,
];

#[derive(Error, Debug, PartialEq)]
pub enum SeasonalTableError {
    #[error("expected 12 months, found {0}")]
    WrongCardinality(usize),
    #[error("month {0} appears more than once")]
    DuplicateMonth(String),
    #[error("factor for {0} must be a finite number")]
    NonFiniteFactor(String),
}

/// Monthly price multipliers around a base of 1.0, one per calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalFactorTable {
    factors: [f64; 12],
}

impl SeasonalFactorTable {
    pub fn from_fiscal_factors(factors: [f64; 12]) -> Self {
        Self { factors }
    }

    /// Every calendar month must be present exactly once.
    pub fn try_from_entries(entries: &[(Month, f64)]) -> Result<Self, SeasonalTableError> {
        if entries.len() != FISCAL_MONTHS.len() {
            return Err(SeasonalTableError::WrongCardinality(entries.len()));
        }

        let mut factors = [0.0; 12];
        let mut seen = [false; 12];
        for (month, factor) in entries {
            let index = fiscal_index(*month);
            if seen[index] {
                return Err(SeasonalTableError::DuplicateMonth(month_label(*month)));
            }
            seen[index] = true;
            factors[index] = *factor;
        }

        let table = Self { factors };
        table.validate()?;
        Ok(table)
    }

    pub fn validate(&self) -> Result<(), SeasonalTableError> {
        for (month, factor) in self.iter() {
            if !factor.is_finite() {
                return Err(SeasonalTableError::NonFiniteFactor(month_label(month)));
            }
        }
        Ok(())
    }

    pub fn factor(&self, month: Month) -> f64 {
        self.factors[fiscal_index(month)]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Month, f64)> + '_ {
        FISCAL_MONTHS
            .iter()
            .copied()
            .zip(self.factors.iter().copied())
    }
}

/// Position of `month` within the April-first fiscal year.
pub fn fiscal_index(month: Month) -> usize {
    (month.number_from_month() as usize + 8) % 12
}

pub fn month_label(month: Month) -> String {
    month.name().chars().take(3).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> [f64; 12] {
        [1.0, 1.1, 1.2, 1.3, 1.4, 1.5, 1.6, 1.7, 1.8, 1.9, 2.0, 2.1]
    }

    #[test]
    fn fiscal_index_starts_in_april() {
        assert_eq!(fiscal_index(Month::April), 0);
        assert_eq!(fiscal_index(Month::December), 8);
        assert_eq!(fiscal_index(Month::January), 9);
        assert_eq!(fiscal_index(Month::March), 11);
    }

    #[test]
    fn month_label_is_three_letters() {
        assert_eq!(month_label(Month::September), "Sep");
        assert_eq!(month_label(Month::May), "May");
    }

    #[test]
    fn factor_looks_up_by_calendar_month() {
        let table = SeasonalFactorTable::from_fiscal_factors(ramp());
        assert_eq!(table.factor(Month::April), 1.0);
        assert_eq!(table.factor(Month::January), 1.9);
        assert_eq!(table.factor(Month::March), 2.1);
    }

    #[test]
    fn iter_yields_all_months_in_fiscal_order() {
        let table = SeasonalFactorTable::from_fiscal_factors(ramp());
        let months: Vec<Month> = table.iter().map(|(month, _)| month).collect();
        assert_eq!(months, FISCAL_MONTHS.to_vec());
    }

    #[test]
    fn try_from_entries_accepts_any_order() {
        let mut entries: Vec<(Month, f64)> = FISCAL_MONTHS.iter().copied().zip(ramp()).collect();
        entries.reverse();

        let table = SeasonalFactorTable::try_from_entries(&entries).unwrap();
        assert_eq!(table, SeasonalFactorTable::from_fiscal_factors(ramp()));
    }

    #[test]
    fn try_from_entries_rejects_missing_months() {
        let entries: Vec<(Month, f64)> = FISCAL_MONTHS.iter().copied().zip(ramp()).take(11).collect();
        assert_eq!(
            SeasonalFactorTable::try_from_entries(&entries),
            Err(SeasonalTableError::WrongCardinality(11))
        );
    }

    #[test]
    fn try_from_entries_rejects_duplicates() {
        let mut entries: Vec<(Month, f64)> = FISCAL_MONTHS.iter().copied().zip(ramp()).collect();
        entries[11] = (Month::April, 1.0);
        assert_eq!(
            SeasonalFactorTable::try_from_entries(&entries),
            Err(SeasonalTableError::DuplicateMonth("Apr".to_string()))
        );
    }

    #[test]
    fn try_from_entries_rejects_non_finite_factors() {
        let mut entries: Vec<(Month, f64)> = FISCAL_MONTHS.iter().copied().zip(ramp()).collect();
        entries[3].1 = f64::INFINITY;
        assert_eq!(
            SeasonalFactorTable::try_from_entries(&entries),
            Err(SeasonalTableError::NonFiniteFactor("Jul".to_string()))
        );
    }
}
