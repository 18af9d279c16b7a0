use crate::domain::constants::BusinessConstants;
use crate::domain::scenario::{SimulationInput, SimulationResult};

/// Annualised P&L for a daily order volume and two percentage rates.
///
/// Total over every real input: negative volumes or rates above 100 produce
/// arithmetically consistent output and nothing is clamped or rounded.
pub fn compute_annual_ebitda(
    daily_orders: f64,
    ad_rate_pct: f64,
    wastage_rate_pct: f64,
    constants: &BusinessConstants,
) -> SimulationResult {
    let operations = constants.operations();

    let total_revenue = daily_orders * operations.average_order_value * operations.days_per_year;
    let gross_profit = total_revenue * constants.blended_margin();
    let ad_income = total_revenue * (ad_rate_pct / 100.0);
    let wastage_loss = total_revenue * (wastage_rate_pct / 100.0);
    let logistics_cost =
        daily_orders * operations.delivery_cost_per_order * operations.days_per_year;

    SimulationResult {
        total_revenue,
        gross_profit,
        ad_income,
        wastage_loss,
        logistics_cost,
        ebitda: gross_profit + ad_income - wastage_loss - logistics_cost,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PnlCalculator<'a> {
    constants: &'a BusinessConstants,
}

impl<'a> PnlCalculator<'a> {
    pub fn new(constants: &'a BusinessConstants) -> Self {
        Self { constants }
    }

    pub fn simulate(&self, input: &SimulationInput) -> SimulationResult {
        compute_annual_ebitda(
            input.daily_orders,
            input.ad_rate_pct,
            input.wastage_rate_pct,
            self.constants,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_close, builtin_constants};

    #[test]
    fn default_scenario_matches_published_figures() {
        let constants = builtin_constants();
        let result = compute_annual_ebitda(100_000.0, 15.0, 2.0, &constants);

        assert_eq!(result.total_revenue, 5_475_000_000.0);
        assert_close(result.gross_profit, 1_084_050_000.0);
        assert_close(result.ad_income, 821_250_000.0);
        assert_close(result.wastage_loss, 109_500_000.0);
        assert_eq!(result.logistics_cost, 1_095_000_000.0);
        assert_close(result.ebitda, 700_800_000.0);
    }

    #[test]
    fn zero_orders_produce_an_all_zero_result() {
        let constants = builtin_constants();
        let result = compute_annual_ebitda(0.0, 15.0, 2.0, &constants);

        assert_eq!(result.total_revenue, 0.0);
        assert_eq!(result.gross_profit, 0.0);
        assert_eq!(result.ad_income, 0.0);
        assert_eq!(result.wastage_loss, 0.0);
        assert_eq!(result.logistics_cost, 0.0);
        assert_eq!(result.ebitda, 0.0);
    }

    #[test]
    fn ebitda_turns_negative_when_delivery_outweighs_margin() {
        // 150 x 19.8% = 29.70 gross per order against 30.00 delivery.
        let constants = builtin_constants();
        let result = compute_annual_ebitda(100.0, 0.0, 0.0, &constants);

        assert!(result.ebitda < 0.0);
        assert_close(result.ebitda, -0.3 * 100.0 * 365.0);
    }

    #[test]
    fn out_of_range_rates_are_not_clamped() {
        let constants = builtin_constants();
        let result = compute_annual_ebitda(1_000.0, 150.0, -10.0, &constants);

        assert_close(result.ad_income, result.total_revenue * 1.5);
        assert_close(result.wastage_loss, result.total_revenue * -0.1);
    }

    #[test]
    fn fractional_orders_are_accepted() {
        let constants = builtin_constants();
        let result = compute_annual_ebitda(0.5, 0.0, 0.0, &constants);
        assert_eq!(result.total_revenue, 0.5 * 150.0 * 365.0);
    }

    #[test]
    fn ebitda_is_the_sum_of_its_lines() {
        let constants = builtin_constants();
        let result = compute_annual_ebitda(12_345.0, 7.5, 3.25, &constants);
        assert_eq!(
            result.ebitda,
            result.gross_profit + result.ad_income - result.wastage_loss - result.logistics_cost
        );
    }

    #[test]
    fn calculator_matches_the_free_function() {
        let constants = builtin_constants();
        let calculator = PnlCalculator::new(&constants);
        let input = SimulationInput::default();

        assert_eq!(
            calculator.simulate(&input),
            compute_annual_ebitda(100_000.0, 15.0, 2.0, &constants)
        );
    }

    #[test]
    fn default_scenario_margin_is_about_thirteen_percent() {
        let constants = builtin_constants();
        let result = PnlCalculator::new(&constants).simulate(&SimulationInput::default());
        assert_close(result.ebitda_margin().unwrap(), 0.128);
    }

    mod properties {
        use super::*;
        use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

        fn close(actual: f64, expected: f64) -> bool {
            (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
        }

        proptest! {
            #![proptest_config(proptest::test_runner::Config::with_cases(64))]

            #[test]
            fn prop_same_inputs_give_identical_results(
                orders in 0.0f64..1_000_000.0,
                ad_rate in -50.0f64..150.0,
                wastage_rate in -10.0f64..50.0
            ) {
                let constants = builtin_constants();
                let first = compute_annual_ebitda(orders, ad_rate, wastage_rate, &constants);
                let second = compute_annual_ebitda(orders, ad_rate, wastage_rate, &constants);
                prop_assert_eq!(first, second);
            }

            #[test]
            fn prop_results_scale_linearly_with_orders(
                orders in 0.0f64..1_000_000.0,
                factor in 0.0f64..10.0,
                ad_rate in 0.0f64..100.0,
                wastage_rate in 0.0f64..100.0
            ) {
                let constants = builtin_constants();
                let base = compute_annual_ebitda(orders, ad_rate, wastage_rate, &constants);
                let scaled = compute_annual_ebitda(orders * factor, ad_rate, wastage_rate, &constants);

                prop_assert!(close(scaled.total_revenue, base.total_revenue * factor));
                prop_assert!(close(scaled.gross_profit, base.gross_profit * factor));
                prop_assert!(close(scaled.ad_income, base.ad_income * factor));
                prop_assert!(close(scaled.wastage_loss, base.wastage_loss * factor));
                prop_assert!(close(scaled.logistics_cost, base.logistics_cost * factor));
                // EBITDA can sit near zero; tolerance is relative to revenue.
                prop_assert!(
                    (scaled.ebitda - base.ebitda * factor).abs()
                        <= 1e-9 * scaled.total_revenue.abs().max(1.0)
                );
            }

            #[test]
            fn prop_zero_orders_zero_everything(
                ad_rate in -50.0f64..150.0,
                wastage_rate in -10.0f64..50.0
            ) {
                let constants = builtin_constants();
                let result = compute_annual_ebitda(0.0, ad_rate, wastage_rate, &constants);
                prop_assert_eq!(result.total_revenue, 0.0);
                prop_assert_eq!(result.gross_profit, 0.0);
                prop_assert_eq!(result.logistics_cost, 0.0);
                prop_assert_eq!(result.ebitda, 0.0);
            }

            #[test]
            fn prop_ebitda_is_the_sum_of_its_lines(
                orders in -1_000.0f64..1_000_000.0,
                ad_rate in -50.0f64..150.0,
                wastage_rate in -10.0f64..50.0
            ) {
                let constants = builtin_constants();
                let r = compute_annual_ebitda(orders, ad_rate, wastage_rate, &constants);
                prop_assert_eq!(r.ebitda, r.gross_profit + r.ad_income - r.wastage_loss - r.logistics_cost);
            }

            #[test]
            fn prop_gross_profit_uses_the_blended_margin(orders in 0.0f64..1_000_000.0) {
                let constants = builtin_constants();
                let result = compute_annual_ebitda(orders, 15.0, 2.0, &constants);
                prop_assert!(close(result.gross_profit, result.total_revenue * 0.198));
            }
        }
    }
}
