use serde::Serialize;

use crate::domain::constants::SupplyChainRates;

pub const EGGS_PER_TRAY: f64 = 30.0;

/// Per-egg cost build from the farm gate to the dark store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplyChainSummary {
    pub farm_gate_rate: f64,
    pub wholesale_rate: f64,
    pub landed_cost: f64,
    pub wholesale_spread: f64,
    pub transport_spread: f64,
    pub breakage_spread: f64,
    pub trader_margin: f64,
    /// Whatever is left of the spread once its components are paid.
    pub arbitrage_per_egg: f64,
    pub direct_sourcing_savings: f64,
    pub breakage_old: f64,
    pub breakage_new: f64,
    pub breakage_savings_per_egg: f64,
    pub tray_cost: f64,
}

pub fn summarize_supply_chain(rates: &SupplyChainRates) -> SupplyChainSummary {
    let wholesale_spread = rates.wholesale_rate - rates.farm_gate_rate;
    SupplyChainSummary {
        farm_gate_rate: rates.farm_gate_rate,
        wholesale_rate: rates.wholesale_rate,
        landed_cost: rates.farm_gate_rate + rates.transport_handling + rates.packaging_per_egg,
        wholesale_spread,
        transport_spread: rates.transport_spread,
        breakage_spread: rates.breakage_spread,
        trader_margin: rates.trader_margin,
        arbitrage_per_egg: wholesale_spread
            - rates.transport_spread
            - rates.breakage_spread
            - rates.trader_margin,
        direct_sourcing_savings: rates.direct_sourcing_savings,
        breakage_old: rates.breakage_old,
        breakage_new: rates.breakage_new,
        breakage_savings_per_egg: (rates.breakage_old - rates.breakage_new) * rates.farm_gate_rate,
        tray_cost: rates.packaging_per_egg * EGGS_PER_TRAY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::builtin_constants;

    #[test]
    fn landed_cost_adds_transport_and_packaging() {
        let summary = summarize_supply_chain(builtin_constants().supply_chain());
        assert!((summary.landed_cost - 5.18).abs() < 1e-9);
        assert!((summary.tray_cost - 5.40).abs() < 1e-9);
    }

    #[test]
    fn spread_is_fully_absorbed_by_its_components() {
        let summary = summarize_supply_chain(builtin_constants().supply_chain());
        assert!((summary.wholesale_spread - 0.35).abs() < 1e-9);
        assert!(summary.arbitrage_per_egg.abs() < 1e-9);
    }

    #[test]
    fn pulp_trays_save_breakage_on_every_egg() {
        let summary = summarize_supply_chain(builtin_constants().supply_chain());
        assert!((summary.breakage_savings_per_egg - 0.11875).abs() < 1e-9);
    }
}
