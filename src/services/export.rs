use std::io::{self, Write};

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::domain::case_study::CaseStudy;
use crate::domain::scenario::SimulationInput;
use crate::domain::seasonal::month_label;
use crate::services::category_pnl::build_category_pnl;
use crate::services::currency_format::CRORE;
use crate::services::pnl_calculator::PnlCalculator;
use crate::services::supply_chain::summarize_supply_chain;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SupplyChainExport {
    pub barwala_rate: f64,
    pub delhi_rate: f64,
    pub transport: f64,
    pub packaging: f64,
    pub landed_cost: f64,
    pub breakage_old: f64,
    pub breakage_new: f64,
    pub direct_sourcing_savings: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AnnualizedPnlExport {
    pub gmv_cr: f64,
    pub cogs_pct: f64,
    pub wastage_pct: f64,
    pub last_mile_pct: f64,
    pub dark_store_pct: f64,
    pub payment_pct: f64,
    pub ad_revenue_pct: f64,
    pub platform_fee_pct: f64,
    pub net_ebitda_cr: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BridgeExport {
    pub base: f64,
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    pub q4: f64,
    pub target: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SimulatorDefaultsExport {
    pub daily_orders: f64,
    pub aov: f64,
    pub ad_rate: f64,
    pub wastage_rate: f64,
    pub delivery_cost: f64,
    pub ebitda_cr: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalFactorsExport(pub Vec<(String, f64)>);

impl Serialize for SeasonalFactorsExport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (month, factor) in &self.0 {
            map.serialize_entry(month, factor)?;
        }
        map.end()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ExportDocument {
    pub supply_chain: SupplyChainExport,
    pub blended_margin: f64,
    pub annualized_pnl: AnnualizedPnlExport,
    pub ebitda_bridge: BridgeExport,
    pub seasonal_factors: SeasonalFactorsExport,
    pub simulator_defaults: SimulatorDefaultsExport,
}

pub fn build_export(case_study: &CaseStudy) -> ExportDocument {
    let constants = &case_study.constants;
    let supply = constants.supply_chain();
    let operations = constants.operations();
    let costs = constants.cost_structure();
    let bridge = constants.bridge();
    let summary = summarize_supply_chain(supply);
    let pnl = build_category_pnl(constants);

    let defaults = SimulationInput::default();
    let simulated = PnlCalculator::new(constants).simulate(&defaults);

    ExportDocument {
        supply_chain: SupplyChainExport {
            barwala_rate: supply.farm_gate_rate,
            delhi_rate: supply.wholesale_rate,
            transport: supply.transport_handling,
            packaging: supply.packaging_per_egg,
            landed_cost: summary.landed_cost,
            breakage_old: supply.breakage_old,
            breakage_new: supply.breakage_new,
            direct_sourcing_savings: supply.direct_sourcing_savings,
        },
        blended_margin: constants.blended_margin(),
        annualized_pnl: AnnualizedPnlExport {
            gmv_cr: round2(pnl.gmv / CRORE),
            cogs_pct: costs.cogs,
            wastage_pct: costs.wastage,
            last_mile_pct: costs.last_mile,
            dark_store_pct: costs.dark_store,
            payment_pct: costs.payment_tech,
            ad_revenue_pct: costs.ad_revenue,
            platform_fee_pct: costs.platform_fee,
            net_ebitda_cr: round2(pnl.net_ebitda() / CRORE),
        },
        ebitda_bridge: BridgeExport {
            base: bridge.base_ebitda_cr,
            q1: bridge.supply_fix_cr,
            q2: bridge.mix_shift_cr,
            q3: bridge.winter_hedge_cr,
            q4: bridge.ad_engine_cr,
            target: bridge.target_ebitda_cr(),
        },
        seasonal_factors: SeasonalFactorsExport(
            constants
                .seasonal()
                .iter()
                .map(|(month, factor)| (month_label(month), factor))
                .collect(),
        ),
        simulator_defaults: SimulatorDefaultsExport {
            daily_orders: defaults.daily_orders,
            aov: operations.average_order_value,
            ad_rate: defaults.ad_rate_pct,
            wastage_rate: defaults.wastage_rate_pct,
            delivery_cost: operations.delivery_cost_per_order,
            ebitda_cr: round2(simulated.ebitda / CRORE),
        },
    }
}

pub fn serialize_export_to_json<W: Write>(writer: &mut W, document: &ExportDocument) -> io::Result<()> {
    let json = serde_json::to_string_pretty(document).map_err(io::Error::other)?;
    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_rounds_crore_figures_to_two_places() {
        let document = build_export(&CaseStudy::builtin());
        assert_eq!(document.annualized_pnl.gmv_cr, 547.5);
        assert!((document.annualized_pnl.net_ebitda_cr - 104.025).abs() < 0.0051);
        assert_eq!(document.simulator_defaults.ebitda_cr, 70.08);
        assert!((document.ebitda_bridge.target - 108.22).abs() < 1e-9);
    }

    #[test]
    fn json_keeps_seasonal_factors_in_fiscal_order() {
        let document = build_export(&CaseStudy::builtin());
        let mut buffer = Vec::new();
        serialize_export_to_json(&mut buffer, &document).unwrap();
        let json = String::from_utf8(buffer).unwrap();

        let april = json.find("\"Apr\"").unwrap();
        let december = json.find("\"Dec\"").unwrap();
        let march = json.find("\"Mar\"").unwrap();
        assert!(april < december && december < march);
        assert!(json.contains("\"blended_margin\""));
        assert!(json.contains("\"barwala_rate\": 4.75"));
    }

    #[test]
    fn json_parses_back_into_a_value() {
        let document = build_export(&CaseStudy::builtin());
        let mut buffer = Vec::new();
        serialize_export_to_json(&mut buffer, &document).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["seasonal_factors"]["Jan"], 1.25);
        assert_eq!(value["simulator_defaults"]["daily_orders"], 100000.0);
    }
}
