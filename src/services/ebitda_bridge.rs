use serde::Serialize;

use crate::domain::constants::{BusinessConstants, ConstantsError};
use crate::services::currency_format::CRORE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BridgeStepKind {
    Base,
    SupplyFix,
    MixShift,
    WinterHedge,
    AdEngine,
    Target,
}

impl BridgeStepKind {
    pub fn label(&self) -> &'static str {
        match self {
            BridgeStepKind::Base => "Current Profit",
            BridgeStepKind::SupplyFix => "Q1: Supply Fix",
            BridgeStepKind::MixShift => "Q2: Mix Shift",
            BridgeStepKind::WinterHedge => "Q3: Winter Hedge",
            BridgeStepKind::AdEngine => "Q4: Ad Engine",
            BridgeStepKind::Target => "Target EBITDA",
        }
    }
}

/// One waterfall bar. The bar spans `offset_cr..offset_cr + value_cr`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BridgeStep {
    pub kind: BridgeStepKind,
    pub offset_cr: f64,
    pub value_cr: f64,
    pub note: String,
}

impl BridgeStep {
    pub fn top_cr(&self) -> f64 {
        self.offset_cr + self.value_cr
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EbitdaBridge {
    pub steps: Vec<BridgeStep>,
    pub target_cr: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplyFixMath {
    pub eggs_per_day: f64,
    pub annual_eggs: f64,
    pub savings_per_egg: f64,
    pub annual_savings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MixShiftMath {
    pub current_blended_margin: f64,
    pub target_blended_margin: f64,
    pub uplift: f64,
    pub revenue_impact: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdEngineMath {
    pub current_fill: f64,
    pub target_fill: f64,
    pub incremental_revenue: f64,
}

/// Bottom-up figures behind the Q1, Q2 and Q4 bridge steps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BridgeDetails {
    pub supply_fix: SupplyFixMath,
    pub mix_shift: MixShiftMath,
    pub ad_engine: AdEngineMath,
}

pub fn build_ebitda_bridge(constants: &BusinessConstants) -> EbitdaBridge {
    let bridge = constants.bridge();
    let supply = constants.supply_chain();
    let target_cr = bridge.target_ebitda_cr();

    let quarters = [
        (
            BridgeStepKind::SupplyFix,
            bridge.supply_fix_cr,
            format!(
                "Breakage {:.0}% to {:.1}%",
                supply.breakage_old * 100.0,
                supply.breakage_new * 100.0
            ),
        ),
        (
            BridgeStepKind::MixShift,
            bridge.mix_shift_cr,
            "Protein prioritization".to_string(),
        ),
        (
            BridgeStepKind::WinterHedge,
            bridge.winter_hedge_cr,
            "Forward contracts".to_string(),
        ),
        (
            BridgeStepKind::AdEngine,
            bridge.ad_engine_cr,
            format!(
                "Day parting, {:.0}% to {:.0}%",
                bridge.current_ad_fill * 100.0,
                bridge.target_ad_fill * 100.0
            ),
        ),
    ];

    let mut steps = Vec::with_capacity(quarters.len() + 2);
    steps.push(BridgeStep {
        kind: BridgeStepKind::Base,
        offset_cr: 0.0,
        value_cr: bridge.base_ebitda_cr,
        note: "Current EBITDA".to_string(),
    });

    let mut running = bridge.base_ebitda_cr;
    for (kind, value_cr, note) in quarters {
        steps.push(BridgeStep {
            kind,
            offset_cr: running,
            value_cr,
            note,
        });
        running += value_cr;
    }

    steps.push(BridgeStep {
        kind: BridgeStepKind::Target,
        offset_cr: 0.0,
        value_cr: target_cr,
        note: "Year-end run rate".to_string(),
    });

    EbitdaBridge { steps, target_cr }
}

pub fn bridge_details(constants: &BusinessConstants) -> Result<BridgeDetails, ConstantsError> {
    let operations = constants.operations();
    let supply = constants.supply_chain();
    let bridge = constants.bridge();
    let gmv = operations.daily_orders * operations.average_order_value * operations.days_per_year;

    let eggs_per_day = operations.daily_orders * operations.eggs_per_order;
    let annual_eggs = eggs_per_day * operations.days_per_year;
    let savings_per_egg = (supply.breakage_old - supply.breakage_new) * supply.farm_gate_rate;

    let current_blended_margin = constants.blended_margin();
    let target_blended_margin = constants.blended_margin_for_mix(&bridge.target_mix)?;
    let uplift = target_blended_margin - current_blended_margin;

    Ok(BridgeDetails {
        supply_fix: SupplyFixMath {
            eggs_per_day,
            annual_eggs,
            savings_per_egg,
            annual_savings: annual_eggs * savings_per_egg,
        },
        mix_shift: MixShiftMath {
            current_blended_margin,
            target_blended_margin,
            uplift,
            revenue_impact: gmv * uplift,
        },
        ad_engine: AdEngineMath {
            current_fill: bridge.current_ad_fill,
            target_fill: bridge.target_ad_fill,
            incremental_revenue: gmv * (bridge.target_ad_fill - bridge.current_ad_fill),
        },
    })
}

pub fn to_crore(amount: f64) -> f64 {
    amount / CRORE
}
