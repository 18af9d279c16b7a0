use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::seasonal::{SeasonalFactorTable, SeasonalTableError};

/// Shares and pack splits are accepted when they sum to 1.0 within this bound.
pub const SHARE_TOLERANCE: f64 = 1e-9;

#[derive(Error, Debug, PartialEq)]
pub enum ConstantsError {
    #[error("{field} must be a finite number")]
    NonFinite { field: String },
    #[error("tier mix is empty")]
    EmptyTierMix,
    #[error("tier {0} appears more than once")]
    DuplicateTier(ProductTier),
    #[error("tier {tier} margin {margin} is outside [0, 1]")]
    MarginOutOfRange { tier: ProductTier, margin: f64 },
    #[error("{mix} volume shares sum to {sum}, expected 1.0")]
    SharesDoNotSumToOne { mix: String, sum: f64 },
    #[error("target mix references tier {0} which has no margin")]
    UnknownTier(ProductTier),
    #[error("pack shares for tier {tier} sum to {sum}, expected 1.0")]
    PackSharesDoNotSumToOne { tier: ProductTier, sum: f64 },
    #[error("{item} price {price} must be greater than zero")]
    NonPositivePrice { item: String, price: f64 },
    #[error("sku {sku} margin {margin} is outside [0, 1]")]
    SkuMarginOutOfRange { sku: String, margin: f64 },
    #[error("sku {sku} does not carry the {tier} tier volume share and margin")]
    SkuTierMismatch { sku: String, tier: ProductTier },
    #[error("invalid seasonal table: {0}")]
    Seasonal(#[from] SeasonalTableError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProductTier {
    White,
    Protein,
    Brown,
}

impl ProductTier {
    pub const ALL: [ProductTier; 3] = [ProductTier::White, ProductTier::Protein, ProductTier::Brown];

    pub fn label(&self) -> &'static str {
        match self {
            ProductTier::White => "White",
            ProductTier::Protein => "Protein",
            ProductTier::Brown => "Brown",
        }
    }
}

impl fmt::Display for ProductTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TierProfile {
    pub tier: ProductTier,
    pub volume_share: f64,
    pub margin: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TierShare {
    pub tier: ProductTier,
    pub share: f64,
}

/// Farm-gate to dark-store cost build, per egg unless stated otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SupplyChainRates {
    pub farm_gate_rate: f64,
    pub wholesale_rate: f64,
    pub transport_handling: f64,
    pub packaging_per_egg: f64,
    pub breakage_old: f64,
    pub breakage_new: f64,
    pub trader_margin: f64,
    pub transport_spread: f64,
    pub breakage_spread: f64,
    pub direct_sourcing_savings: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OperationalConstants {
    pub delivery_cost_per_order: f64,
    pub ad_revenue_per_order: f64,
    pub monthly_orders: f64,
    pub average_order_value: f64,
    pub daily_orders: f64,
    pub days_per_year: f64,
    pub eggs_per_order: f64,
}

/// Category cost lines expressed as fractions of GMV.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryCostStructure {
    pub cogs: f64,
    pub wastage: f64,
    pub last_mile: f64,
    pub dark_store: f64,
    pub payment_tech: f64,
    pub ad_revenue: f64,
    pub platform_fee: f64,
}

/// One-year plan inputs. EBITDA figures are in crore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BridgeInitiatives {
    pub base_ebitda_cr: f64,
    pub supply_fix_cr: f64,
    pub mix_shift_cr: f64,
    pub winter_hedge_cr: f64,
    pub ad_engine_cr: f64,
    pub target_mix: Vec<TierShare>,
    pub current_ad_fill: f64,
    pub target_ad_fill: f64,
}

impl BridgeInitiatives {
    pub fn target_ebitda_cr(&self) -> f64 {
        self.base_ebitda_cr
            + self.supply_fix_cr
            + self.mix_shift_cr
            + self.winter_hedge_cr
            + self.ad_engine_cr
    }
}

/// The constant table every report is computed from. The blended margin is
/// derived from the tier mix and cannot be set on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessConstants {
    supply_chain: SupplyChainRates,
    tiers: Vec<TierProfile>,
    operations: OperationalConstants,
    cost_structure: CategoryCostStructure,
    bridge: BridgeInitiatives,
    seasonal: SeasonalFactorTable,
    blended_margin: f64,
}

impl BusinessConstants {
    pub fn new(
        supply_chain: SupplyChainRates,
        tiers: Vec<TierProfile>,
        operations: OperationalConstants,
        cost_structure: CategoryCostStructure,
        bridge: BridgeInitiatives,
        seasonal: SeasonalFactorTable,
    ) -> Self {
        let blended_margin = blended_margin_of(&tiers);
        Self {
            supply_chain,
            tiers,
            operations,
            cost_structure,
            bridge,
            seasonal,
            blended_margin,
        }
    }

    pub fn supply_chain(&self) -> &SupplyChainRates {
        &self.supply_chain
    }

    pub fn tiers(&self) -> &[TierProfile] {
        &self.tiers
    }

    pub fn tier(&self, tier: ProductTier) -> Option<&TierProfile> {
        self.tiers.iter().find(|profile| profile.tier == tier)
    }

    pub fn operations(&self) -> &OperationalConstants {
        &self.operations
    }

    pub fn cost_structure(&self) -> &CategoryCostStructure {
        &self.cost_structure
    }

    pub fn bridge(&self) -> &BridgeInitiatives {
        &self.bridge
    }

    pub fn seasonal(&self) -> &SeasonalFactorTable {
        &self.seasonal
    }

    pub fn blended_margin(&self) -> f64 {
        self.blended_margin
    }

    /// Blended margin if the tier volumes were redistributed to `shares`,
    /// keeping each tier's margin.
    pub fn blended_margin_for_mix(&self, shares: &[TierShare]) -> Result<f64, ConstantsError> {
        let mut blended = 0.0;
        for share in shares {
            let profile = self
                .tier(share.tier)
                .ok_or(ConstantsError::UnknownTier(share.tier))?;
            blended += share.share * profile.margin;
        }
        Ok(blended)
    }

    pub fn validate(&self) -> Result<(), ConstantsError> {
        self.validate_finite()?;
        self.validate_tiers()?;
        check_shares_sum(
            "tier mix",
            self.tiers.iter().map(|profile| profile.volume_share),
        )?;
        check_shares_sum(
            "target mix",
            self.bridge.target_mix.iter().map(|share| share.share),
        )?;
        self.blended_margin_for_mix(&self.bridge.target_mix)?;
        self.seasonal.validate()?;
        Ok(())
    }

    fn validate_tiers(&self) -> Result<(), ConstantsError> {
        if self.tiers.is_empty() {
            return Err(ConstantsError::EmptyTierMix);
        }
        let mut seen = Vec::with_capacity(self.tiers.len());
        for profile in &self.tiers {
            if seen.contains(&profile.tier) {
                return Err(ConstantsError::DuplicateTier(profile.tier));
            }
            seen.push(profile.tier);
            if !(0.0..=1.0).contains(&profile.margin) {
                return Err(ConstantsError::MarginOutOfRange {
                    tier: profile.tier,
                    margin: profile.margin,
                });
            }
        }
        Ok(())
    }

    fn validate_finite(&self) -> Result<(), ConstantsError> {
        let supply = &self.supply_chain;
        let operations = &self.operations;
        let costs = &self.cost_structure;
        let bridge = &self.bridge;
        let mut fields = vec![
            ("supply_chain.farm_gate_rate", supply.farm_gate_rate),
            ("supply_chain.wholesale_rate", supply.wholesale_rate),
            ("supply_chain.transport_handling", supply.transport_handling),
            ("supply_chain.packaging_per_egg", supply.packaging_per_egg),
            ("supply_chain.breakage_old", supply.breakage_old),
            ("supply_chain.breakage_new", supply.breakage_new),
            ("supply_chain.trader_margin", supply.trader_margin),
            ("supply_chain.transport_spread", supply.transport_spread),
            ("supply_chain.breakage_spread", supply.breakage_spread),
            ("supply_chain.direct_sourcing_savings", supply.direct_sourcing_savings),
            ("operations.delivery_cost_per_order", operations.delivery_cost_per_order),
            ("operations.ad_revenue_per_order", operations.ad_revenue_per_order),
            ("operations.monthly_orders", operations.monthly_orders),
            ("operations.average_order_value", operations.average_order_value),
            ("operations.daily_orders", operations.daily_orders),
            ("operations.days_per_year", operations.days_per_year),
            ("operations.eggs_per_order", operations.eggs_per_order),
            ("cost_structure.cogs", costs.cogs),
            ("cost_structure.wastage", costs.wastage),
            ("cost_structure.last_mile", costs.last_mile),
            ("cost_structure.dark_store", costs.dark_store),
            ("cost_structure.payment_tech", costs.payment_tech),
            ("cost_structure.ad_revenue", costs.ad_revenue),
            ("cost_structure.platform_fee", costs.platform_fee),
            ("bridge.base_ebitda_cr", bridge.base_ebitda_cr),
            ("bridge.supply_fix_cr", bridge.supply_fix_cr),
            ("bridge.mix_shift_cr", bridge.mix_shift_cr),
            ("bridge.winter_hedge_cr", bridge.winter_hedge_cr),
            ("bridge.ad_engine_cr", bridge.ad_engine_cr),
            ("bridge.current_ad_fill", bridge.current_ad_fill),
            ("bridge.target_ad_fill", bridge.target_ad_fill),
        ];
        for profile in &self.tiers {
            fields.push(("tiers.volume_share", profile.volume_share));
            fields.push(("tiers.margin", profile.margin));
        }

        match fields.into_iter().find(|(_, value)| !value.is_finite()) {
            Some((field, _)) => Err(ConstantsError::NonFinite {
                field: field.to_string(),
            }),
            None => Ok(()),
        }
    }
}

fn blended_margin_of(tiers: &[TierProfile]) -> f64 {
    tiers
        .iter()
        .map(|profile| profile.volume_share * profile.margin)
        .sum()
}

pub(crate) fn check_shares_sum<I>(mix: &str, shares: I) -> Result<(), ConstantsError>
where
    I: IntoIterator<Item = f64>,
{
    let sum: f64 = shares.into_iter().sum();
    if (sum - 1.0).abs() > SHARE_TOLERANCE {
        return Err(ConstantsError::SharesDoNotSumToOne {
            mix: mix.to_string(),
            sum,
        });
    }
    Ok(())
}
