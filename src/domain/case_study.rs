use crate::domain::competitor::{CompetitorQuote, validate_competitors};
use crate::domain::constants::{
    BridgeInitiatives, BusinessConstants, CategoryCostStructure, ConstantsError,
    OperationalConstants, ProductTier, SupplyChainRates, TierProfile, TierShare,
};
use crate::domain::seasonal::SeasonalFactorTable;
use crate::domain::sku::{SkuRecord, validate_skus};

static PACK_SPLIT: [(u32, f64); 3] = [(6, 0.25), (10, 0.40), (30, 0.35)];

#[derive(Debug, Clone, PartialEq)]
pub struct CaseStudy {
    pub constants: BusinessConstants,
    pub skus: Vec<SkuRecord>,
    pub competitors: Vec<CompetitorQuote>,
}

impl CaseStudy {
    pub fn new(constants: BusinessConstants, skus: Vec<SkuRecord>, competitors: Vec<CompetitorQuote>) -> Self {
        Self {
            constants,
            skus,
            competitors,
        }
    }

    /// The Delhi NCR egg-category dataset (January 2026 rates).
    pub fn builtin() -> Self {
        let supply_chain = SupplyChainRates {
            farm_gate_rate: 4.75,
            wholesale_rate: 5.10,
            transport_handling: 0.25,
            packaging_per_egg: 0.18,
            breakage_old: 0.04,
            breakage_new: 0.015,
            trader_margin: 0.15,
            transport_spread: 0.15,
            breakage_spread: 0.05,
            direct_sourcing_savings: 0.15,
        };
        let tiers = vec![
            TierProfile {
                tier: ProductTier::White,
                volume_share: 0.70,
                margin: 0.15,
            },
            TierProfile {
                tier: ProductTier::Protein,
                volume_share: 0.20,
                margin: 0.30,
            },
            TierProfile {
                tier: ProductTier::Brown,
                volume_share: 0.10,
                margin: 0.33,
            },
        ];
        let operations = OperationalConstants {
            delivery_cost_per_order: 30.0,
            ad_revenue_per_order: 15.0,
            monthly_orders: 100_000.0,
            average_order_value: 150.0,
            daily_orders: 100_000.0,
            days_per_year: 365.0,
            eggs_per_order: 15.0,
        };
        let cost_structure = CategoryCostStructure {
            cogs: 0.75,
            wastage: 0.02,
            last_mile: 0.15,
            dark_store: 0.05,
            payment_tech: 0.02,
            ad_revenue: 0.15,
            platform_fee: 0.03,
        };
        let bridge = BridgeInitiatives {
            base_ebitda_cr: 83.72,
            supply_fix_cr: 2.5,
            mix_shift_cr: 5.8,
            winter_hedge_cr: 4.2,
            ad_engine_cr: 12.0,
            target_mix: vec![
                TierShare {
                    tier: ProductTier::White,
                    share: 0.60,
                },
                TierShare {
                    tier: ProductTier::Protein,
                    share: 0.30,
                },
                TierShare {
                    tier: ProductTier::Brown,
                    share: 0.10,
                },
            ],
            current_ad_fill: 0.15,
            target_ad_fill: 0.25,
        };
        let seasonal = SeasonalFactorTable::from_fiscal_factors([
            0.92, 0.88, 0.85, 0.90, 0.95, 1.00, 1.05, 1.10, 1.20, 1.25, 1.15, 1.00,
        ]);

        let skus = builtin_catalog(&tiers);
        let constants = BusinessConstants::new(
            supply_chain,
            tiers,
            operations,
            cost_structure,
            bridge,
            seasonal,
        );

        Self::new(constants, skus, builtin_competitors())
    }

    pub fn validate(&self) -> Result<(), ConstantsError> {
        self.constants.validate()?;
        validate_skus(&self.skus, &self.constants)?;
        validate_competitors(&self.competitors)
    }
}

fn builtin_catalog(tiers: &[TierProfile]) -> Vec<SkuRecord> {
    let prices = |tier: ProductTier| -> [f64; 3] {
        match tier {
            ProductTier::White => [50.0, 85.0, 228.0],
            ProductTier::Protein => [80.0, 130.0, 350.0],
            ProductTier::Brown => [70.0, 110.0, 300.0],
        }
    };

    tiers
        .iter()
        .flat_map(|profile| {
            PACK_SPLIT
                .iter()
                .zip(prices(profile.tier))
                .map(move |((pack_size, pack_share), price)| {
                    SkuRecord::new(
                        profile.tier,
                        *pack_size,
                        price,
                        profile.margin,
                        profile.volume_share,
                        *pack_share,
                    )
                })
        })
        .collect()
}

fn builtin_competitors() -> Vec<CompetitorQuote> {
    vec![
        CompetitorQuote {
            sku: "Commodity White (30 Pack)".to_string(),
            blinkit: 228.0,
            zepto: 230.0,
            swiggy: 232.0,
            analysis: "Algorithmic matching keeps variance under 2%".to_string(),
        },
        CompetitorQuote {
            sku: "Premium White (6 Pack)".to_string(),
            blinkit: 75.0,
            zepto: 69.0,
            swiggy: 76.0,
            analysis: "Zepto undercuts via private label \"Relish\"".to_string(),
        },
        CompetitorQuote {
            sku: "Brown/Free Range (6 Pack)".to_string(),
            blinkit: 143.0,
            zepto: 127.0,
            swiggy: 127.0,
            analysis: "Blinkit commands premium on niche SKUs".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_case_study_is_valid() {
        assert_eq!(CaseStudy::builtin().validate(), Ok(()));
    }

    #[test]
    fn builtin_catalog_lists_tiers_then_pack_sizes() {
        let case_study = CaseStudy::builtin();
        let names: Vec<&str> = case_study.skus.iter().map(|sku| sku.name.as_str()).collect();
        assert_eq!(names[0], "White Eggs (6 Pack)");
        assert_eq!(names[2], "White Eggs (30 Pack)");
        assert_eq!(names[4], "Protein Eggs (10 Pack)");
        assert_eq!(names[8], "Brown Eggs (30 Pack)");
        assert_eq!(case_study.skus[5].price, 350.0);
        assert_eq!(case_study.skus[6].margin, 0.33);
    }

    #[test]
    fn builtin_skus_carry_their_tier_volume_share() {
        let case_study = CaseStudy::builtin();
        for sku in &case_study.skus {
            let profile = case_study.constants.tier(sku.tier).unwrap();
            assert_eq!(sku.volume_share, profile.volume_share);
            assert_eq!(sku.margin, profile.margin);
        }
    }

    #[test]
    fn validate_surfaces_catalog_errors() {
        let mut case_study = CaseStudy::builtin();
        case_study.skus[0].pack_share = 0.5;
        assert!(matches!(
            case_study.validate(),
            Err(ConstantsError::PackSharesDoNotSumToOne {
                tier: ProductTier::White,
                ..
            })
        ));
    }
}
