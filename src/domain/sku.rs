use serde::{Deserialize, Serialize};

use crate::domain::constants::{BusinessConstants, ConstantsError, ProductTier, SHARE_TOLERANCE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkuRecord {
    pub name: String,
    pub pack_size: u32,
    pub price: f64,
    pub margin: f64,
    pub tier: ProductTier,
    pub volume_share: f64,
    pub pack_share: f64,
}

impl SkuRecord {
    pub fn new(tier: ProductTier, pack_size: u32, price: f64, margin: f64, volume_share: f64, pack_share: f64) -> Self {
        Self {
            name: format!("{} Eggs ({} Pack)", tier.label(), pack_size),
            pack_size,
            price,
            margin,
            tier,
            volume_share,
            pack_share,
        }
    }

    pub fn pack_label(&self) -> String {
        format!("{} Pack", self.pack_size)
    }
}

/// Checks every variant's numbers and that it carries its tier's volume share
/// and margin, then the pack splits.
pub fn validate_skus(skus: &[SkuRecord], constants: &BusinessConstants) -> Result<(), ConstantsError> {
    for sku in skus {
        let fields = [
            ("price", sku.price),
            ("margin", sku.margin),
            ("volume_share", sku.volume_share),
            ("pack_share", sku.pack_share),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConstantsError::NonFinite {
                field: format!("skus[{}].{field}", sku.name),
            });
        }
        if sku.price <= 0.0 {
            return Err(ConstantsError::NonPositivePrice {
                item: sku.name.clone(),
                price: sku.price,
            });
        }
        if !(0.0..=1.0).contains(&sku.margin) {
            return Err(ConstantsError::SkuMarginOutOfRange {
                sku: sku.name.clone(),
                margin: sku.margin,
            });
        }
        let carries_tier = constants.tier(sku.tier).is_some_and(|profile| {
            (profile.volume_share - sku.volume_share).abs() <= SHARE_TOLERANCE
                && (profile.margin - sku.margin).abs() <= SHARE_TOLERANCE
        });
        if !carries_tier {
            return Err(ConstantsError::SkuTierMismatch {
                sku: sku.name.clone(),
                tier: sku.tier,
            });
        }
    }
    validate_pack_shares(skus)
}

/// Checks that, within every tier, the pack-size variants split the tier's
/// volume completely.
pub fn validate_pack_shares(skus: &[SkuRecord]) -> Result<(), ConstantsError> {
    for tier in ProductTier::ALL {
        let mut variants = skus.iter().filter(|sku| sku.tier == tier).peekable();
        if variants.peek().is_none() {
            continue;
        }
        let sum: f64 = variants.map(|sku| sku.pack_share).sum();
        if (sum - 1.0).abs() > SHARE_TOLERANCE {
            return Err(ConstantsError::PackSharesDoNotSumToOne { tier, sum });
        }
    }
    Ok(())
}
