use serde::{Deserialize, Serialize};

use crate::domain::constants::ConstantsError;

/// Shelf price of one comparable SKU on the three quick-commerce platforms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompetitorQuote {
    pub sku: String,
    pub blinkit: f64,
    pub zepto: f64,
    pub swiggy: f64,
    pub analysis: String,
}

impl CompetitorQuote {
    pub fn prices(&self) -> [f64; 3] {
        [self.blinkit, self.zepto, self.swiggy]
    }

    pub fn average_price(&self) -> f64 {
        self.prices().iter().sum::<f64>() / 3.0
    }

    /// Max-min spread as a percentage of the average price.
    pub fn price_variance_pct(&self) -> f64 {
        let prices = self.prices();
        let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
        (max - min) / self.average_price() * 100.0
    }
}

pub fn validate_competitors(quotes: &[CompetitorQuote]) -> Result<(), ConstantsError> {
    for quote in quotes {
        let platforms = ["blinkit", "zepto", "swiggy"];
        for (platform, price) in platforms.iter().zip(quote.prices()) {
            if !price.is_finite() {
                return Err(ConstantsError::NonFinite {
                    field: format!("competitors[{}].{platform}", quote.sku),
                });
            }
            if price <= 0.0 {
                return Err(ConstantsError::NonPositivePrice {
                    item: format!("{} on {platform}", quote.sku),
                    price,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(blinkit: f64, zepto: f64, swiggy: f64) -> CompetitorQuote {
        CompetitorQuote {
            sku: "Commodity White (30 Pack)".to_string(),
            blinkit,
            zepto,
            swiggy,
            analysis: String::new(),
        }
    }

    #[test]
    fn price_variance_uses_spread_over_average() {
        let quote = quote(228.0, 230.0, 232.0);
        assert_eq!(quote.average_price(), 230.0);
        assert!((quote.price_variance_pct() - 4.0 / 230.0 * 100.0).abs() < 1e-12);
    }

    #[test]
    fn identical_prices_have_no_variance() {
        assert_eq!(quote(127.0, 127.0, 127.0).price_variance_pct(), 0.0);
    }

    #[test]
    fn unpriced_quote_is_rejected() {
        let quotes = vec![quote(228.0, 230.0, 232.0), quote(0.0, 0.0, 0.0)];
        assert_eq!(
            validate_competitors(&quotes),
            Err(ConstantsError::NonPositivePrice {
                item: "Commodity White (30 Pack) on blinkit".to_string(),
                price: 0.0,
            })
        );
    }

    #[test]
    fn non_finite_quote_names_the_platform() {
        assert_eq!(
            validate_competitors(&[quote(228.0, f64::INFINITY, 232.0)]),
            Err(ConstantsError::NonFinite {
                field: "competitors[Commodity White (30 Pack)].zepto".to_string(),
            })
        );
    }
}
