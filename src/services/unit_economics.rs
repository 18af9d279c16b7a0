use serde::Serialize;

use crate::domain::constants::OperationalConstants;

/// A standalone branded six-egg order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SmallOrderInputs {
    pub price: f64,
    pub cogs: f64,
    pub delivery_cost: f64,
    pub small_cart_fee: f64,
}

impl Default for SmallOrderInputs {
    fn default() -> Self {
        Self {
            price: 75.0,
            cogs: 55.0,
            delivery_cost: 30.0,
            small_cart_fee: 15.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SmallOrderEconomics {
    pub inputs: SmallOrderInputs,
    pub gross_margin: f64,
    pub net_before_fee: f64,
    pub net_after_fee: f64,
}

/// Eggs riding along in an average basket, where ad income offsets delivery.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BasketOrderEconomics {
    pub category_margin: f64,
    pub delivery_cost: f64,
    pub trading_result: f64,
    pub ad_revenue: f64,
    pub final_profit: f64,
}

pub fn small_order_economics(inputs: SmallOrderInputs) -> SmallOrderEconomics {
    let gross_margin = inputs.price - inputs.cogs;
    let net_before_fee = gross_margin - inputs.delivery_cost;
    SmallOrderEconomics {
        inputs,
        gross_margin,
        net_before_fee,
        net_after_fee: net_before_fee + inputs.small_cart_fee,
    }
}

pub fn basket_order_economics(category_margin: f64, operations: &OperationalConstants) -> BasketOrderEconomics {
    let trading_result = category_margin - operations.delivery_cost_per_order;
    BasketOrderEconomics {
        category_margin,
        delivery_cost: operations.delivery_cost_per_order,
        trading_result,
        ad_revenue: operations.ad_revenue_per_order,
        final_profit: trading_result + operations.ad_revenue_per_order,
    }
}
