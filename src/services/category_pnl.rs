use serde::Serialize;

use crate::domain::constants::BusinessConstants;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PnlItem {
    Gmv,
    Cogs,
    GrossProfitTrading,
    Wastage,
    NetGrossProfit,
    LastMile,
    DarkStore,
    PaymentTech,
    OperationalContribution,
    AdRevenue,
    PlatformFees,
    NetEbitda,
}

impl PnlItem {
    pub fn label(&self) -> &'static str {
        match self {
            PnlItem::Gmv => "Gross Merchandise Value (GMV)",
            PnlItem::Cogs => "Cost of Goods Sold (COGS)",
            PnlItem::GrossProfitTrading => "Gross Profit (Trading)",
            PnlItem::Wastage => "Wastage & Shrinkage",
            PnlItem::NetGrossProfit => "Net Gross Profit",
            PnlItem::LastMile => "Allocated Last Mile Delivery",
            PnlItem::DarkStore => "Dark Store Operations",
            PnlItem::PaymentTech => "Payment Gateway & Tech",
            PnlItem::OperationalContribution => "Operational Contribution",
            PnlItem::AdRevenue => "Ad Revenue (Search/Display)",
            PnlItem::PlatformFees => "Platform/Handling Fees",
            PnlItem::NetEbitda => "NET CATEGORY EBITDA",
        }
    }

    pub fn closes_section(&self) -> bool {
        matches!(self, PnlItem::NetGrossProfit | PnlItem::OperationalContribution)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PnlLine {
    pub item: PnlItem,
    pub amount: f64,
    pub share_of_gmv: Option<f64>,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPnl {
    pub daily_orders: f64,
    pub gmv: f64,
    pub lines: Vec<PnlLine>,
}

impl CategoryPnl {
    pub fn amount(&self, item: PnlItem) -> Option<f64> {
        self.lines
            .iter()
            .find(|line| line.item == item)
            .map(|line| line.amount)
    }

    pub fn net_ebitda(&self) -> f64 {
        self.amount(PnlItem::NetEbitda).unwrap_or(0.0)
    }
}

/// Annualised category statement, from GMV down to EBITDA, using the cost
/// structure fractions of the constant table. Costs are negative amounts.
pub fn build_category_pnl(constants: &BusinessConstants) -> CategoryPnl {
    let operations = constants.operations();
    let costs = constants.cost_structure();
    let supply = constants.supply_chain();

    let gmv = operations.daily_orders * operations.average_order_value * operations.days_per_year;
    let cogs = gmv * costs.cogs;
    let gross_profit_trading = gmv - cogs;
    let wastage = gmv * costs.wastage;
    let net_gross = gross_profit_trading - wastage;

    let last_mile = gmv * costs.last_mile;
    let dark_store = gmv * costs.dark_store;
    let payment_tech = gmv * costs.payment_tech;
    let operational_contribution = net_gross - (last_mile + dark_store + payment_tech);

    let ad_revenue = gmv * costs.ad_revenue;
    let platform_fees = gmv * costs.platform_fee;
    let net_ebitda = operational_contribution + ad_revenue + platform_fees;

    let landed_cost = supply.farm_gate_rate + supply.transport_handling + supply.packaging_per_egg;
    let share = |amount: f64| if gmv == 0.0 { None } else { Some(amount / gmv) };
    let line = |item: PnlItem, amount: f64, note: String| PnlLine {
        item,
        amount,
        share_of_gmv: share(amount),
        note,
    };

    let lines = vec![
        line(PnlItem::Gmv, gmv, "Full recognition under 1P model".to_string()),
        line(
            PnlItem::Cogs,
            -cogs,
            format!("Landed cost Rs {landed_cost:.2}/egg vs Rs 6.00 blended realization"),
        ),
        line(
            PnlItem::GrossProfitTrading,
            gross_profit_trading,
            "Base trading margin".to_string(),
        ),
        line(
            PnlItem::Wastage,
            -wastage,
            "Expired stock / In store breakage".to_string(),
        ),
        line(PnlItem::NetGrossProfit, net_gross, String::new()),
        line(
            PnlItem::LastMile,
            -last_mile,
            "Allocated cost (part of basket)".to_string(),
        ),
        line(
            PnlItem::DarkStore,
            -dark_store,
            "Picking, Packing, Rent, Utilities".to_string(),
        ),
        line(
            PnlItem::PaymentTech,
            -payment_tech,
            format!("{:.0}% MDR average", costs.payment_tech * 100.0),
        ),
        line(
            PnlItem::OperationalContribution,
            operational_contribution,
            "Operationally Breakeven".to_string(),
        ),
        line(
            PnlItem::AdRevenue,
            ad_revenue,
            format!("{:.0}% of GMV", costs.ad_revenue * 100.0),
        ),
        line(
            PnlItem::PlatformFees,
            platform_fees,
            "Allocated fee income".to_string(),
        ),
        line(
            PnlItem::NetEbitda,
            net_ebitda,
            "Profit driven by Ads & Fees".to_string(),
        ),
    ];

    CategoryPnl {
        daily_orders: operations.daily_orders,
        gmv,
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::currency_format::CRORE;
    use crate::test_support::{assert_close, builtin_constants};

    #[test]
    fn statement_walks_from_gmv_to_ebitda() {
        let pnl = build_category_pnl(&builtin_constants());

        assert_eq!(pnl.gmv, 5_475_000_000.0);
        assert_eq!(pnl.lines.len(), 12);
        assert_eq!(pnl.lines[0].item, PnlItem::Gmv);
        assert_eq!(pnl.lines[11].item, PnlItem::NetEbitda);
        assert_close(pnl.amount(PnlItem::Cogs).unwrap(), -4_106_250_000.0);
        assert_close(pnl.amount(PnlItem::NetGrossProfit).unwrap(), 1_259_250_000.0);
        assert_close(
            pnl.amount(PnlItem::OperationalContribution).unwrap(),
            54_750_000.0,
        );
    }

    #[test]
    fn net_ebitda_is_nineteen_percent_of_gmv() {
        let pnl = build_category_pnl(&builtin_constants());

        assert_close(pnl.net_ebitda() / CRORE, 104.025);
        let share = pnl.lines.last().and_then(|line| line.share_of_gmv).unwrap();
        assert_close(share, 0.19);
    }

    #[test]
    fn costs_are_negative_and_income_positive() {
        let pnl = build_category_pnl(&builtin_constants());
        for item in [PnlItem::Cogs, PnlItem::Wastage, PnlItem::LastMile, PnlItem::DarkStore, PnlItem::PaymentTech] {
            assert!(pnl.amount(item).unwrap() < 0.0, "{item:?} should be a cost");
        }
        for item in [PnlItem::AdRevenue, PnlItem::PlatformFees] {
            assert!(pnl.amount(item).unwrap() > 0.0, "{item:?} should be income");
        }
    }

    #[test]
    fn cogs_note_quotes_the_landed_cost() {
        let pnl = build_category_pnl(&builtin_constants());
        assert!(pnl.lines[1].note.contains("Rs 5.18/egg"));
        assert_eq!(pnl.lines[7].note, "2% MDR average");
    }
}
