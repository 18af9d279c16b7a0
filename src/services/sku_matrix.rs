use serde::Serialize;

use crate::domain::constants::OperationalConstants;
use crate::domain::sku::SkuRecord;

/// Which margin the table shows: the supplier margin, or what is left per
/// order after delivery cost and ad income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkuView {
    Gross,
    TrueNet,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkuRow {
    pub name: String,
    pub pack: String,
    pub price: f64,
    pub orders: u64,
    pub gross_profit: f64,
    pub net_profit: f64,
    pub displayed_margin: f64,
    pub displayed_profit: f64,
    pub contribution: f64,
}

impl SkuRow {
    pub fn is_loss(&self) -> bool {
        self.displayed_margin < 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkuMatrixSummary {
    pub total_orders: u64,
    pub total_revenue: f64,
    pub total_gross_profit: f64,
    pub total_net_profit: f64,
    pub blended_gross_margin: Option<f64>,
    pub blended_net_margin: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkuMatrix {
    pub view: SkuView,
    pub monthly_orders: f64,
    pub rows: Vec<SkuRow>,
    pub summary: SkuMatrixSummary,
}

pub fn build_sku_matrix(
    skus: &[SkuRecord],
    operations: &OperationalConstants,
    view: SkuView,
    monthly_orders: f64,
) -> SkuMatrix {
    let mut rows = Vec::with_capacity(skus.len());
    let mut total_orders = 0u64;
    let mut total_revenue = 0.0;
    let mut total_gross_profit = 0.0;
    let mut total_net_profit = 0.0;

    for sku in skus {
        let orders = sku_orders(monthly_orders, sku);
        let order_count = orders as f64;
        let gross_profit = sku.price * sku.margin;
        let net_profit =
            gross_profit - operations.delivery_cost_per_order + operations.ad_revenue_per_order;

        let (displayed_margin, displayed_profit) = match view {
            SkuView::Gross => (sku.margin, gross_profit),
            SkuView::TrueNet => (net_profit / sku.price, net_profit),
        };

        total_orders += orders;
        total_revenue += sku.price * order_count;
        total_gross_profit += gross_profit * order_count;
        total_net_profit += net_profit * order_count;

        rows.push(SkuRow {
            name: sku.name.clone(),
            pack: sku.pack_label(),
            price: sku.price,
            orders,
            gross_profit,
            net_profit,
            displayed_margin,
            displayed_profit,
            contribution: displayed_profit * order_count,
        });
    }

    let share_of_revenue = |amount: f64| {
        if total_revenue == 0.0 {
            None
        } else {
            Some(amount / total_revenue)
        }
    };

    let summary = SkuMatrixSummary {
        total_orders,
        total_revenue,
        total_gross_profit,
        total_net_profit,
        blended_gross_margin: share_of_revenue(total_gross_profit),
        blended_net_margin: share_of_revenue(total_net_profit),
    };

    SkuMatrix {
        view,
        monthly_orders,
        rows,
        summary,
    }
}

fn sku_orders(monthly_orders: f64, sku: &SkuRecord) -> u64 {
    (monthly_orders * sku.volume_share * sku.pack_share)
        .round()
        .max(0.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::case_study::CaseStudy;
    use crate::test_support::assert_close;

    fn matrix(view: SkuView) -> SkuMatrix {
        let case_study = CaseStudy::builtin();
        build_sku_matrix(
            &case_study.skus,
            case_study.constants.operations(),
            view,
            100_000.0,
        )
    }

    #[test]
    fn orders_are_split_by_tier_and_pack_share() {
        let matrix = matrix(SkuView::Gross);
        let orders: Vec<u64> = matrix.rows.iter().map(|row| row.orders).collect();
        assert_eq!(
            orders,
            vec![17_500, 28_000, 24_500, 5_000, 8_000, 7_000, 2_500, 4_000, 3_500]
        );
        assert_eq!(matrix.summary.total_orders, 100_000);
    }

    #[test]
    fn gross_view_shows_supplier_margin() {
        let matrix = matrix(SkuView::Gross);
        let white_six = &matrix.rows[0];
        assert_eq!(white_six.displayed_margin, 0.15);
        assert_close(white_six.displayed_profit, 7.5);
        assert_close(white_six.contribution, 131_250.0);
        assert!(!white_six.is_loss());
    }

    #[test]
    fn true_net_view_exposes_loss_making_small_packs() {
        let matrix = matrix(SkuView::TrueNet);
        let white_six = &matrix.rows[0];
        assert_close(white_six.displayed_profit, -7.5);
        assert_close(white_six.displayed_margin, -0.15);
        assert!(white_six.is_loss());

        let white_thirty = &matrix.rows[2];
        assert_close(white_thirty.displayed_profit, 19.2);
        assert!(!white_thirty.is_loss());
    }

    #[test]
    fn totals_do_not_depend_on_view() {
        let gross = matrix(SkuView::Gross);
        let net = matrix(SkuView::TrueNet);
        assert_eq!(gross.summary, net.summary);
    }

    #[test]
    fn summary_reports_blended_margins() {
        let summary = matrix(SkuView::Gross).summary;
        assert_close(summary.total_revenue, 14_396_000.0);
        assert_close(summary.total_gross_profit, 3_042_600.0);
        assert_close(summary.total_net_profit, 1_542_600.0);
        assert_close(summary.blended_gross_margin.unwrap(), 3_042_600.0 / 14_396_000.0);
        assert_close(summary.blended_net_margin.unwrap(), 1_542_600.0 / 14_396_000.0);
    }

    #[test]
    fn zero_volume_has_no_blended_margin() {
        let case_study = CaseStudy::builtin();
        let matrix = build_sku_matrix(
            &case_study.skus,
            case_study.constants.operations(),
            SkuView::Gross,
            0.0,
        );
        assert_eq!(matrix.summary.total_orders, 0);
        assert_eq!(matrix.summary.blended_gross_margin, None);
        assert_eq!(matrix.summary.blended_net_margin, None);
    }
}
