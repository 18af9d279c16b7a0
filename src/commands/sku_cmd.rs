use crate::commands::report_format::format_sku_matrix;
use crate::domain::case_study::CaseStudy;
use crate::services::sku_matrix::{SkuView, build_sku_matrix};

pub fn sku_command(case_study: &CaseStudy, true_net: bool, monthly_orders: Option<f64>) {
    let operations = case_study.constants.operations();
    let view = if true_net { SkuView::TrueNet } else { SkuView::Gross };
    let monthly_orders = monthly_orders.unwrap_or(operations.monthly_orders);

    let matrix = build_sku_matrix(&case_study.skus, operations, view, monthly_orders);
    println!("{}", format_sku_matrix(&matrix));
}
