use crate::commands::report_format::format_unit_economics;
use crate::domain::case_study::CaseStudy;
use crate::services::unit_economics::{SmallOrderInputs, basket_order_economics, small_order_economics};

pub fn unit_economics_command(case_study: &CaseStudy, inputs: SmallOrderInputs, basket_margin: f64) {
    let small = small_order_economics(inputs);
    let basket = basket_order_economics(basket_margin, case_study.constants.operations());
    println!("{}", format_unit_economics(&small, &basket));
}
