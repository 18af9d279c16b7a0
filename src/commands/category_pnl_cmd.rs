use crate::commands::report_format::format_category_pnl;
use crate::domain::case_study::CaseStudy;
use crate::services::category_pnl::build_category_pnl;

pub fn category_pnl_command(case_study: &CaseStudy) {
    let pnl = build_category_pnl(&case_study.constants);
    println!("{}", format_category_pnl(&pnl));
}
