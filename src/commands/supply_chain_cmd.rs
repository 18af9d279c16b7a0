use crate::commands::report_format::format_supply_chain;
use crate::domain::case_study::CaseStudy;
use crate::services::supply_chain::summarize_supply_chain;

pub fn supply_chain_command(case_study: &CaseStudy) {
    let summary = summarize_supply_chain(case_study.constants.supply_chain());
    println!("{}", format_supply_chain(&summary));
}
