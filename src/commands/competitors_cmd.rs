use crate::commands::report_format::format_competitors;
use crate::domain::case_study::CaseStudy;

pub fn competitors_command(case_study: &CaseStudy) {
    println!("{}", format_competitors(&case_study.competitors));
}
