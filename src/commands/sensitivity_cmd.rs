use crate::commands::report_format::format_sensitivity_report;
use crate::commands::{CommandError, write_file};
use crate::domain::case_study::CaseStudy;
use crate::services::sensitivity::simulate_sensitivity_to_file;
use crate::services::sensitivity_types::SensitivityRanges;

pub fn sensitivity_command(
    case_study: &CaseStudy,
    source: &str,
    ranges: &SensitivityRanges,
    iterations: usize,
    seed: Option<u64>,
    output: &str,
    histogram: Option<&str>,
) -> Result<(), CommandError> {
    let mut simulation =
        simulate_sensitivity_to_file(&case_study.constants, ranges, iterations, seed, histogram)?;
    simulation.report.data_source = source.to_string();

    let yaml = serde_yaml::to_string(&simulation)?;
    write_file(output, yaml.as_bytes())?;

    println!("{}", format_sensitivity_report(&simulation.report));
    println!("Sensitivity result for {iterations} iterations written to {output}");
    if let Some(path) = histogram {
        println!("Sensitivity histogram written to {path}");
    }
    Ok(())
}
