use serde::Serialize;

use crate::commands::CommandError;
use crate::commands::base_commands::ReportFormat;
use crate::commands::report_format::format_simulation;
use crate::domain::case_study::CaseStudy;
use crate::domain::scenario::{SimulationInput, SimulationResult};
use crate::services::currency_format::CRORE;
use crate::services::pnl_calculator::PnlCalculator;

#[derive(Serialize)]
struct SimulationOutput<'a> {
    input: &'a SimulationInput,
    result: &'a SimulationResult,
    ebitda_cr: f64,
    ebitda_margin: Option<f64>,
}

pub fn simulate_command(
    case_study: &CaseStudy,
    daily_orders: f64,
    ad_rate: f64,
    wastage_rate: f64,
    format: ReportFormat,
) -> Result<(), CommandError> {
    let input = SimulationInput::new(daily_orders, ad_rate, wastage_rate)?;
    let calculator = PnlCalculator::new(&case_study.constants);
    let result = calculator.simulate(&input);
    tracing::debug!(daily_orders, ebitda = result.ebitda, "simulated scenario");

    let output = SimulationOutput {
        input: &input,
        result: &result,
        ebitda_cr: result.ebitda / CRORE,
        ebitda_margin: result.ebitda_margin(),
    };
    match format {
        ReportFormat::Text => println!("{}", format_simulation(&input, &result)),
        ReportFormat::Yaml => print!("{}", serde_yaml::to_string(&output)?),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
    }
    Ok(())
}
