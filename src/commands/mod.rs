pub mod base_commands;
pub mod bridge_cmd;
pub mod category_pnl_cmd;
pub mod competitors_cmd;
pub mod export_cmd;
pub mod report_format;
pub mod seasonal_cmd;
pub mod sensitivity_cmd;
pub mod simulate_cmd;
pub mod sku_cmd;
pub mod supply_chain_cmd;
pub mod unit_economics_cmd;

use std::io;

use clap::CommandFactory;
use thiserror::Error;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::domain::case_study::CaseStudy;
use crate::domain::constants::ConstantsError;
use crate::domain::scenario::ScenarioError;
use crate::services::bridge_chart::BridgeChartError;
use crate::services::case_study_yaml::{CaseStudyYamlError, load_case_study_from_yaml_file};
use crate::services::seasonal_chart::SeasonalChartError;
use crate::services::sensitivity::SensitivityError;
use crate::services::sensitivity_types::SensitivityRanges;
use crate::services::unit_economics::SmallOrderInputs;

pub const BUILTIN_SOURCE: &str = "built-in case study";

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Failed to load constants: {0}")]
    LoadConstants(#[from] CaseStudyYamlError),
    #[error("Invalid constant table: {0}")]
    InvalidConstants(#[from] ConstantsError),
    #[error("Invalid simulation input: {0}")]
    Scenario(#[from] ScenarioError),
    #[error("Unknown month '{0}'")]
    InvalidMonth(String),
    #[error("Failed to run sensitivity analysis: {0}")]
    Sensitivity(#[from] SensitivityError),
    #[error("Failed to plot EBITDA bridge: {0}")]
    BridgeChart(#[from] BridgeChartError),
    #[error("Failed to plot seasonal curve: {0}")]
    SeasonalChart(#[from] SeasonalChartError),
    #[error("Failed to serialize YAML output: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Failed to serialize JSON output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to write {path}: {source}")]
    Write { path: String, source: io::Error },
}

/// The constant table named by `--constants`, or the built-in one.
pub fn load_case_study(path: Option<&str>) -> Result<CaseStudy, CommandError> {
    match path {
        Some(path) => {
            let case_study = load_case_study_from_yaml_file(path)?;
            tracing::info!(path, "loaded constants file");
            Ok(case_study)
        }
        None => {
            tracing::debug!("using built-in constants");
            Ok(CaseStudy::builtin())
        }
    }
}

pub fn run(args: CliArgs) -> Result<(), CommandError> {
    if let Commands::Completions { shell } = args.command {
        let mut command = CliArgs::command();
        clap_complete::generate(shell, &mut command, "yolk", &mut io::stdout());
        return Ok(());
    }

    let source = args.constants.as_deref().unwrap_or(BUILTIN_SOURCE).to_string();
    let case_study = load_case_study(args.constants.as_deref())?;

    match args.command {
        Commands::Simulate {
            daily_orders,
            ad_rate,
            wastage_rate,
            format,
        } => simulate_cmd::simulate_command(&case_study, daily_orders, ad_rate, wastage_rate, format),
        Commands::Skus {
            true_net,
            monthly_orders,
        } => {
            sku_cmd::sku_command(&case_study, true_net, monthly_orders);
            Ok(())
        }
        Commands::CategoryPnl => {
            category_pnl_cmd::category_pnl_command(&case_study);
            Ok(())
        }
        Commands::Bridge { plot } => bridge_cmd::bridge_command(&case_study, plot.as_deref()),
        Commands::Seasonal { month, plot } => {
            seasonal_cmd::seasonal_command(&case_study, &month, plot.as_deref())
        }
        Commands::SupplyChain => {
            supply_chain_cmd::supply_chain_command(&case_study);
            Ok(())
        }
        Commands::UnitEconomics {
            price,
            cogs,
            delivery_cost,
            small_cart_fee,
            basket_margin,
        } => {
            let inputs = SmallOrderInputs {
                price,
                cogs,
                delivery_cost,
                small_cart_fee,
            };
            unit_economics_cmd::unit_economics_command(&case_study, inputs, basket_margin);
            Ok(())
        }
        Commands::Competitors => {
            competitors_cmd::competitors_command(&case_study);
            Ok(())
        }
        Commands::Sensitivity {
            output,
            histogram,
            iterations,
            seed,
            orders_range,
            ad_range,
            wastage_range,
        } => {
            let ranges = SensitivityRanges {
                daily_orders: orders_range,
                ad_rate_pct: ad_range,
                wastage_rate_pct: wastage_range,
            };
            sensitivity_cmd::sensitivity_command(
                &case_study,
                &source,
                &ranges,
                iterations,
                seed,
                &output,
                histogram.as_deref(),
            )
        }
        Commands::Export { output, format } => {
            export_cmd::export_command(&case_study, format, output.as_deref())
        }
        Commands::Completions { .. } => Ok(()),
    }
}

pub(crate) fn write_file(path: &str, contents: &[u8]) -> Result<(), CommandError> {
    std::fs::write(path, contents).map_err(|source| CommandError::Write {
        path: path.to_string(),
        source,
    })?;
    tracing::info!(path, "wrote output file");
    Ok(())
}
