use chrono::Month;

use crate::commands::CommandError;
use crate::commands::report_format::format_seasonal_curve;
use crate::domain::case_study::CaseStudy;
use crate::services::seasonal_chart::write_seasonal_chart_png;
use crate::services::seasonal_curve::{build_seasonal_curve, seasonal_point_for};

pub fn seasonal_command(case_study: &CaseStudy, month: &str, plot: Option<&str>) -> Result<(), CommandError> {
    let month = month
        .parse::<Month>()
        .map_err(|_| CommandError::InvalidMonth(month.to_string()))?;

    let curve = build_seasonal_curve(&case_study.constants);
    let selected = seasonal_point_for(&case_study.constants, month);
    println!("{}", format_seasonal_curve(&curve, &selected));

    if let Some(path) = plot {
        write_seasonal_chart_png(path, &curve)?;
        tracing::info!(path, "rendered seasonal chart");
        println!("Seasonal chart written to {path}");
    }
    Ok(())
}
