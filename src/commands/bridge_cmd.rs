use crate::commands::CommandError;
use crate::commands::report_format::format_bridge;
use crate::domain::case_study::CaseStudy;
use crate::services::bridge_chart::write_bridge_chart_png;
use crate::services::ebitda_bridge::{bridge_details, build_ebitda_bridge};

pub fn bridge_command(case_study: &CaseStudy, plot: Option<&str>) -> Result<(), CommandError> {
    let bridge = build_ebitda_bridge(&case_study.constants);
    let details = bridge_details(&case_study.constants)?;
    println!("{}", format_bridge(&bridge, &details));

    if let Some(path) = plot {
        write_bridge_chart_png(path, &bridge)?;
        tracing::info!(path, "rendered bridge chart");
        println!("Bridge chart written to {path}");
    }
    Ok(())
}
