use std::io::{self, Write};

use crate::commands::base_commands::ExportFormat;
use crate::commands::{CommandError, write_file};
use crate::domain::case_study::CaseStudy;
use crate::services::case_study_yaml::serialize_case_study_to_yaml;
use crate::services::export::{build_export, serialize_export_to_json};

pub fn export_command(case_study: &CaseStudy, format: ExportFormat, output: Option<&str>) -> Result<(), CommandError> {
    let target = output.unwrap_or("stdout");
    let mut buffer = Vec::new();
    let serialized = match format {
        ExportFormat::Json => serialize_export_to_json(&mut buffer, &build_export(case_study)),
        ExportFormat::Yaml => serialize_case_study_to_yaml(&mut buffer, case_study),
    };
    serialized.map_err(|source| CommandError::Write {
        path: target.to_string(),
        source,
    })?;

    match output {
        Some(path) => {
            write_file(path, &buffer)?;
            println!("Export written to {path}");
        }
        None => io::stdout()
            .lock()
            .write_all(&buffer)
            .map_err(|source| CommandError::Write {
                path: target.to_string(),
                source,
            })?,
    }
    Ok(())
}
