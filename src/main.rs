mod bootstrap;
mod commands;
mod domain;
mod services;
#[cfg(test)]
mod test_support;

use std::process::ExitCode;

use clap::Parser;

use crate::commands::base_commands::CliArgs;

fn main() -> ExitCode {
    bootstrap::init_tracing();
    let args = CliArgs::parse();
    match commands::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
