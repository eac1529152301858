//! `ewebpack config`: inspect the project configuration and tool settings.

use ewebpack_core::error::EwebpackError;

use crate::{
    cli::ConfigCommands,
    commands::init::build_service,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Show { path } => {
            let project = build_service(&config).resolve_config(&path)?;
            let json = project.to_json_pretty().map_err(EwebpackError::from)?;
            output.data(&json)?;
        }

        ConfigCommands::Path => {
            output.data(&AppConfig::config_path().display().to_string())?;
        }

        ConfigCommands::List => {
            output.header("Current settings:")?;
            output.data(&config.to_toml()?)?;
        }
    }

    Ok(())
}
