//! Userform CLI
//!
//! Command-line interface for the userform contact form.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use userform_cli::cli::{Cli, Command};
use userform_cli::commands::{cmd_countries, cmd_run, cmd_validate};
use userform_cli::config::UserformConfig;
use userform_cli::config_handlers::handle_config_command;
use userform_cli::logging::init_logging;

fn main() -> Result<()> {
    let Cli {
        config: config_path,
        verbose,
        command,
    } = Cli::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // Config commands must work before a config file exists.
    if let Command::Config { action } = command {
        init_logging("info", verbose);
        handle_config_command(config_path.as_deref(), action, &mut out)?;
        return Ok(());
    }

    let config = UserformConfig::load(config_path.as_deref())?;
    init_logging(&config.logging.filter, verbose);

    match command {
        Command::Run { script, yes } => {
            let stdin = std::io::stdin();
            let session = cmd_run(&config, script.as_deref(), yes, stdin.lock(), &mut out)?;
            tracing::info!(entries = session.store().len(), "Session finished");
        }
        Command::Countries => {
            let countries = config.load_countries()?;
            cmd_countries(&countries, &mut out)?;
        }
        Command::Validate(validate_args) => {
            let countries = config.load_countries()?;
            cmd_validate(&countries, &validate_args, &mut out)?;
        }
        Command::Config { .. } => {}
    }

    Ok(())
}
