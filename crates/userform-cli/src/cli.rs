//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Userform - contact record form driver
#[derive(Parser, Debug)]
#[command(name = "userform", version)]
#[command(about = "Capture, validate and manage contact records", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run an interactive (or scripted) form session
    Run {
        /// Read session commands from a file instead of stdin
        #[arg(long)]
        script: Option<PathBuf>,

        /// Delete without asking for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// List the known countries
    Countries,

    /// Validate a single record and report field errors
    Validate(ValidateArgs),

    /// Configuration operations
    Config {
        /// Config action to run
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Field values for one-shot validation.
#[derive(Args, Debug, Default)]
pub struct ValidateArgs {
    /// Full name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Email address
    #[arg(long, default_value = "")]
    pub email: String,

    /// City
    #[arg(long, default_value = "")]
    pub city: String,

    /// ISO country code
    #[arg(long, default_value = "")]
    pub country: String,

    /// Phone number (repeatable)
    #[arg(long = "phone")]
    pub phones: Vec<String>,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,

    /// Print a value by dotted key (e.g. `form.keep_one_phone_slot`)
    Get {
        /// Dotted key
        key: String,
    },

    /// Write a default config file
    Init {
        /// Target file (defaults to the resolved config path)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
