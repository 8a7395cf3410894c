//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod context;
pub mod login;
pub mod run;
pub mod scenarios;
pub mod status;

pub use args::OutputFormat;

use crate::suite::Scenario;

/// revue-check - ordered end-to-end checks for the Revue API
#[derive(Parser, Debug)]
#[command(name = "revue-check")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "REVUE_FORMAT",
        default_value = "pretty",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "REVUE_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Revue API base URL
    #[arg(long, global = true, env = "REVUE_BASE_URL", hide_env = true)]
    pub base_url: Option<String>,

    /// Preset access token (skips login)
    #[arg(long, global = true, env = "REVUE_TOKEN", hide_env = true)]
    pub token: Option<String>,

    /// Login user name
    #[arg(long, global = true, env = "REVUE_USERNAME", hide_env = true)]
    pub username: Option<String>,

    /// Login password
    #[arg(long, global = true, env = "REVUE_PASSWORD", hide_env = true)]
    pub password: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "REVUE_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the ordered scenario suite
    Run {
        /// Run only this scenario (repeatable; suite order is kept)
        #[arg(long, value_enum)]
        only: Vec<Scenario>,

        /// Stop at the first failing scenario
        #[arg(long)]
        fail_fast: bool,
    },

    /// List the scenarios in execution order
    Scenarios,

    /// Log in with the configured credentials and print the token
    Login {
        /// Store the token in the config file as the preset token
        #[arg(long)]
        save: bool,
    },

    /// Show configuration and token status
    Status,

    /// Display version information
    Version,
}
