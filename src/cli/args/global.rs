//! Global CLI options shared across all commands
//!
//! Collects the global flags into one struct so handlers take a single
//! argument instead of a growing parameter list.

use crate::cli::{Cli, OutputFormat};
use crate::config::Overrides;

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; the config file is merged later in
/// `RunContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format (pretty, table, json)
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.revue-check/config.yaml)
    pub config: Option<String>,

    /// Revue API base URL override
    pub base_url: Option<String>,

    /// Preset access token override
    pub token: Option<String>,

    /// Login user name override
    pub username: Option<String>,

    /// Login password override
    pub password: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            base_url: cli.base_url.clone(),
            token: cli.token.clone(),
            username: cli.username.clone(),
            password: cli.password.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Flag/env layer for merging over the config file.
    pub fn overrides(&self) -> Overrides<'_> {
        Overrides {
            base_url: self.base_url.as_deref(),
            token: self.token.as_deref(),
            username: self.username.as_deref(),
            password: self.password.as_deref(),
        }
    }
}
