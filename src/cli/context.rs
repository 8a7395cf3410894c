//! Command execution context
//!
//! Loads configuration, resolves the access token once and builds the
//! authenticated client every suite command shares.

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::{AccessToken, LoginClient, RevueClient, resolve_access_token};
use crate::config::Config;
use crate::error::Result;

/// Context for commands that talk to the Revue API.
///
/// - Access token resolved exactly once
/// - Authenticated client reused for every request
pub struct RunContext {
    /// Access token for this run
    pub token: AccessToken,
    /// Authenticated API client
    pub client: RevueClient,
    /// Output format preference
    pub format: OutputFormat,
}

impl RunContext {
    /// Create a new context, logging in if no preset token is configured.
    ///
    /// # Errors
    /// Returns error if config cannot be loaded or authentication fails.
    pub async fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?.with_overrides(&opts.overrides());
        config.validate_auth()?;

        let base_url = config.base_url()?;
        let credentials = config.credentials()?;

        let login = LoginClient::new(&base_url)?;
        let token =
            resolve_access_token(&login, config.preset_token(), credentials.as_ref()).await?;
        log::info!("Using {} access token against {}", token.source, base_url);

        let client = RevueClient::new(&base_url, &token)?;

        Ok(Self {
            token,
            client,
            format: opts.format,
        })
    }
}
