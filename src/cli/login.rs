//! Login command implementation

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::{AuthApi, LoginClient, jwt_expiry};
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Login result for JSON output
#[derive(Debug, Serialize)]
struct LoginDisplay {
    token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    expires_at: Option<DateTime<Utc>>,
    saved: bool,
}

/// Exchange the configured credentials for an access token.
///
/// With `save`, the token is written to the config file as the preset token.
pub async fn run(opts: &GlobalOptions, save: bool) -> Result<()> {
    let file_config = Config::load_at(opts.config_ref())?;
    let merged = file_config.clone().with_overrides(&opts.overrides());

    let credentials = merged.credentials()?.ok_or(ConfigError::MissingCredentials)?;
    let base_url = merged.base_url()?;

    let login = LoginClient::new(&base_url)?;
    let token = login.authenticate(&credentials).await?;
    let expires_at = jwt_expiry(&token).ok();

    if save {
        let mut updated = file_config;
        updated.token = Some(token.clone());
        updated.save_at(opts.config_ref())?;
    }

    match opts.format {
        OutputFormat::Json => {
            let display = LoginDisplay {
                token,
                expires_at,
                saved: save,
            };
            println!("{}", crate::output::json::format_json(&display)?);
        }
        OutputFormat::Pretty | OutputFormat::Table => {
            println!("{} Logged in as {}", "✓".green(), credentials.username.bold());
            if let Some(expiry) = expires_at {
                println!("  Token expires: {}", expiry.to_rfc3339());
            }
            if save {
                let path = Config::resolve_path(opts.config_ref())?;
                println!("  Token saved to {}", path.display().to_string().cyan());
            } else {
                println!("{}", token);
            }
        }
    }

    Ok(())
}
