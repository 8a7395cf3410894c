//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::client::jwt_expiry;
use crate::config::Config;
use crate::error::Result;

/// Show the resolved configuration without touching the network
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "revue-check Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not found, using defaults)".dimmed()
        );
    }

    let config = Config::load_at(opts.config_ref())?.with_overrides(&opts.overrides());
    println!("Base URL: {}", config.base_url()?.cyan());
    println!();

    match config.preset_token() {
        Some(token) => match jwt_expiry(token) {
            Ok(expires) if expires < chrono::Utc::now() => {
                println!(
                    "{} Preset token expired at {} (requests will likely be rejected)",
                    "⚠".yellow(),
                    expires.to_rfc3339()
                );
            }
            Ok(expires) => {
                let remaining = expires.signed_duration_since(chrono::Utc::now());
                println!(
                    "{} Preset token valid (expires in {}h {}m)",
                    "✓".green(),
                    remaining.num_hours(),
                    remaining.num_minutes() % 60
                );
            }
            Err(_) => println!("{} Preset token configured", "✓".green()),
        },
        None => println!("{} No preset token (will log in)", "○".dimmed()),
    }

    match config.credentials() {
        Ok(Some(creds)) => println!("{} Login credentials for {}", "✓".green(), creds.username),
        Ok(None) => println!("{} No login credentials configured", "○".dimmed()),
        Err(err) => println!("{} {}", "✗".red(), err),
    }

    if config.validate_auth().is_err() {
        println!();
        println!("  → Pass --token, or --username and --password");
    }

    println!();
    Ok(())
}
