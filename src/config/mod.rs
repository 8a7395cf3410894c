//! Configuration management for revue-check
//!
//! Values are layered: CLI flag > environment variable > config file >
//! built-in default. Clap resolves the first two; this module owns the file
//! and the defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::client::{Credentials, DEFAULT_BASE_URL};
use crate::error::{ConfigError, Result};

/// Configuration file contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Revue API base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Preset access token; when set, login is skipped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Login user name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Login password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Runtime overrides coming from flags or environment
#[derive(Debug, Clone, Default)]
pub struct Overrides<'a> {
    pub base_url: Option<&'a str>,
    pub token: Option<&'a str>,
    pub username: Option<&'a str>,
    pub password: Option<&'a str>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".revue-check").join("config.yaml"))
    }

    /// Resolve an explicit path or fall back to the default location
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from `path` (or the default path).
    ///
    /// A missing file yields the default configuration.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Save configuration to `path` (or the default path)
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Token and password live here
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Apply flag/env overrides on top of file values
    pub fn with_overrides(mut self, overrides: &Overrides<'_>) -> Self {
        if let Some(url) = overrides.base_url {
            self.base_url = Some(url.to_string());
        }
        if let Some(token) = overrides.token {
            self.token = Some(token.to_string());
        }
        if let Some(username) = overrides.username {
            self.username = Some(username.to_string());
        }
        if let Some(password) = overrides.password {
            self.password = Some(password.to_string());
        }
        self
    }

    /// Base URL with the built-in default applied
    pub fn base_url(&self) -> Result<String> {
        let url = non_blank(&self.base_url).unwrap_or(DEFAULT_BASE_URL);
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "base URL must start with http:// or https://, got '{}'",
                url
            ))
            .into());
        }
        Ok(url.to_string())
    }

    /// Preset token, if a non-blank one is configured
    pub fn preset_token(&self) -> Option<&str> {
        non_blank(&self.token)
    }

    /// Login credentials, if both user name and password are configured
    pub fn credentials(&self) -> Result<Option<Credentials>> {
        match (non_blank(&self.username), non_blank(&self.password)) {
            (Some(user), Some(pass)) => Ok(Some(Credentials::new(user, pass))),
            (None, None) => Ok(None),
            (Some(_), None) => {
                Err(ConfigError::Invalid("username is set but password is missing".into()).into())
            }
            (None, Some(_)) => {
                Err(ConfigError::Invalid("password is set but username is missing".into()).into())
            }
        }
    }

    /// Check that a token can be resolved one way or another
    pub fn validate_auth(&self) -> Result<()> {
        if self.preset_token().is_none() && self.credentials()?.is_none() {
            return Err(ConfigError::MissingCredentials.into());
        }
        Ok(())
    }
}
