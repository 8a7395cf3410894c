//! Error types for revue-check

use thiserror::Error;

/// Result type alias for revue-check operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{failed} of {total} scenarios failed")]
    SuiteFailed { failed: usize, total: usize },
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to authenticate. Status code: {status}, Content: {body}")]
    AuthenticationFailed { status: u16, body: String },

    #[error("No access token found in login response")]
    MissingAccessToken,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to decode {shape} response: {reason}")]
    Decode { shape: &'static str, reason: String },

    #[error("Access token is not a valid JWT")]
    InvalidToken,
}

impl ApiError {
    /// Build an authentication failure, rendering a blank body as `<empty>`
    pub fn authentication_failed(status: u16, body: &str) -> Self {
        let body = if body.trim().is_empty() {
            "<empty>".to_string()
        } else {
            body.to_string()
        };
        ApiError::AuthenticationFailed { status, body }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error(
        "No access token or login credentials configured. Pass --token, or --username and --password."
    )]
    MissingCredentials,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
