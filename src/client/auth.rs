//! Access token bootstrap
//!
//! A run resolves its bearer token exactly once: a non-blank preset token is
//! used verbatim, otherwise the credentials are exchanged at the login
//! endpoint. The token is never refreshed afterwards.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::api::AuthApi;
use super::models::{AccessToken, Credentials, TokenSource};
use crate::error::{ApiError, ConfigError, Result};

/// Resolve the access token for this run
pub async fn resolve_access_token<A: AuthApi + ?Sized>(
    auth: &A,
    preset: Option<&str>,
    credentials: Option<&Credentials>,
) -> Result<AccessToken> {
    if let Some(token) = preset.filter(|t| !t.trim().is_empty()) {
        log::debug!("Using preset access token");
        return Ok(AccessToken {
            token: token.to_string(),
            source: TokenSource::Preset,
        });
    }

    let credentials = credentials.ok_or(ConfigError::MissingCredentials)?;
    log::info!("Logging in as {}", credentials.username);
    let token = auth.authenticate(credentials).await?;

    Ok(AccessToken {
        token,
        source: TokenSource::Login,
    })
}

/// Decode base64url (URL-safe base64 without padding)
fn base64_decode_url(input: &str) -> std::result::Result<Vec<u8>, String> {
    use base64::{Engine as _, engine::general_purpose};

    general_purpose::URL_SAFE_NO_PAD
        .decode(input.trim_end_matches('='))
        .map_err(|e| e.to_string())
}

/// Read the `exp` claim from a JWT without verifying it.
///
/// Used for display only; an expired token is still sent as-is.
pub fn jwt_expiry(token: &str) -> std::result::Result<DateTime<Utc>, ApiError> {
    #[derive(Deserialize)]
    struct JwtPayload {
        exp: i64,
    }

    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(ApiError::InvalidToken);
    }

    let payload_bytes = base64_decode_url(parts[1]).map_err(|_| ApiError::InvalidToken)?;
    let payload: JwtPayload =
        serde_json::from_slice(&payload_bytes).map_err(|_| ApiError::InvalidToken)?;

    DateTime::from_timestamp(payload.exp, 0).ok_or(ApiError::InvalidToken)
}
