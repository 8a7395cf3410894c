//! Revue API client

pub mod api;
pub mod auth;
pub mod decode;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod revue;

pub use api::{AuthApi, RevueApi};
pub use auth::{jwt_expiry, resolve_access_token};
pub use decode::{Decoded, RawResponse, ResponseShape};
pub use models::{AccessToken, Credentials, RevueDraft};
pub use revue::{DEFAULT_BASE_URL, LoginClient, RevueClient};
