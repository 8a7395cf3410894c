//! Revue API data models
//!
//! Request bodies and the response shapes returned by the Revue service.

mod auth;
mod revue;

pub use auth::{AccessToken, Credentials, LoginResponse, TokenSource};
pub use revue::{ApiEnvelope, RevueDraft, RevueRecord};
