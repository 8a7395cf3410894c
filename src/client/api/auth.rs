//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::Credentials;
use crate::error::Result;

/// Login operations for the Revue API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for an access token
    async fn authenticate(&self, credentials: &Credentials) -> Result<String>;
}
