//! Revue resource API trait

use async_trait::async_trait;

use crate::client::decode::RawResponse;
use crate::client::models::RevueDraft;
use crate::error::Result;

/// Revue CRUD operations.
///
/// Every method returns the raw exchange; interpreting the status code is the
/// caller's job.
#[async_trait]
pub trait RevueApi: Send + Sync {
    /// `POST /Revue/Create`
    async fn create_revue(&self, draft: &RevueDraft) -> Result<RawResponse>;

    /// `GET /Revue/All`
    async fn list_revues(&self) -> Result<RawResponse>;

    /// `PUT /Revue/Edit/{id}`
    async fn edit_revue(&self, revue_id: &str, draft: &RevueDraft) -> Result<RawResponse>;

    /// `DELETE /Revue/Delete/{id}`
    async fn delete_revue(&self, revue_id: &str) -> Result<RawResponse>;
}
