//! Mock Revue API clients for testing
//!
//! Scripted implementations of the API traits for unit testing
//! without making real API calls.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::{AuthApi, RevueApi};
use super::decode::RawResponse;
use super::models::{Credentials, RevueDraft};
use crate::error::{ApiError, Result};

/// Mock login client.
///
/// # Example
/// ```ignore
/// let auth = MockAuthClient::new().with_token("jwt");
/// let token = auth.authenticate(&creds).await?;
/// ```
#[derive(Default)]
pub struct MockAuthClient {
    /// Token returned from authenticate
    token: Option<String>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Credentials seen by authenticate, in call order
    calls: Arc<Mutex<Vec<Credentials>>>,
}

impl MockAuthClient {
    /// Create a mock that has no token configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the token returned from authenticate.
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    /// Configure an error to return from the next authenticate call.
    pub fn with_error(mut self, error: ApiError) -> Self {
        self.error = Arc::new(Mutex::new(Some(error)));
        self
    }

    /// Number of authenticate calls made.
    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }

    /// Credentials passed to the most recent authenticate call.
    pub async fn last_credentials(&self) -> Option<Credentials> {
        self.calls.lock().await.last().cloned()
    }
}

#[async_trait]
impl AuthApi for MockAuthClient {
    async fn authenticate(&self, credentials: &Credentials) -> Result<String> {
        self.calls.lock().await.push(credentials.clone());

        if let Some(err) = self.error.lock().await.take() {
            return Err(err.into());
        }

        self.token
            .clone()
            .ok_or_else(|| ApiError::MissingAccessToken.into())
    }
}

/// A captured API request for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRequest {
    /// HTTP method, e.g. "PUT"
    pub method: &'static str,
    /// Request path, e.g. "/Revue/Edit/123"
    pub path: String,
    /// Request body if one was sent
    pub body: Option<RevueDraft>,
}

/// Mock Revue client returning scripted responses per endpoint.
///
/// Responses are queued per `"METHOD /path"` key and consumed in order.
/// A request with nothing queued fails with a network error.
#[derive(Default)]
pub struct MockRevueClient {
    responses: Arc<Mutex<HashMap<String, VecDeque<RawResponse>>>>,
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockRevueClient {
    /// Create a mock with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for `method path`.
    pub async fn respond(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .await
            .entry(format!("{} {}", method, path))
            .or_default()
            .push_back(RawResponse::new(status, body));
        self
    }

    /// All requests made so far, in order.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    async fn dispatch(
        &self,
        method: &'static str,
        path: String,
        body: Option<&RevueDraft>,
    ) -> Result<RawResponse> {
        let key = format!("{} {}", method, path);
        self.captured_requests.lock().await.push(CapturedRequest {
            method,
            path,
            body: body.cloned(),
        });

        self.responses
            .lock()
            .await
            .get_mut(&key)
            .and_then(VecDeque::pop_front)
            .ok_or_else(|| ApiError::Network(format!("no scripted response for {}", key)).into())
    }
}

#[async_trait]
impl RevueApi for MockRevueClient {
    async fn create_revue(&self, draft: &RevueDraft) -> Result<RawResponse> {
        self.dispatch("POST", "/Revue/Create".to_string(), Some(draft))
            .await
    }

    async fn list_revues(&self) -> Result<RawResponse> {
        self.dispatch("GET", "/Revue/All".to_string(), None).await
    }

    async fn edit_revue(&self, revue_id: &str, draft: &RevueDraft) -> Result<RawResponse> {
        self.dispatch("PUT", format!("/Revue/Edit/{}", revue_id), Some(draft))
            .await
    }

    async fn delete_revue(&self, revue_id: &str) -> Result<RawResponse> {
        self.dispatch("DELETE", format!("/Revue/Delete/{}", revue_id), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_consumes_responses_in_order() {
        let mock = MockRevueClient::new()
            .respond("POST", "/Revue/Create", 200, "first")
            .await
            .respond("POST", "/Revue/Create", 400, "second")
            .await;

        let draft = RevueDraft::default();
        assert_eq!(mock.create_revue(&draft).await.unwrap().body, "first");
        assert_eq!(mock.create_revue(&draft).await.unwrap().status, 400);
        assert!(mock.create_revue(&draft).await.is_err());
        assert_eq!(mock.captured_requests().await.len(), 3);
    }

    #[tokio::test]
    async fn test_mock_captures_paths() {
        let mock = MockRevueClient::new()
            .respond("DELETE", "/Revue/Delete/123", 404, "")
            .await;

        mock.delete_revue("123").await.unwrap();

        let captured = mock.captured_requests().await;
        assert_eq!(captured[0].method, "DELETE");
        assert_eq!(captured[0].path, "/Revue/Delete/123");
        assert!(captured[0].body.is_none());
    }
}
