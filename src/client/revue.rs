//! Revue API client implementation

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method, RequestBuilder, StatusCode};
use serde::Serialize;

use super::api::{AuthApi, RevueApi};
use super::decode::RawResponse;
use super::models::{AccessToken, Credentials, LoginResponse, RevueDraft};
use crate::error::{ApiError, Result};

/// Default Revue API base URL
pub const DEFAULT_BASE_URL: &str = "https://d2925tksfvgq8c.cloudfront.net/api";

fn build_http() -> Result<HttpClient> {
    let http = HttpClient::builder()
        .user_agent(concat!("revue-check/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;
    Ok(http)
}

fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Send a request and capture status plus body text
async fn send(request: RequestBuilder) -> Result<RawResponse> {
    let response = request.send().await.map_err(ApiError::from)?;
    let status = response.status().as_u16();
    let body = response.text().await.map_err(ApiError::from)?;
    Ok(RawResponse::new(status, body))
}

/// Authenticated Revue API client.
///
/// Holds one connection pool and one bearer token for the whole run.
pub struct RevueClient {
    http: HttpClient,
    base_url: String,
    token: String,
}

impl RevueClient {
    /// Create a client that attaches `token` to every request
    pub fn new(base_url: &str, token: &AccessToken) -> Result<Self> {
        Ok(Self {
            http: build_http()?,
            base_url: normalize_base_url(base_url),
            token: token.token.clone(),
        })
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one authenticated request to `path` with an optional JSON body
    pub async fn execute<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<RawResponse>
    where
        B: Serialize + ?Sized + Sync,
    {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method.clone(), &url)
            .bearer_auth(&self.token);
        if let Some(body) = body {
            request = request.json(body);
        }

        let raw = send(request).await?;
        log::debug!("{} {} -> {}", method, url, raw.status);
        Ok(raw)
    }
}

#[async_trait]
impl RevueApi for RevueClient {
    async fn create_revue(&self, draft: &RevueDraft) -> Result<RawResponse> {
        self.execute(Method::POST, "/Revue/Create", Some(draft)).await
    }

    async fn list_revues(&self) -> Result<RawResponse> {
        self.execute(Method::GET, "/Revue/All", None::<&()>).await
    }

    async fn edit_revue(&self, revue_id: &str, draft: &RevueDraft) -> Result<RawResponse> {
        let path = format!("/Revue/Edit/{}", revue_id);
        self.execute(Method::PUT, &path, Some(draft)).await
    }

    async fn delete_revue(&self, revue_id: &str) -> Result<RawResponse> {
        let path = format!("/Revue/Delete/{}", revue_id);
        self.execute(Method::DELETE, &path, None::<&()>).await
    }
}

/// Unauthenticated client used only for the login call
pub struct LoginClient {
    http: HttpClient,
    base_url: String,
}

impl LoginClient {
    /// Create a login client for `base_url`
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            http: build_http()?,
            base_url: normalize_base_url(base_url),
        })
    }
}

#[async_trait]
impl AuthApi for LoginClient {
    async fn authenticate(&self, credentials: &Credentials) -> Result<String> {
        let url = format!("{}/User/Authentication", self.base_url);
        log::debug!("POST {} (user {})", url, credentials.username);

        let raw = send(self.http.post(&url).json(credentials)).await?;

        if raw.status != StatusCode::OK.as_u16() {
            return Err(ApiError::authentication_failed(raw.status, &raw.body).into());
        }

        let login: LoginResponse =
            serde_json::from_str(&raw.body).map_err(|e| ApiError::Decode {
                shape: "login",
                reason: e.to_string(),
            })?;

        login
            .access_token
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ApiError::MissingAccessToken.into())
    }
}
