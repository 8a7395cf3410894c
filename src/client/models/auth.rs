//! Authentication models

use serde::{Deserialize, Serialize};

/// Login credentials for the `/User/Authentication` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account user name (the service accepts the account email here)
    #[serde(rename = "Username")]
    pub username: String,

    /// Account password
    #[serde(rename = "Password")]
    pub password: String,
}

impl Credentials {
    /// Create credentials from a user name and password
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Bearer token resolved once per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    /// The opaque token string
    pub token: String,

    /// Where the token came from
    pub source: TokenSource,
}

/// Origin of an access token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// Preset token supplied through config, env or flag
    Preset,
    /// Token returned by the login endpoint
    Login,
}

impl std::fmt::Display for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenSource::Preset => write!(f, "preset"),
            TokenSource::Login => write!(f, "login"),
        }
    }
}

/// Body returned by a successful login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Issued access token
    #[serde(rename = "accessToken", alias = "AccessToken", default)]
    pub access_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_serialize_pascal_case() {
        let creds = Credentials::new("IvaG1@examprep.com", "123456");
        let json = serde_json::to_value(&creds).unwrap();
        assert_eq!(json["Username"], "IvaG1@examprep.com");
        assert_eq!(json["Password"], "123456");
    }

    #[test]
    fn test_login_response_accepts_both_casings() {
        let camel: LoginResponse = serde_json::from_str(r#"{"accessToken":"abc"}"#).unwrap();
        let pascal: LoginResponse = serde_json::from_str(r#"{"AccessToken":"abc"}"#).unwrap();
        assert_eq!(camel.access_token.as_deref(), Some("abc"));
        assert_eq!(pascal.access_token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_login_response_missing_token() {
        let resp: LoginResponse = serde_json::from_str(r#"{"username":"x"}"#).unwrap();
        assert!(resp.access_token.is_none());
    }
}
