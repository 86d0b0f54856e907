/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque OAuth2 bearer token
///
/// No expiry is tracked: a token is considered valid until the API rejects it
/// with `401`. `Debug` and `Display` never print the secret value.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a raw token string
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token value, for the `Authorization` header
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.0
    }

    /// Value of the `Authorization` header carrying this token
    #[must_use]
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[redacted]").finish()
    }
}

/// Form payload of the OAuth2 `refresh_token` grant
#[derive(Debug, Clone, Serialize)]
pub struct RefreshTokenGrant<'a> {
    /// OAuth2 client id
    pub client_id: &'a str,
    /// OAuth2 client secret
    pub client_secret: &'a str,
    /// Long-lived refresh token
    pub refresh_token: &'a str,
    /// Always `refresh_token`
    pub grant_type: &'static str,
}

impl<'a> RefreshTokenGrant<'a> {
    /// Creates the grant for the given client and refresh token
    #[must_use]
    pub fn new(client_id: &'a str, client_secret: &'a str, refresh_token: &'a str) -> Self {
        Self {
            client_id,
            client_secret,
            refresh_token,
            grant_type: "refresh_token",
        }
    }
}

/// Response of the OAuth2 token endpoint
///
/// Every field is optional because error responses carry `error` and
/// `error_description` instead of a token.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenResponse {
    /// The new bearer token
    #[serde(default)]
    pub access_token: Option<String>,
    /// Lifetime in seconds as reported by the server (informational only)
    #[serde(default)]
    pub expires_in: Option<u64>,
    /// Usually `Bearer`
    #[serde(default)]
    pub token_type: Option<String>,
    /// Granted scopes
    #[serde(default)]
    pub scope: Option<String>,
    /// OAuth2 error code, e.g. `invalid_grant`
    #[serde(default)]
    pub error: Option<String>,
    /// Human readable error description
    #[serde(default)]
    pub error_description: Option<String>,
}

impl TokenResponse {
    /// Extracts a non-empty access token
    #[must_use]
    pub fn token(&self) -> Option<AccessToken> {
        self.access_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(AccessToken::new)
    }

    /// Describes why no token was returned
    #[must_use]
    pub fn failure_reason(&self) -> String {
        match (&self.error, &self.error_description) {
            (Some(err), Some(desc)) => format!("{err}: {desc}"),
            (Some(err), None) => err.clone(),
            (None, Some(desc)) => desc.clone(),
            (None, None) => "response did not contain an access token".to_string(),
        }
    }
}
