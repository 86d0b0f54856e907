/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Error type for the Google Ads client
//!
//! Transport and parse failures never leak as raw `reqwest`/`serde_json` errors:
//! they are folded into [`AppError::RemoteApi`] (or [`AppError::Authentication`]
//! when they happen while talking to the token endpoint).

use reqwest::StatusCode;
use std::fmt;

/// Result alias used across the crate
pub type AppResult<T> = Result<T, AppError>;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Missing or malformed configuration, fatal at construction time
    Configuration(String),
    /// The OAuth2 token exchange failed
    Authentication(String),
    /// The Ads API answered with a non-2xx status (after any retry), or could
    /// not be reached / parsed. `status` is `None` when no response was received.
    RemoteApi {
        /// HTTP status returned by the API, if any
        status: Option<StatusCode>,
        /// Response body or transport error description
        message: String,
    },
    /// Invalid caller input: unsupported method, unknown strategy, unsafe GAQL value...
    Validation(String),
    /// The requested resource does not exist
    NotFound(String),
}

impl AppError {
    /// Builds a remote API error from a status code and a response body
    pub fn remote(status: StatusCode, body: impl Into<String>) -> Self {
        AppError::RemoteApi {
            status: Some(status),
            message: body.into(),
        }
    }

    /// Returns `true` when the API rejected the bearer token
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            AppError::RemoteApi {
                status: Some(StatusCode::UNAUTHORIZED),
                ..
            }
        )
    }

    /// HTTP status a service layer should answer with for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Configuration(_) | AppError::Authentication(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::RemoteApi { status, .. } => status.unwrap_or(StatusCode::BAD_GATEWAY),
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Configuration(msg) => write!(f, "configuration error: {msg}"),
            AppError::Authentication(msg) => write!(f, "authentication error: {msg}"),
            AppError::RemoteApi {
                status: Some(status),
                message,
            } => write!(f, "google ads api error {}: {message}", status.as_u16()),
            AppError::RemoteApi {
                status: None,
                message,
            } => write!(f, "error communicating with google ads api: {message}"),
            AppError::Validation(msg) => write!(f, "validation error: {msg}"),
            AppError::NotFound(msg) => write!(f, "not found: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::RemoteApi {
            status: e.status(),
            message: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::RemoteApi {
            status: None,
            message: format!("invalid json: {e}"),
        }
    }
}
