/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Authentication module for the Google Ads API
//!
//! This module owns the bearer token of a client instance:
//! - OAuth2 refresh-token exchange against the token endpoint
//! - Lazy acquisition on first use
//! - Compare-and-swap refresh after the API rejects a token

use crate::application::config::Config;
use crate::error::AppError;
use crate::model::auth::{AccessToken, RefreshTokenGrant, TokenResponse};
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

/// Authentication manager for the Google Ads API
///
/// Holds the cached [`AccessToken`]. The token starts empty, is obtained on the
/// first request, and is only replaced after a `401`. No expiry is tracked.
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    token: RwLock<Option<AccessToken>>,
}

impl Auth {
    /// Creates a new Auth instance sharing the given HTTP client
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and the token URL
    /// * `client` - HTTP client (TLS verification and timeout already configured)
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self {
            config,
            client,
            token: RwLock::new(None),
        }
    }

    /// Exchanges the refresh token for a new access token
    ///
    /// Does not touch the cached token; see [`Auth::access_token`] and
    /// [`Auth::refresh_token`] for that.
    ///
    /// # Returns
    /// * `Ok(AccessToken)` - The new bearer token
    /// * `Err(AppError::Authentication)` - If the endpoint cannot be reached, the
    ///   body is not JSON, or it carries no `access_token`
    pub async fn authenticate(&self) -> Result<AccessToken, AppError> {
        info!("Getting access token");

        let credentials = &self.config.credentials;
        let grant = RefreshTokenGrant::new(
            &credentials.client_id,
            &credentials.client_secret,
            &credentials.refresh_token,
        );

        let response = self
            .client
            .post(&self.config.rest_api.token_url)
            .form(&grant)
            .send()
            .await
            .map_err(|e| {
                error!("Error getting access token: {}", e);
                AppError::Authentication(format!("error communicating with token endpoint: {e}"))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Error reading token response: {}", e);
            AppError::Authentication(format!("error reading token response: {e}"))
        })?;

        let token_response: TokenResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Token endpoint returned {} with a non-JSON body", status);
            AppError::Authentication(format!("invalid token response ({status}): {e}"))
        })?;

        match token_response.token() {
            Some(token) => {
                debug!(
                    "Access token obtained, expires in {:?} seconds",
                    token_response.expires_in
                );
                Ok(token)
            }
            None => {
                let reason = token_response.failure_reason();
                error!("Failed to get access token ({}): {}", status, reason);
                Err(AppError::Authentication(format!(
                    "failed to authenticate with Google Ads API: {reason}"
                )))
            }
        }
    }

    /// Returns the cached token, authenticating first if there is none
    pub async fn access_token(&self) -> Result<AccessToken, AppError> {
        if let Some(token) = self.token.read().await.as_ref() {
            return Ok(token.clone());
        }

        let mut guard = self.token.write().await;
        if let Some(token) = guard.as_ref() {
            return Ok(token.clone());
        }

        info!("No cached access token, authenticating");
        let token = self.authenticate().await?;
        *guard = Some(token.clone());
        Ok(token)
    }

    /// Replaces a token the API rejected
    ///
    /// If the cached token is no longer `stale` another request already refreshed
    /// it, and the cached value is returned without contacting the token endpoint.
    ///
    /// # Arguments
    /// * `stale` - The token that received the `401`
    pub async fn refresh_token(&self, stale: &AccessToken) -> Result<AccessToken, AppError> {
        let mut guard = self.token.write().await;

        if let Some(current) = guard.as_ref() {
            if current != stale {
                debug!("Access token already refreshed by another request");
                return Ok(current.clone());
            }
        }

        info!("Access token expired, refreshing...");
        let token = self.authenticate().await?;
        *guard = Some(token.clone());
        info!("✓ Access token refreshed");
        Ok(token)
    }

    /// Seeds the cache with a token obtained elsewhere
    pub async fn set_access_token(&self, token: AccessToken) {
        *self.token.write().await = Some(token);
    }

    /// Drops the cached token; the next request authenticates again
    pub async fn clear_token(&self) {
        *self.token.write().await = None;
    }

    /// Returns `true` when a token is cached
    pub async fn has_token(&self) -> bool {
        self.token.read().await.is_some()
    }
}

impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Auth")
            .field("token_url", &self.config.rest_api.token_url)
            .finish_non_exhaustive()
    }
}
