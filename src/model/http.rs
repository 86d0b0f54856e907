/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::auth::AccessToken;
use reqwest::Client as HttpInternalClient;
use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Authenticated client for the Google Ads REST API
///
/// This client handles all authentication complexity internally, including:
/// - Lazy OAuth2 token acquisition on the first request
/// - One transparent refresh and retry when the API answers `401`
/// - Developer token and login customer headers
/// - Client-side rate limiting for all API requests
///
/// Any other non-2xx status is surfaced immediately as
/// [`AppError::RemoteApi`] carrying the status and body.
pub struct HttpClient {
    auth: Arc<Auth>,
    http_client: HttpInternalClient,
    config: Arc<Config>,
    rate_limiter: Arc<RateLimiter>,
}

impl HttpClient {
    /// Creates a new client without contacting the API
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Client ready to use; authentication happens on the first request
    /// * `Err(AppError::Configuration)` - If any credential is missing
    pub fn new(config: Config) -> Result<Self, AppError> {
        config.credentials.validate()?;
        let config = Arc::new(config);

        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout.max(1)))
            .build()
            .map_err(|e| AppError::Configuration(format!("failed to create HTTP client: {e}")))?;
        let rate_limiter = Arc::new(RateLimiter::new(&config.rate_limiter));

        let auth = Arc::new(Auth::new(config.clone(), http_client.clone()));

        Ok(Self {
            auth,
            http_client,
            config,
            rate_limiter,
        })
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, AppError> {
        self.request(Method::GET, endpoint, None::<()>).await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, endpoint, Some(body)).await
    }

    /// Makes an authenticated request
    ///
    /// Only `GET` and `POST` are supported; any other method is rejected with
    /// [`AppError::Validation`] before a token is requested.
    ///
    /// A `401` triggers exactly one token refresh and one retry. The retry's
    /// outcome is final, whatever its status.
    pub async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<B>,
    ) -> Result<T, AppError> {
        ensure_supported_method(&method)?;

        let token = self.auth.access_token().await?;

        match self
            .request_internal(method.clone(), endpoint, &body, &token)
            .await
        {
            Ok(response) => parse_response(response).await,
            Err(e) if e.is_unauthorized() => {
                warn!("Access token rejected, refreshing and retrying");
                let token = self.auth.refresh_token(&token).await?;
                let response = self
                    .request_internal(method, endpoint, &body, &token)
                    .await?;
                parse_response(response).await
            }
            Err(e) => Err(e),
        }
    }

    /// Internal method to make HTTP requests
    async fn request_internal<B: Serialize>(
        &self,
        method: Method,
        endpoint: &str,
        body: &Option<B>,
        token: &AccessToken,
    ) -> Result<Response, AppError> {
        let url = self.config.rest_api.endpoint_url(endpoint);

        let bearer = token.bearer_header();
        let login_customer_id = self.config.credentials.login_customer_id();

        let headers = vec![
            ("Authorization", bearer.as_str()),
            (
                "developer-token",
                self.config.credentials.developer_token.as_str(),
            ),
            ("login-customer-id", login_customer_id.as_str()),
            ("Content-Type", "application/json; charset=UTF-8"),
            ("Accept", "application/json"),
        ];

        info!("Making {} request to {}", method, endpoint);

        make_http_request(
            &self.http_client,
            &self.rate_limiter,
            method,
            &url,
            headers,
            body,
        )
        .await
    }

    /// Gets Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Gets the configuration this client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.rest_api.base_url)
            .field("api_version", &self.config.rest_api.api_version)
            .field("rate_limiter", &self.rate_limiter)
            .finish_non_exhaustive()
    }
}

/// Rejects every method other than `GET` and `POST`
pub fn ensure_supported_method(method: &Method) -> Result<(), AppError> {
    if *method == Method::GET || *method == Method::POST {
        Ok(())
    } else {
        Err(AppError::Validation(format!("unsupported method: {method}")))
    }
}

/// Makes a single HTTP request after waiting on the rate limiter
///
/// No retry happens here: a non-2xx status becomes [`AppError::RemoteApi`]
/// with the status and response body, and a transport failure becomes
/// [`AppError::RemoteApi`] without status.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `rate_limiter` - Shared rate limiter to control request rate
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `body` - Optional request body (will be serialized to JSON)
pub async fn make_http_request<B: Serialize>(
    client: &Client,
    rate_limiter: &RateLimiter,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    body: &Option<B>,
) -> Result<Response, AppError> {
    rate_limiter.wait().await;

    debug!("{} {}", method, url);

    let mut request = client.request(method, url);

    for (name, value) in &headers {
        request = request.header(*name, *value);
    }

    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await.map_err(|e| {
        error!("Error making request: {}", e);
        AppError::from(e)
    })?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let body = body_or_read_error(response.text().await);
    if status == reqwest::StatusCode::UNAUTHORIZED {
        warn!("Unauthorized: {}", body);
    } else {
        error!("Error {}: {}", status, body);
    }
    Err(AppError::remote(status, body))
}

/// Error bodies are best effort: a failed read is reported in place of the body
fn body_or_read_error<E: std::fmt::Display>(read: Result<String, E>) -> String {
    match read {
        Ok(body) => body,
        Err(e) => format!("failed to read response body: {e}"),
    }
}

/// Parses a successful response body as JSON
///
/// An empty body is read as `{}` so mutate calls that return nothing still
/// deserialize into defaulted structs.
async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let status = response.status();
    let text = response.text().await.map_err(|e| {
        error!("Error reading {} response body: {}", status, e);
        AppError::remote(status, format!("failed to read response body: {e}"))
    })?;
    let text = if text.trim().is_empty() { "{}" } else { &text };
    serde_json::from_str(text).map_err(|e| {
        error!("Invalid JSON in {} response: {}", status, e);
        AppError::remote(status, format!("invalid JSON response: {e}"))
    })
}
