use crate::constants::{
    DEFAULT_API_VERSION, DEFAULT_RATE_LIMIT_BURST_SIZE, DEFAULT_RATE_LIMIT_MAX_REQUESTS,
    DEFAULT_RATE_LIMIT_PERIOD_SECONDS, DEFAULT_REST_BASE_URL, DEFAULT_REST_TIMEOUT_SECS,
    DEFAULT_TOKEN_URL,
};
use crate::error::AppError;
use crate::model::gaql::normalize_customer_id;
use crate::utils::config::{get_env_non_empty, get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, error};

/// Environment variable holding the developer token
pub const ENV_DEVELOPER_TOKEN: &str = "GOOGLE_ADS_DEVELOPER_TOKEN";
/// Environment variable holding the OAuth2 client id
pub const ENV_CLIENT_ID: &str = "GOOGLE_ADS_CLIENT_ID";
/// Environment variable holding the OAuth2 client secret
pub const ENV_CLIENT_SECRET: &str = "GOOGLE_ADS_CLIENT_SECRET";
/// Environment variable holding the OAuth2 refresh token
pub const ENV_REFRESH_TOKEN: &str = "GOOGLE_ADS_REFRESH_TOKEN";
/// Environment variable holding the manager (login) customer id
pub const ENV_LOGIN_CUSTOMER_ID: &str = "GOOGLE_ADS_LOGIN_CUSTOMER_ID";

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Authentication credentials for the Google Ads API
///
/// All five values are required. `Debug` redacts the secrets.
pub struct Credentials {
    /// Developer token sent in the `developer-token` header
    pub developer_token: String,
    /// OAuth2 client id
    pub client_id: String,
    /// OAuth2 client secret
    pub client_secret: String,
    /// Long-lived OAuth2 refresh token
    pub refresh_token: String,
    /// Manager account id sent in the `login-customer-id` header
    pub login_customer_id: String,
}

impl Credentials {
    /// Reads the credentials from the process environment
    ///
    /// # Returns
    /// * `Ok(Credentials)` - When all five variables are present and non-blank
    /// * `Err(AppError::Configuration)` - Naming every missing variable otherwise
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(get_env_non_empty)
    }

    /// Builds credentials from an arbitrary key lookup
    ///
    /// Blank values are treated as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let developer_token = read(ENV_DEVELOPER_TOKEN);
        let client_id = read(ENV_CLIENT_ID);
        let client_secret = read(ENV_CLIENT_SECRET);
        let refresh_token = read(ENV_REFRESH_TOKEN);
        let login_customer_id = read(ENV_LOGIN_CUSTOMER_ID);

        let missing: Vec<&str> = [
            (ENV_DEVELOPER_TOKEN, developer_token.is_none()),
            (ENV_CLIENT_ID, client_id.is_none()),
            (ENV_CLIENT_SECRET, client_secret.is_none()),
            (ENV_REFRESH_TOKEN, refresh_token.is_none()),
            (ENV_LOGIN_CUSTOMER_ID, login_customer_id.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, is_missing)| is_missing.then_some(name))
        .collect();

        if !missing.is_empty() {
            error!("Missing Google Ads API credentials: {}", missing.join(", "));
            return Err(AppError::Configuration(format!(
                "missing Google Ads API credentials: {}",
                missing.join(", ")
            )));
        }

        let credentials = Credentials {
            developer_token: developer_token.unwrap_or_default(),
            client_id: client_id.unwrap_or_default(),
            client_secret: client_secret.unwrap_or_default(),
            refresh_token: refresh_token.unwrap_or_default(),
            login_customer_id: login_customer_id.unwrap_or_default(),
        };
        credentials.validate()?;
        Ok(credentials)
    }

    /// Names of the credential fields that are blank
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("developer_token", &self.developer_token),
            ("client_id", &self.client_id),
            ("client_secret", &self.client_secret),
            ("refresh_token", &self.refresh_token),
            ("login_customer_id", &self.login_customer_id),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.trim().is_empty().then_some(name))
        .collect()
    }

    /// Checks that every field is present and that the login customer id is numeric
    pub fn validate(&self) -> Result<(), AppError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::Configuration(format!(
                "missing Google Ads API credentials: {}",
                missing.join(", ")
            )));
        }
        normalize_customer_id(&self.login_customer_id).map_err(|_| {
            AppError::Configuration(format!(
                "login customer id '{}' is not a valid customer id",
                self.login_customer_id
            ))
        })?;
        Ok(())
    }

    /// Login customer id without dashes, as sent to the API
    #[must_use]
    pub fn login_customer_id(&self) -> String {
        self.login_customer_id.replace('-', "")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("developer_token", &"[redacted]")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[redacted]")
            .field("refresh_token", &"[redacted]")
            .field("login_customer_id", &self.login_customer_id)
            .finish()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the Google Ads REST API, without version prefix
    pub base_url: String,
    /// API version path segment, e.g. `v17`
    pub api_version: String,
    /// OAuth2 token endpoint
    pub token_url: String,
    /// Timeout in seconds for every HTTP call
    pub timeout: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_REST_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            timeout: DEFAULT_REST_TIMEOUT_SECS,
        }
    }
}

impl RestApiConfig {
    /// Builds the full URL for an API endpoint
    ///
    /// Absolute `http(s)` URLs are returned unchanged; relative endpoints are
    /// placed under `{base_url}/{api_version}/`.
    #[must_use]
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return endpoint.to_string();
        }
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.api_version.trim_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_RATE_LIMIT_MAX_REQUESTS,
            period_seconds: DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
            burst_size: DEFAULT_RATE_LIMIT_BURST_SIZE,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Main configuration for the Google Ads API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Rate limiter configuration for API requests
    pub rate_limiter: RateLimiterConfig,
}

impl Config {
    /// Creates a new configuration from the environment
    ///
    /// Loads a `.env` file first if present. Missing credentials are a
    /// fatal configuration error; every other setting falls back to a default.
    pub fn new() -> Result<Self, AppError> {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let credentials = Credentials::from_env()?;

        let api_version = get_env_or_none::<String>("GOOGLE_ADS_API_VERSION")
            .map(|v| v.trim().to_string())
            .filter(|v| is_api_version(v))
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        Ok(Config {
            credentials,
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "GOOGLE_ADS_REST_BASE_URL",
                    String::from(DEFAULT_REST_BASE_URL),
                ),
                api_version,
                token_url: get_env_or_default(
                    "GOOGLE_ADS_TOKEN_URL",
                    String::from(DEFAULT_TOKEN_URL),
                ),
                timeout: get_env_or_default("GOOGLE_ADS_REST_TIMEOUT", DEFAULT_REST_TIMEOUT_SECS),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default(
                    "GOOGLE_ADS_RATE_LIMIT_MAX_REQUESTS",
                    DEFAULT_RATE_LIMIT_MAX_REQUESTS,
                ),
                period_seconds: get_env_or_default(
                    "GOOGLE_ADS_RATE_LIMIT_PERIOD_SECONDS",
                    DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
                ),
                burst_size: get_env_or_default(
                    "GOOGLE_ADS_RATE_LIMIT_BURST_SIZE",
                    DEFAULT_RATE_LIMIT_BURST_SIZE,
                ),
            },
        })
    }

    /// Creates a configuration from explicit credentials and default settings
    pub fn with_credentials(credentials: Credentials) -> Result<Self, AppError> {
        credentials.validate()?;
        Ok(Config {
            credentials,
            rest_api: RestApiConfig::default(),
            rate_limiter: RateLimiterConfig::default(),
        })
    }
}

fn is_api_version(value: &str) -> bool {
    value
        .strip_prefix('v')
        .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
}
