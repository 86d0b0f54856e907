/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Google Ads Client Prelude
//!
//! Commonly used types and traits in one import.
//!
//! ```rust,no_run
//! use gads_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let client = Client::new(Config::new()?)?;
//! let campaigns = client
//!     .list_campaigns("123-456-7890", Some(CampaignStatus::Enabled))
//!     .await?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Google Ads client
pub use crate::application::config::{Config, Credentials, RateLimiterConfig, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, AppResult};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Client implementing every service
pub use crate::application::client::Client;

/// Service traits
pub use crate::application::interfaces::account::AccountService;
pub use crate::application::interfaces::campaign::CampaignService;
pub use crate::application::interfaces::mutation::CampaignMutationService;

// ============================================================================
// TRANSPORT AND AUTHENTICATION
// ============================================================================

/// Authenticated HTTP client
pub use crate::model::http::HttpClient;

/// Token cache and OAuth2 exchange
pub use crate::application::auth::Auth;
pub use crate::model::auth::AccessToken;

/// Client-side rate limiter
pub use crate::application::rate_limiter::RateLimiter;

// ============================================================================
// QUERY AND REQUEST MODELS
// ============================================================================

/// GAQL builder and helpers
pub use crate::model::gaql::{DateRange, QueryBuilder, normalize_customer_id};

/// Mutation enums
pub use crate::model::requests::{BiddingStrategy, CampaignStatus};

// ============================================================================
// PRESENTATION LAYER
// ============================================================================

/// Records returned by the services
pub use crate::presentation::{
    Campaign, CampaignInfo, CampaignPerformance, ClientAccount, FieldUpdate, UpdateDetails,
    UpdateKind, UpdateOutcome, UpdateResult, UpdateValue,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Currency conversion
pub use crate::utils::finance::{from_micros, to_micros};

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for custom date ranges
pub use chrono::NaiveDate;

/// Re-export reqwest for raw requests through [`HttpClient::request`]
pub use reqwest::Method;
