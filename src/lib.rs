/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Google Ads REST client
//!
//! A thin, strongly typed client for the Google Ads REST API. It handles:
//!
//! - OAuth2 refresh-token exchange with a cached bearer token
//! - Transparent refresh and a single retry when the API answers `401`
//! - GAQL search queries built through a validating [`model::gaql::QueryBuilder`]
//! - Campaign budget and bidding strategy mutations with per-field outcomes
//! - Reshaping of search rows into simplified records (micros converted to units)
//!
//! ## Quick start
//!
//! ```ignore
//! use gads_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Client::new(Config::new()?)?;
//!
//!     for account in client.list_client_accounts().await? {
//!         info!("{} ({})", account.account_name, account.account_id);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! Credentials are read from the environment (a `.env` file is honoured):
//! `GOOGLE_ADS_DEVELOPER_TOKEN`, `GOOGLE_ADS_CLIENT_ID`, `GOOGLE_ADS_CLIENT_SECRET`,
//! `GOOGLE_ADS_REFRESH_TOKEN` and `GOOGLE_ADS_LOGIN_CUSTOMER_ID`. All five are
//! required; a missing one fails at construction time.

/// Application layer: authentication, configuration, services and rate limiting
pub mod application;
/// Global constants
pub mod constants;
/// Error type shared by the whole crate
pub mod error;
/// Wire models, GAQL builder and HTTP dispatch
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Simplified records returned to callers
pub mod presentation;
/// Environment, logging and currency helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
