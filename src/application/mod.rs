/// Authentication and token cache
pub mod auth;
/// Google Ads client implementing the service interfaces
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
