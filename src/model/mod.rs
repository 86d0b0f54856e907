/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
/// OAuth2 token models
pub mod auth;
/// GAQL query builder and date ranges
pub mod gaql;
/// HTTP dispatch with authentication, rate limiting and a single 401 retry
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
pub mod utils;
