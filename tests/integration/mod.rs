// Live tests against the Google Ads API. They need real credentials in the
// environment (or .env) and are ignored by default:
//   cargo test --test integration_tests -- --ignored
mod account_tests;
mod common;
