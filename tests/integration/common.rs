// Common utilities for integration tests

use gads_client::prelude::*;

/// Creates a client from the environment
pub fn create_test_client() -> Client {
    setup_logger();
    Client::from_env().expect("Google Ads credentials must be configured")
}

/// Customer used by campaign tests, `GOOGLE_ADS_TEST_CUSTOMER_ID`
pub fn test_customer_id() -> String {
    std::env::var("GOOGLE_ADS_TEST_CUSTOMER_ID")
        .expect("GOOGLE_ADS_TEST_CUSTOMER_ID must be set for campaign tests")
}
