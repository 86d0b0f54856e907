// Shared helpers for mock-server tests

use gads_client::application::config::{Config, Credentials, RateLimiterConfig, RestApiConfig};
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::json;

pub const CUSTOMER_ID: &str = "1234567890";
pub const LOGIN_CUSTOMER_ID: &str = "111-222-3333";

pub fn test_credentials() -> Credentials {
    Credentials {
        developer_token: "dev-token".to_string(),
        client_id: "client-id".to_string(),
        client_secret: "client-secret".to_string(),
        refresh_token: "refresh-token".to_string(),
        login_customer_id: LOGIN_CUSTOMER_ID.to_string(),
    }
}

/// Config pointing both the API and the token endpoint at the mock server
pub fn test_config(server_url: &str) -> Config {
    Config {
        credentials: test_credentials(),
        rest_api: RestApiConfig {
            base_url: server_url.to_string(),
            api_version: "v17".to_string(),
            token_url: format!("{server_url}/token"),
            timeout: 5,
        },
        rate_limiter: RateLimiterConfig {
            max_requests: 1000,
            period_seconds: 1,
            burst_size: 1000,
        },
    }
}

/// Token endpoint returning `token`, expected to be hit `hits` times
pub async fn mock_token(server: &mut ServerGuard, token: &str, hits: usize) -> Mock {
    server
        .mock("POST", "/token")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "refresh_token".into()),
            Matcher::UrlEncoded("refresh_token".into(), "refresh-token".into()),
            Matcher::UrlEncoded("client_id".into(), "client-id".into()),
            Matcher::UrlEncoded("client_secret".into(), "client-secret".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "access_token": token,
                "expires_in": 3599,
                "token_type": "Bearer"
            })
            .to_string(),
        )
        .expect(hits)
        .create_async()
        .await
}

pub fn search_path(customer_id: &str) -> String {
    format!("/v17/customers/{customer_id}/googleAds:search")
}

pub fn mutate_path(customer_id: &str, service: &str) -> String {
    format!("/v17/customers/{customer_id}/{service}:mutate")
}
