use crate::common::{mock_token, test_config};
use gads_client::application::auth::Auth;
use gads_client::error::AppError;
use gads_client::model::auth::AccessToken;
use mockito::Server;
use std::sync::Arc;

fn make_auth(server_url: &str) -> Auth {
    Auth::new(Arc::new(test_config(server_url)), reqwest::Client::new())
}

#[tokio::test]
async fn test_authenticate_exchanges_refresh_token() {
    let mut server = Server::new_async().await;
    let token_mock = mock_token(&mut server, "ya29.token", 1).await;

    let auth = make_auth(&server.url());
    let token = auth.authenticate().await.unwrap();

    assert_eq!(token.secret(), "ya29.token");
    // authenticate does not populate the cache
    assert!(!auth.has_token().await);
    token_mock.assert_async().await;
}

#[tokio::test]
async fn test_access_token_is_cached_after_first_call() {
    let mut server = Server::new_async().await;
    let token_mock = mock_token(&mut server, "cached", 1).await;

    let auth = make_auth(&server.url());
    let first = auth.access_token().await.unwrap();
    let second = auth.access_token().await.unwrap();

    assert_eq!(first, second);
    assert!(auth.has_token().await);
    token_mock.assert_async().await;
}

#[tokio::test]
async fn test_concurrent_first_use_authenticates_once() {
    let mut server = Server::new_async().await;
    let token_mock = mock_token(&mut server, "shared", 1).await;

    let auth = Arc::new(make_auth(&server.url()));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let auth = auth.clone();
            tokio::spawn(async move { auth.access_token().await })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap().secret(), "shared");
    }
    token_mock.assert_async().await;
}

#[tokio::test]
async fn test_refresh_skips_exchange_when_token_already_replaced() {
    let mut server = Server::new_async().await;
    let token_mock = mock_token(&mut server, "unused", 0).await;

    let auth = make_auth(&server.url());
    let stale = AccessToken::new("stale");
    auth.set_access_token(AccessToken::new("newer")).await;

    let token = auth.refresh_token(&stale).await.unwrap();
    assert_eq!(token.secret(), "newer");
    token_mock.assert_async().await;
}

#[tokio::test]
async fn test_refresh_replaces_stale_token() {
    let mut server = Server::new_async().await;
    let token_mock = mock_token(&mut server, "fresh", 1).await;

    let auth = make_auth(&server.url());
    let stale = AccessToken::new("stale");
    auth.set_access_token(stale.clone()).await;

    let token = auth.refresh_token(&stale).await.unwrap();
    assert_eq!(token.secret(), "fresh");
    assert_eq!(auth.access_token().await.unwrap().secret(), "fresh");
    token_mock.assert_async().await;
}

#[tokio::test]
async fn test_clear_token_forces_new_exchange() {
    let mut server = Server::new_async().await;
    let token_mock = mock_token(&mut server, "again", 1).await;

    let auth = make_auth(&server.url());
    auth.set_access_token(AccessToken::new("old")).await;
    auth.clear_token().await;
    assert!(!auth.has_token().await);

    assert_eq!(auth.access_token().await.unwrap().secret(), "again");
    token_mock.assert_async().await;
}

#[tokio::test]
async fn test_token_endpoint_without_token_field() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/token")
        .with_status(200)
        .with_body(r#"{"token_type":"Bearer"}"#)
        .create_async()
        .await;

    let auth = make_auth(&server.url());
    let err = auth.authenticate().await.unwrap_err();
    assert!(matches!(err, AppError::Authentication(_)));
    assert!(!auth.has_token().await);
}

#[tokio::test]
async fn test_token_endpoint_non_json_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/token")
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let auth = make_auth(&server.url());
    match auth.access_token().await {
        Err(AppError::Authentication(msg)) => assert!(msg.contains("502")),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_token_endpoint_is_authentication_error() {
    let auth = make_auth("http://127.0.0.1:1");
    let err = auth.authenticate().await.unwrap_err();
    assert!(matches!(err, AppError::Authentication(_)));
}

#[test]
fn test_authenticate_blocking_runtime() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/token")
        .with_status(200)
        .with_body(r#"{"access_token":"blocking","expires_in":3599}"#)
        .create();

    let auth = make_auth(&server.url());
    let token = tokio_test::block_on(auth.authenticate()).unwrap();

    assert_eq!(token.secret(), "blocking");
    mock.assert();
}
