use gads_client::error::AppError;
use reqwest::StatusCode;

#[test]
fn test_app_error_display_configuration() {
    let error = AppError::Configuration("missing GOOGLE_ADS_CLIENT_ID".to_string());
    assert_eq!(
        error.to_string(),
        "configuration error: missing GOOGLE_ADS_CLIENT_ID"
    );
}

#[test]
fn test_app_error_display_authentication() {
    let error = AppError::Authentication("invalid_grant".to_string());
    assert_eq!(error.to_string(), "authentication error: invalid_grant");
}

#[test]
fn test_app_error_display_remote_with_status() {
    let error = AppError::remote(StatusCode::BAD_REQUEST, "bad query");
    assert!(error.to_string().contains("400"));
    assert!(error.to_string().contains("bad query"));
}

#[test]
fn test_app_error_display_remote_without_status() {
    let error = AppError::RemoteApi {
        status: None,
        message: "connection refused".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "error communicating with google ads api: connection refused"
    );
}

#[test]
fn test_app_error_display_validation_and_not_found() {
    assert_eq!(
        AppError::Validation("bad id".to_string()).to_string(),
        "validation error: bad id"
    );
    assert_eq!(
        AppError::NotFound("campaign 42 not found".to_string()).to_string(),
        "not found: campaign 42 not found"
    );
}

#[test]
fn test_app_error_status_codes() {
    assert_eq!(
        AppError::Configuration(String::new()).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        AppError::Authentication(String::new()).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        AppError::Validation(String::new()).status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        AppError::NotFound(String::new()).status_code(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        AppError::remote(StatusCode::FORBIDDEN, "").status_code(),
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        AppError::RemoteApi {
            status: None,
            message: String::new()
        }
        .status_code(),
        StatusCode::BAD_GATEWAY
    );
}

#[test]
fn test_only_remote_401_is_unauthorized() {
    assert!(AppError::remote(StatusCode::UNAUTHORIZED, "").is_unauthorized());
    assert!(!AppError::remote(StatusCode::FORBIDDEN, "").is_unauthorized());
    assert!(!AppError::Authentication("401".to_string()).is_unauthorized());
}

#[test]
fn test_app_error_from_serde_json() {
    let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error = AppError::from(err);
    assert!(error.to_string().contains("invalid json"));
}
