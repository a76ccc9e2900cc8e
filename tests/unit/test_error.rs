use talentscope_client::error::AppError;

#[test]
fn test_app_error_display_invalid_argument_is_bare_message() {
    let error = AppError::invalid_argument("Invalid email address.");
    assert_eq!(error.to_string(), "Invalid email address.");
    assert!(error.is_invalid_argument());
    assert!(!error.is_connection());
}

#[test]
fn test_app_error_display_configuration() {
    let error = AppError::Configuration("bad proxy".to_string());
    assert_eq!(error.to_string(), "configuration error: bad proxy");
}

#[test]
fn test_app_error_from_serde() {
    let serde_error = serde_json::from_str::<serde_json::Value>("{broken").unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        other => panic!("Expected Json error, got {other:?}"),
    }
}

#[test]
fn test_app_error_from_io() {
    let app_error: AppError = std::io::Error::other("disk gone").into();

    match app_error {
        AppError::Io(_) => assert_eq!(app_error.to_string(), "io error: disk gone"),
        other => panic!("Expected Io error, got {other:?}"),
    }
}

// reqwest::Error cannot be constructed directly; the Connection and
// RequestFailed kinds are covered by tests/integration/transport_tests.rs.
