use realty_genie::error::AppError;
use reqwest::StatusCode;

#[test]
fn test_app_error_display_rate_limit() {
    let error = AppError::RateLimitExceeded;
    assert_eq!(error.to_string(), "rate limit exceeded");
}

#[test]
fn test_app_error_display_not_found() {
    let error = AppError::NotFound("Report for May 2025 not found".to_string());
    assert_eq!(error.to_string(), "not found: Report for May 2025 not found");
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("unknown month: Smarch".to_string());
    assert_eq!(error.to_string(), "invalid input: unknown month: Smarch");
}

#[test]
fn test_app_error_display_download() {
    let error = AppError::Download {
        url: "https://example.com/GVR-Stats-Package-May-2025.pdf".to_string(),
        status: StatusCode::NOT_FOUND,
    };
    let text = error.to_string();
    assert!(text.contains("GVR-Stats-Package-May-2025.pdf"));
    assert!(text.contains("404"));
}

#[test]
fn test_app_error_display_invalid_model_json() {
    let error = AppError::InvalidModelJson {
        message: "expected `,` or `}`".to_string(),
        line: 12,
        column: 4,
    };
    assert_eq!(
        error.to_string(),
        "invalid json from model at line 12, column 4: expected `,` or `}`"
    );
}

#[test]
fn test_app_error_from_serde_json() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: AppError = json_error.into();
    assert!(matches!(error, AppError::Json(_)));
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error: AppError = io_error.into();
    assert!(matches!(error, AppError::Io(_)));
    assert_eq!(error.to_string(), "io error: missing");
}

#[test]
fn test_app_error_from_address_error_is_input_error() {
    let parsed: Result<lettre::Address, _> = "not-an-address".parse();
    let error: AppError = parsed.unwrap_err().into();
    assert!(matches!(error, AppError::InvalidInput(_)));
}
