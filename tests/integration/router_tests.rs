use crate::common::*;
use assert_json_diff::{assert_json_eq, assert_json_include};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use realty_genie::prelude::*;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn call(harness: &Harness, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = build_router(harness.state()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_root_reports_database_status() {
    let harness = Harness::new();
    let (status, body) = call(&harness, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_json_eq!(
        body,
        json!({"message": "Market Report API Running", "database": true})
    );
}

#[tokio::test]
async fn test_analyze_list_get_delete() {
    let harness = Harness::new();

    let (status, body) = call(
        &harness,
        "POST",
        "/analyze",
        Some(json!({"month": "november", "year": "2025"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_json_include!(
        actual: body,
        expected: json!({"month": "November", "market_summary": {"total_sales": 1846}})
    );

    let (status, body) = call(&harness, "GET", "/reports?year=2025", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], json!(1));
    assert_eq!(body["reports"][0]["month"], json!("November"));

    let (status, body) = call(&harness, "GET", "/reports/November?year=2025", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], json!("Gemini API Analysis"));

    let (status, body) = call(&harness, "GET", "/reports/December", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_json_eq!(body, json!({"detail": "Report for December not found"}));

    let (status, body) = call(&harness, "DELETE", "/reports/november?year=2025", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_json_eq!(
        body,
        json!({"message": "Report for November 2025 deleted successfully"})
    );

    let (status, _) = call(&harness, "DELETE", "/reports/November?year=2025", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_month_is_bad_request() {
    let harness = Harness::new();
    let (status, body) = call(
        &harness,
        "POST",
        "/analyze",
        Some(json!({"month": "Smarch", "year": "2025"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_json_eq!(body, json!({"detail": "unknown month: Smarch"}));
}

#[tokio::test]
async fn test_invalid_model_json_is_server_error() {
    let extractor = FakeExtractor {
        report: "{\"month\": \"November\" \"year\": 2025}".to_string(),
        ..Default::default()
    };
    let harness = Harness::with(
        create_test_config("http://127.0.0.1:9", std::env::temp_dir()),
        extractor,
        RecordingMailer::default(),
        None,
    );
    let (status, body) = call(
        &harness,
        "POST",
        "/analyze",
        Some(json!({"month": "November", "year": "2025"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        body["detail"]
            .as_str()
            .unwrap()
            .starts_with("Invalid JSON from API: ")
    );
}

#[tokio::test]
async fn test_infographic_and_send_email() {
    let harness = Harness::new();
    let request = json!({"month": "November", "year": "2025"});

    let (status, body) = call(&harness, "POST", "/infographic", Some(request.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_json_eq!(
        body,
        json!({
            "message": "Infographic generated successfully",
            "visual_infographic_data": infographic_json()
        })
    );

    let (_, body) = call(&harness, "POST", "/infographic", Some(request)).await;
    assert_eq!(body["message"], json!("Infographic already exists"));

    let (status, body) = call(
        &harness,
        "POST",
        "/send-email",
        Some(json!({
            "month": "November",
            "year": "2025",
            "to_emails": ["agent@example.com"],
            "template": "pastel"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_json_eq!(
        body,
        json!({"message": "Email sent successfully", "recipients": ["agent@example.com"]})
    );
}

#[tokio::test]
async fn test_send_email_failure_prefix() {
    let harness = Harness::with(
        create_test_config("http://127.0.0.1:9", std::env::temp_dir()),
        FakeExtractor::default(),
        RecordingMailer::failing(),
        None,
    );
    harness
        .reports
        .infographic(&period("November", "2025"))
        .await
        .unwrap();

    let (status, body) = call(
        &harness,
        "POST",
        "/send-email",
        Some(json!({"month": "November", "year": "2025", "to_emails": ["a@example.com"]})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_json_eq!(
        body,
        json!({"detail": "Failed to send email: mail error: relay refused"})
    );
}

#[tokio::test]
async fn test_cities_and_comparisons() {
    let harness = Harness::new();

    let (status, body) = call(&harness, "GET", "/cities", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], json!(18));
    assert_eq!(body["cities"][0], json!("Vancouver East"));

    let request = json!({"month": "November", "year": "2025", "cities": ["Richmond", "Burnaby North"]});
    let (status, body) = call(&harness, "POST", "/compare-cities", Some(request.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_json_include!(
        actual: body,
        expected: json!({
            "month": "November",
            "cities": [{"name": "Richmond", "overall": {"totalSales": 210.0}}],
            "summary": "Richmond softened while Burnaby North held."
        })
    );

    let (status, body) = call(&harness, "POST", "/city-comparison-image", Some(request)).await;
    assert_eq!(status, StatusCode::OK);
    assert_json_include!(
        actual: body.clone(),
        expected: json!({
            "success": true,
            "image_url": "https://i.ibb.co/abc/comparison.png",
            "month": "November",
            "year": "2025",
            "cities": ["Richmond", "Burnaby North"]
        })
    );
    assert!(
        body["image_base64"]
            .as_str()
            .unwrap()
            .starts_with("data:image/png;base64,")
    );

    let (status, body) = call(
        &harness,
        "POST",
        "/email-city-comparison",
        Some(json!({
            "month": "November",
            "year": "2025",
            "cities": ["Richmond", "Burnaby North"],
            "to_emails": ["a@example.com"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_json_eq!(
        body,
        json!({
            "success": true,
            "message": "City comparison email sent to 1 recipient(s)",
            "recipients": ["a@example.com"],
            "cities": ["Richmond", "Burnaby North"],
            "month": "November",
            "year": "2025"
        })
    );
    assert_eq!(harness.extractor.calls(), 1);
}

#[tokio::test]
async fn test_comparison_validation_errors() {
    let harness = Harness::new();

    let (status, body) = call(
        &harness,
        "POST",
        "/compare-cities",
        Some(json!({"month": "November", "year": "2025", "cities": ["Richmond"]})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_json_eq!(body, json!({"detail": "Please provide 2-3 cities for comparison"}));

    let (status, body) = call(
        &harness,
        "POST",
        "/email-city-comparison",
        Some(json!({
            "month": "November",
            "year": "2025",
            "cities": ["Richmond", "Delta"],
            "to_emails": []
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_json_eq!(body, json!({"detail": "Please provide at least one recipient email"}));
}

#[tokio::test]
async fn test_cors_is_permissive() {
    let harness = Harness::new();
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/analyze")
        .header("origin", "https://app.realtygenie.co")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();

    let response = build_router(harness.state()).oneshot(request).await.unwrap();
    assert!(
        response
            .headers()
            .contains_key("access-control-allow-origin")
    );
}
