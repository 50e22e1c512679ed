use crate::common::*;
use realty_genie::application::services::report_service::archive_path;
use realty_genie::prelude::*;
use serde_json::json;
use std::sync::atomic::Ordering;

#[tokio::test]
async fn test_analyze_generates_then_reuses_stored_report() {
    let harness = Harness::new();
    let november = period("november", "2025");

    let data = harness.reports.analyze(&november).await.unwrap();
    assert_eq!(data["newsletter_article"], json!("Sales slowed.\nListings grew."));
    assert_eq!(data["market_summary"]["total_sales"], json!(1846));
    let report_id = data["report_id"].as_str().unwrap().to_string();

    let stored = harness
        .store
        .get_report("November", Some("2025"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.id, report_id);
    assert!(!stored.json_valid, "trailing commas had to be removed");
    assert_eq!(stored.source, "Gemini API Analysis");

    let again = harness.reports.analyze(&november).await.unwrap();
    assert_eq!(again, stored.data);
    assert_eq!(harness.extractor.calls(), 1);
    assert_eq!(harness.fetcher.calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        harness.extractor.models.lock().unwrap().as_slice(),
        ["gemini-2.5-flash"]
    );
}

#[tokio::test]
async fn test_analyze_archives_repaired_json() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = create_test_config("http://127.0.0.1:9", dir.path().join("pdfs"));
    config.source.output_dir = Some(dir.path().join("out"));
    let harness = Harness::with(
        config,
        FakeExtractor::default(),
        RecordingMailer::default(),
        None,
    );

    let may = period("May", "2025");
    harness.reports.analyze(&may).await.unwrap();

    let path = archive_path(&dir.path().join("out"), &may);
    assert!(path.ends_with("monthly_market_report_May.json"));
    let archived: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(archived["month"], json!("November"));
    assert!(archived.get("report_id").is_none());
}

#[tokio::test]
async fn test_invalid_model_json_fails_analysis() {
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

    let result = harness.reports.analyze(&period("June", "2025")).await;
    assert!(matches!(result, Err(AppError::InvalidModelJson { .. })));
    assert!(harness.store.list_reports(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_infographic_merges_into_existing_report() {
    let harness = Harness::new();
    let november = period("November", "2025");
    harness.reports.analyze(&november).await.unwrap();

    let generated = harness.reports.infographic(&november).await.unwrap();
    assert_eq!(generated.message, "Infographic generated successfully");
    assert_eq!(generated.visual_infographic_data, infographic_json());

    let stored = harness
        .store
        .get_report("November", Some("2025"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.data["newsletter_article"], json!("Sales slowed.\nListings grew."));
    assert_eq!(stored.data["visual_infographic_data"], infographic_json());

    let existing = harness.reports.infographic(&november).await.unwrap();
    assert_eq!(existing.message, "Infographic already exists");
    assert_eq!(harness.extractor.calls(), 2);
}

#[tokio::test]
async fn test_infographic_without_report_creates_minimal_document() {
    let extractor = FakeExtractor {
        infographic: json!({"visual_infographic_data": infographic_json()}).to_string(),
        ..Default::default()
    };
    let harness = Harness::with(
        create_test_config("http://127.0.0.1:9", std::env::temp_dir()),
        extractor,
        RecordingMailer::default(),
        None,
    );

    let response = harness
        .reports
        .infographic(&period("october", "2025"))
        .await
        .unwrap();
    assert_eq!(response.visual_infographic_data, infographic_json());

    let stored = harness
        .store
        .get_report("October", Some("2025"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.data["month"], json!("October"));
    assert_eq!(stored.data["year"], json!("2025"));
    assert!(stored.infographic().unwrap().is_some());
}

#[tokio::test]
async fn test_get_and_delete_report() {
    let harness = Harness::new();
    harness.reports.analyze(&period("May", "2024")).await.unwrap();

    let report = harness.reports.get_report("may", None).await.unwrap();
    assert_eq!(report.year, "2024");

    match harness.reports.get_report("June", Some("2024")).await {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Report for June 2024 not found"),
        other => panic!("unexpected {other:?}"),
    }
    match harness.reports.get_report("June", None).await {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Report for June not found"),
        other => panic!("unexpected {other:?}"),
    }

    let message = harness
        .reports
        .delete_report("MAY", Some("2024"))
        .await
        .unwrap();
    assert_eq!(message, "Report for May 2024 deleted successfully");
    assert!(matches!(
        harness.reports.delete_report("May", Some("2024")).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_send_infographic_email() {
    let harness = Harness::new();
    let request = EmailRequest {
        month: "November".to_string(),
        year: "2025".to_string(),
        to_emails: vec!["agent@example.com".to_string()],
        subject: None,
        template: Some("blue".to_string()),
    };

    match harness.reports.send_infographic_email(&request).await {
        Err(AppError::NotFound(msg)) => {
            assert_eq!(msg, "Infographic not found. Please generate it first.")
        }
        other => panic!("unexpected {other:?}"),
    }

    harness
        .reports
        .infographic(&period("November", "2025"))
        .await
        .unwrap();
    let recipients = harness
        .reports
        .send_infographic_email(&request)
        .await
        .unwrap();
    assert_eq!(recipients, vec!["agent@example.com"]);

    let sent = harness.mailer.sent.lock().unwrap();
    let (to, subject, html) = &sent[0];
    assert_eq!(to, &vec!["agent@example.com".to_string()]);
    assert_eq!(subject, "November 2025 - Real Estate Market Update");
    assert!(html.contains("&#9660; 25.5%"));
}

#[tokio::test]
async fn test_send_email_validation() {
    let harness = Harness::new();
    let mut request = EmailRequest {
        month: "November".to_string(),
        year: "2025".to_string(),
        to_emails: Vec::new(),
        subject: Some("Custom".to_string()),
        template: None,
    };
    assert!(matches!(
        harness.reports.send_infographic_email(&request).await,
        Err(AppError::InvalidInput(_))
    ));

    request.to_emails = vec!["agent@example.com".to_string()];
    request.template = Some("neon".to_string());
    assert!(matches!(
        harness.reports.send_infographic_email(&request).await,
        Err(AppError::InvalidInput(_))
    ));
}

#[tokio::test]
async fn test_compare_generates_once_per_city_set() {
    let harness = Harness::new();
    let november = period("November", "2025");

    let comparison = harness
        .comparisons
        .compare(&november, &names(&["richmond", "Burnaby North"]))
        .await
        .unwrap();
    assert_eq!(comparison.cities.len(), 2);
    assert_eq!(comparison.cities[1].overall.benchmark_price, Some(980_000.0));

    let cached = harness
        .comparisons
        .compare(&november, &names(&["Burnaby North", "Richmond"]))
        .await
        .unwrap();
    assert_eq!(cached, comparison);
    assert_eq!(
        harness.extractor.models.lock().unwrap().as_slice(),
        ["gemini-2.5-pro"]
    );
}

#[tokio::test]
async fn test_compare_rejects_invalid_cities() {
    let harness = Harness::new();
    let result = harness
        .comparisons
        .compare(&period("November", "2025"), &names(&["Richmond", "Seattle"]))
        .await;
    match result {
        Err(AppError::InvalidInput(msg)) => {
            assert_eq!(msg, "Invalid city: Seattle. Must be from Greater Vancouver area.")
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(harness.extractor.calls(), 0);
}

#[tokio::test]
async fn test_email_comparison() {
    let harness = Harness::new();
    let request = CityComparisonEmailRequest {
        month: "nov".to_string(),
        year: "2025".to_string(),
        cities: names(&["Richmond", "burnaby north"]),
        to_emails: names(&["a@example.com", "b@example.com"]),
        subject: None,
    };

    let response = harness.comparisons.email_comparison(&request).await.unwrap();
    assert!(response.success);
    assert_eq!(response.message, "City comparison email sent to 2 recipient(s)");
    assert_eq!(response.cities, names(&["Richmond", "Burnaby North"]));
    assert_eq!(response.month, "November");

    let sent = harness.mailer.sent.lock().unwrap();
    assert_eq!(
        sent[0].1,
        "Greater Vancouver City Comparison: Richmond, Burnaby North - November 2025"
    );
    assert!(sent[0].2.contains("Richmond softened while Burnaby North held."));
}

#[tokio::test]
async fn test_email_comparison_mail_failure() {
    let harness = Harness::with(
        create_test_config("http://127.0.0.1:9", std::env::temp_dir()),
        FakeExtractor::default(),
        RecordingMailer::failing(),
        None,
    );
    let request = CityComparisonEmailRequest {
        month: "November".to_string(),
        year: "2025".to_string(),
        cities: names(&["Richmond", "Burnaby North"]),
        to_emails: names(&["a@example.com"]),
        subject: Some("Weekly numbers".to_string()),
    };
    assert!(matches!(
        harness.comparisons.email_comparison(&request).await,
        Err(AppError::Mail(_))
    ));
}

#[tokio::test]
async fn test_comparison_image() {
    let harness = Harness::new();
    let response = harness
        .comparisons
        .comparison_image(&period("November", "2025"), &names(&["Richmond", "Burnaby North"]))
        .await
        .unwrap();

    assert!(response.success);
    assert!(response.image_base64.starts_with("data:image/png;base64,iVBORw0KGgo"));
    assert_eq!(
        response.image_url.as_deref(),
        Some("https://i.ibb.co/abc/comparison.png")
    );
    assert_eq!(response.cities, names(&["Richmond", "Burnaby North"]));
}

#[tokio::test]
async fn test_available_cities() {
    let harness = Harness::new();
    let cities = harness.comparisons.available_cities();
    assert_eq!(cities.len(), 18);
    assert!(cities.contains(&"White Rock".to_string()));
}

#[tokio::test]
async fn test_compare_keys_on_requested_period() {
    let mut model_answer = comparison_json();
    model_answer["month"] = json!("NOVEMBER");
    model_answer["year"] = json!(2025);
    let extractor = FakeExtractor {
        comparison: model_answer.to_string(),
        ..Default::default()
    };
    let harness = Harness::with(
        create_test_config("http://127.0.0.1:9", std::env::temp_dir().join("rg-tests")),
        extractor,
        RecordingMailer::default(),
        None,
    );
    let november = period("November", "2025");
    let cities = names(&["Richmond", "Burnaby North"]);

    let first = harness.comparisons.compare(&november, &cities).await.unwrap();
    assert_eq!(first.month, "November");
    assert_eq!(first.year, "2025");

    harness.comparisons.compare(&november, &cities).await.unwrap();
    assert_eq!(harness.extractor.calls(), 1);
}

#[tokio::test]
async fn test_send_email_with_sparse_stored_infographic() {
    let harness = Harness::new();
    let november = period("November", "2025");
    harness
        .store
        .save_report(
            &november,
            &json!({"visual_infographic_data": {"location_title": 2025, "main_statistics": null}}),
            true,
        )
        .await
        .unwrap();

    let request = EmailRequest {
        month: "November".to_string(),
        year: "2025".to_string(),
        to_emails: vec!["agent@example.com".to_string()],
        subject: None,
        template: None,
    };
    harness
        .reports
        .send_infographic_email(&request)
        .await
        .unwrap();
    assert_eq!(harness.mailer.sent.lock().unwrap().len(), 1);

    harness
        .store
        .save_report(
            &november,
            &json!({"visual_infographic_data": {"main_statistics": [42]}}),
            true,
        )
        .await
        .unwrap();
    assert!(matches!(
        harness.reports.send_infographic_email(&request).await,
        Err(AppError::Json(_))
    ));
    assert_eq!(harness.mailer.sent.lock().unwrap().len(), 1);
}
