use realty_genie::presentation::{CityComparison, ReportPeriod};
use realty_genie::storage::{MemoryReportStore, ReportStore, open_report_store};
use realty_genie::storage::config::DatabaseConfig;
use serde_json::json;
use tokio_test::block_on;

fn period(month: &str, year: &str) -> ReportPeriod {
    ReportPeriod::parse(month, year).unwrap()
}

#[test]
fn test_reports_are_keyed_by_month_and_year() {
    let store = MemoryReportStore::new();
    block_on(async {
        let may_2024 = store
            .save_report(&period("May", "2024"), &json!({"y": 2024}), true)
            .await
            .unwrap();
        let may_2025 = store
            .save_report(&period("May", "2025"), &json!({"y": 2025}), true)
            .await
            .unwrap();
        assert_ne!(may_2024, may_2025);

        let reports = store.list_reports(None).await.unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].id, may_2025);

        let only_2024 = store.get_report("May", Some("2024")).await.unwrap().unwrap();
        assert_eq!(only_2024.data, json!({"y": 2024}));
    });
}

#[test]
fn test_comparison_lookup_requires_exact_city_set() {
    let store = MemoryReportStore::new();
    let cities = vec!["Delta".to_string(), "Surrey".to_string()];
    let comparison = CityComparison {
        month: "May".to_string(),
        year: "2025".to_string(),
        ..Default::default()
    };

    block_on(async {
        store.save_comparison(&comparison, &cities).await.unwrap();

        let three = vec![
            "Delta".to_string(),
            "Surrey".to_string(),
            "Langley".to_string(),
        ];
        assert!(
            store
                .find_comparison("May", "2025", &three)
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            store
                .find_comparison("May", "2024", &cities)
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            store
                .find_comparison("May", "2025", &cities)
                .await
                .unwrap()
                .is_some()
        );
    });
}

#[test]
fn test_open_store_without_database_url() {
    let config = DatabaseConfig {
        url: String::new(),
        max_connections: 5,
    };
    let store = block_on(open_report_store(&config)).unwrap();
    assert_eq!(store.backend(), "memory");
}
