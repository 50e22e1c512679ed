use crate::constants::REPORT_SOURCE;
use crate::error::AppResult;
use crate::presentation::{
    CityComparison, ReportPeriod, StoredComparison, StoredReport, sorted_names,
};
use crate::storage::store::ReportStore;
use crate::utils::id::new_document_id;
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;

type ReportKey = (String, String);
type ComparisonKey = (String, String, Vec<String>);

/// Report store kept in process memory
///
/// Used when no database is configured and by tests. Contents are lost on
/// restart.
#[derive(Default)]
pub struct MemoryReportStore {
    reports: RwLock<HashMap<ReportKey, StoredReport>>,
    comparisons: RwLock<HashMap<ComparisonKey, StoredComparison>>,
}

impl MemoryReportStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReportStore for MemoryReportStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> bool {
        true
    }

    async fn get_report(
        &self,
        month: &str,
        year: Option<&str>,
    ) -> AppResult<Option<StoredReport>> {
        let reports = self.reports.read().await;
        let found = match year {
            Some(year) => reports.get(&(month.to_string(), year.to_string())).cloned(),
            None => reports
                .values()
                .filter(|r| r.month == month)
                .max_by(|a, b| {
                    a.year
                        .cmp(&b.year)
                        .then_with(|| a.created_at.cmp(&b.created_at))
                })
                .cloned(),
        };
        Ok(found)
    }

    async fn list_reports(&self, year: Option<&str>) -> AppResult<Vec<StoredReport>> {
        let reports = self.reports.read().await;
        let mut list: Vec<StoredReport> = reports
            .values()
            .filter(|r| year.is_none_or(|y| r.year == y))
            .cloned()
            .collect();
        list.sort_by(|a, b| {
            b.year
                .cmp(&a.year)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(list)
    }

    async fn save_report(
        &self,
        period: &ReportPeriod,
        data: &Value,
        json_valid: bool,
    ) -> AppResult<String> {
        let now = Utc::now();
        let key = (period.month().to_string(), period.year().to_string());
        let mut reports = self.reports.write().await;

        let report = reports.entry(key).or_insert_with(|| StoredReport {
            id: new_document_id(),
            month: period.month().to_string(),
            year: period.year().to_string(),
            data: Value::Null,
            json_valid,
            source: REPORT_SOURCE.to_string(),
            created_at: now,
            updated_at: now,
        });
        report.data = data.clone();
        report.json_valid = json_valid;
        report.updated_at = now;

        Ok(report.id.clone())
    }

    async fn delete_report(&self, month: &str, year: &str) -> AppResult<bool> {
        let mut reports = self.reports.write().await;
        Ok(reports
            .remove(&(month.to_string(), year.to_string()))
            .is_some())
    }

    async fn save_comparison(
        &self,
        comparison: &CityComparison,
        cities: &[String],
    ) -> AppResult<String> {
        let now = Utc::now();
        let city_names = sorted_names(cities.iter().map(String::as_str));
        let key = (
            comparison.month.clone(),
            comparison.year.clone(),
            city_names.clone(),
        );
        let mut comparisons = self.comparisons.write().await;

        let stored = comparisons.entry(key).or_insert_with(|| StoredComparison {
            id: new_document_id(),
            month: comparison.month.clone(),
            year: comparison.year.clone(),
            city_names,
            cities: Vec::new(),
            summary: String::new(),
            created_at: now,
            updated_at: now,
        });
        stored.cities = comparison.cities.clone();
        stored.summary = comparison.summary.clone();
        stored.updated_at = now;

        Ok(stored.id.clone())
    }

    async fn find_comparison(
        &self,
        month: &str,
        year: &str,
        cities: &[String],
    ) -> AppResult<Option<StoredComparison>> {
        let key = (
            month.to_string(),
            year.to_string(),
            sorted_names(cities.iter().map(String::as_str)),
        );
        Ok(self.comparisons.read().await.get(&key).cloned())
    }

    async fn list_comparisons(
        &self,
        month: Option<&str>,
        year: Option<&str>,
        limit: i64,
    ) -> AppResult<Vec<StoredComparison>> {
        let comparisons = self.comparisons.read().await;
        let mut list: Vec<StoredComparison> = comparisons
            .values()
            .filter(|c| month.is_none_or(|m| c.month == m))
            .filter(|c| year.is_none_or(|y| c.year == y))
            .cloned()
            .collect();
        list.sort_by(|a, b| {
            b.year
                .cmp(&a.year)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        list.truncate(usize::try_from(limit.max(0)).unwrap_or(0));
        Ok(list)
    }
}
