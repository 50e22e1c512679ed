use crate::error::AppResult;
use crate::presentation::{CityComparison, ReportPeriod, StoredComparison, StoredReport};
use async_trait::async_trait;
use serde_json::Value;

/// Persistence of market reports and city comparisons
///
/// Reports are keyed by `(month, year)`; comparisons by `(month, year,
/// sorted city names)`. Saving an existing key replaces the document and
/// keeps its id and `created_at`.
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Short name of the backend, for logs and the health endpoint
    fn backend(&self) -> &'static str;

    /// Whether the backend answers
    async fn ping(&self) -> bool;

    /// Report of `month`; the most recent year when `year` is `None`
    async fn get_report(&self, month: &str, year: Option<&str>)
    -> AppResult<Option<StoredReport>>;

    /// All reports, optionally of one year, newest year first
    async fn list_reports(&self, year: Option<&str>) -> AppResult<Vec<StoredReport>>;

    /// Inserts or replaces the report of `period`, returning its id
    async fn save_report(
        &self,
        period: &ReportPeriod,
        data: &Value,
        json_valid: bool,
    ) -> AppResult<String>;

    /// Deletes the report of `month`/`year`; `false` when there was none
    async fn delete_report(&self, month: &str, year: &str) -> AppResult<bool>;

    /// Inserts or replaces a comparison of `cities`, returning its id
    ///
    /// The key uses the requested names rather than the names the model
    /// wrote into `comparison`, so a later lookup with the same request hits.
    async fn save_comparison(
        &self,
        comparison: &CityComparison,
        cities: &[String],
    ) -> AppResult<String>;

    /// Comparison of exactly `cities` for `month`/`year`, in any order
    async fn find_comparison(
        &self,
        month: &str,
        year: &str,
        cities: &[String],
    ) -> AppResult<Option<StoredComparison>>;

    /// Most recent comparisons first, at most `limit`
    async fn list_comparisons(
        &self,
        month: Option<&str>,
        year: Option<&str>,
        limit: i64,
    ) -> AppResult<Vec<StoredComparison>>;
}
