use crate::application::models::{EmailRequest, InfographicResponse};
use crate::error::AppError;
use crate::presentation::{ReportPeriod, StoredReport};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the market report service
#[async_trait]
pub trait ReportService: Send + Sync {
    /// Full market report of `period`
    ///
    /// A stored report is returned as is. Otherwise the stats package is
    /// downloaded, analysed by the model and stored; the returned object then
    /// carries the new document id under `report_id`.
    async fn analyze(&self, period: &ReportPeriod) -> Result<Value, AppError>;

    /// Infographic section of `period`, generating it when missing
    async fn infographic(&self, period: &ReportPeriod) -> Result<InfographicResponse, AppError>;

    /// Stored report of `month`; the most recent year when `year` is absent
    async fn get_report(&self, month: &str, year: Option<&str>) -> Result<StoredReport, AppError>;

    /// Stored reports, optionally of one year
    async fn list_reports(&self, year: Option<&str>) -> Result<Vec<StoredReport>, AppError>;

    /// Deletes a stored report, returning the confirmation message
    async fn delete_report(&self, month: &str, year: Option<&str>) -> Result<String, AppError>;

    /// Emails the stored infographic, returning the recipients
    async fn send_infographic_email(&self, request: &EmailRequest)
    -> Result<Vec<String>, AppError>;
}
