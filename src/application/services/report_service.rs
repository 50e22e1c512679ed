use crate::application::config::Config;
use crate::application::interfaces::report::ReportService;
use crate::application::models::{
    EmailRequest, InfographicResponse, require_recipients, subject_or,
};
use crate::error::AppError;
use crate::gemini::prompts::{infographic_prompt, market_report_prompt};
use crate::gemini::{ReportExtractor, parse_model_object};
use crate::mail::Mailer;
use crate::presentation::{INFOGRAPHIC_KEY, ReportPeriod, StoredReport, normalize_month};
use crate::source::ReportFetcher;
use crate::storage::ReportStore;
use async_trait::async_trait;
use chrono::{Datelike, Utc};
use serde_json::{Map, Value};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Key of the document id added to a freshly generated report
pub const REPORT_ID_KEY: &str = "report_id";

/// Implementation of the market report service
pub struct ReportServiceImpl {
    config: Arc<Config>,
    fetcher: Arc<dyn ReportFetcher>,
    extractor: Arc<dyn ReportExtractor>,
    store: Arc<dyn ReportStore>,
    mailer: Arc<dyn Mailer>,
}

impl ReportServiceImpl {
    /// Creates a new instance of the report service
    pub fn new(
        config: Arc<Config>,
        fetcher: Arc<dyn ReportFetcher>,
        extractor: Arc<dyn ReportExtractor>,
        store: Arc<dyn ReportStore>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            config,
            fetcher,
            extractor,
            store,
            mailer,
        }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> Arc<Config> {
        self.config.clone()
    }

    /// Downloads the package of `period` and runs `prompt` over it
    async fn extract(&self, period: &ReportPeriod, prompt: &str) -> Result<(Value, bool), AppError> {
        let pdf = self.fetcher.fetch(period).await?;
        info!("Analyzing {} with {}", period.file_name(), self.config.gemini.report_model);

        let raw = self
            .extractor
            .generate(&self.config.gemini.report_model, prompt, &pdf)
            .await?;
        let repaired = parse_model_object(&raw)?;
        debug!(
            "Model JSON for {}: {} bytes, trailing commas removed: {}",
            period, repaired.text.len(), repaired.trailing_commas_removed
        );
        Ok((repaired.value, !repaired.trailing_commas_removed))
    }

    /// Writes the repaired report next to previous ones when an output directory is configured
    async fn archive(&self, period: &ReportPeriod, data: &Value) {
        let Some(dir) = self.config.source.output_dir.as_deref() else {
            return;
        };
        if let Err(e) = write_archive(dir, period, data).await {
            warn!("Could not archive report for {}: {}", period, e);
        }
    }

    /// Stores `data`, returning the id; a failed save only costs persistence
    async fn save(&self, period: &ReportPeriod, data: &Value, json_valid: bool) -> Option<String> {
        match self.store.save_report(period, data, json_valid).await {
            Ok(id) => Some(id),
            Err(e) => {
                error!("Failed to save report for {}: {}", period, e);
                None
            }
        }
    }
}

/// `{dir}/monthly_market_report_{Month}.json`
pub fn archive_path(dir: &Path, period: &ReportPeriod) -> std::path::PathBuf {
    dir.join(format!("monthly_market_report_{}.json", period.month()))
}

async fn write_archive(dir: &Path, period: &ReportPeriod, data: &Value) -> Result<(), AppError> {
    tokio::fs::create_dir_all(dir).await?;
    let path = archive_path(dir, period);
    tokio::fs::write(&path, serde_json::to_string_pretty(data)?).await?;
    debug!("Archived report to {}", path.display());
    Ok(())
}

fn report_not_found(month: &str, year: Option<&str>) -> AppError {
    match year {
        Some(year) => AppError::NotFound(format!("Report for {month} {year} not found")),
        None => AppError::NotFound(format!("Report for {month} not found")),
    }
}

#[async_trait]
impl ReportService for ReportServiceImpl {
    async fn analyze(&self, period: &ReportPeriod) -> Result<Value, AppError> {
        if let Some(report) = self
            .store
            .get_report(period.month(), Some(period.year()))
            .await?
        {
            info!("Report for {} found in {}", period, self.store.backend());
            return Ok(report.data);
        }

        info!("Generating report for {}", period);
        let (mut data, json_valid) = self.extract(period, market_report_prompt()).await?;
        self.archive(period, &data).await;

        let id = self.save(period, &data, json_valid).await;
        if let (Some(id), Value::Object(map)) = (id, &mut data) {
            map.insert(REPORT_ID_KEY.to_string(), Value::String(id));
        }
        Ok(data)
    }

    async fn infographic(&self, period: &ReportPeriod) -> Result<InfographicResponse, AppError> {
        let existing = self
            .store
            .get_report(period.month(), Some(period.year()))
            .await?;

        if let Some(value) = existing.as_ref().and_then(StoredReport::infographic_value) {
            info!("Infographic for {} already stored", period);
            return Ok(InfographicResponse {
                message: "Infographic already exists".to_string(),
                visual_infographic_data: value.clone(),
            });
        }

        info!("Generating infographic for {}", period);
        let (mut generated, json_valid) = self.extract(period, infographic_prompt()).await?;
        // The model sometimes wraps the section in its own key
        if let Some(inner) = generated.get_mut(INFOGRAPHIC_KEY).map(Value::take) {
            generated = inner;
        }

        let (mut document, was_valid) = match existing {
            Some(StoredReport {
                data: Value::Object(map),
                json_valid,
                ..
            }) => (map, json_valid),
            _ => {
                let mut map = Map::new();
                map.insert("month".to_string(), Value::String(period.month().to_string()));
                map.insert("year".to_string(), Value::String(period.year().to_string()));
                (map, true)
            }
        };
        document.insert(INFOGRAPHIC_KEY.to_string(), generated.clone());

        self.save(period, &Value::Object(document), was_valid && json_valid)
            .await;

        Ok(InfographicResponse {
            message: "Infographic generated successfully".to_string(),
            visual_infographic_data: generated,
        })
    }

    async fn get_report(&self, month: &str, year: Option<&str>) -> Result<StoredReport, AppError> {
        let month = normalize_month(month)?;
        self.store
            .get_report(&month, year)
            .await?
            .ok_or_else(|| report_not_found(&month, year))
    }

    async fn list_reports(&self, year: Option<&str>) -> Result<Vec<StoredReport>, AppError> {
        let reports = self.store.list_reports(year).await?;
        debug!("Listing {} reports", reports.len());
        Ok(reports)
    }

    async fn delete_report(&self, month: &str, year: Option<&str>) -> Result<String, AppError> {
        let month = normalize_month(month)?;
        let year = year
            .map(str::to_string)
            .unwrap_or_else(|| Utc::now().year().to_string());

        if !self.store.delete_report(&month, &year).await? {
            return Err(report_not_found(&month, Some(&year)));
        }
        info!("Deleted report for {} {}", month, year);
        Ok(format!("Report for {month} {year} deleted successfully"))
    }

    async fn send_infographic_email(
        &self,
        request: &EmailRequest,
    ) -> Result<Vec<String>, AppError> {
        require_recipients(&request.to_emails)?;
        let period = request.period()?;
        let template = request.template()?;

        let report = self
            .store
            .get_report(period.month(), Some(period.year()))
            .await?;
        let infographic = match report {
            Some(report) => report.infographic()?,
            None => None,
        }
        .ok_or_else(|| {
            AppError::NotFound("Infographic not found. Please generate it first.".to_string())
        })?;

        let html = template.render(&infographic, &period);
        let subject = subject_or(request.subject.as_deref(), || {
            format!("{} {} - Real Estate Market Update", period.month(), period.year())
        });

        info!(
            "Sending {} infographic for {} to {} recipient(s)",
            template,
            period,
            request.to_emails.len()
        );
        self.mailer
            .send_html(&request.to_emails, &subject, &html)
            .await?;
        Ok(request.to_emails.clone())
    }
}
