use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::application::services::{
    ComparisonService, ComparisonServiceImpl, ReportService, ReportServiceImpl,
};
use crate::error::AppResult;
use crate::gemini::{GeminiClient, ReportExtractor};
use crate::mail::{Mailer, SmtpMailer};
use crate::model::retry::RetryConfig;
use crate::render::{ImageHost, ImageRenderer, ImgbbHost, WkHtmlToImage};
use crate::source::{ReportDownloader, ReportFetcher};
use crate::storage::{ReportStore, open_report_store};
use std::sync::Arc;
use tracing::{info, warn};

/// Services shared by every request handler
#[derive(Clone)]
pub struct AppState {
    /// Market report operations
    pub reports: Arc<dyn ReportService>,
    /// City comparison operations
    pub comparisons: Arc<dyn ComparisonService>,
    /// Store, for the health check
    pub store: Arc<dyn ReportStore>,
}

impl AppState {
    /// Assembles the state from already built services
    pub fn new(
        reports: Arc<dyn ReportService>,
        comparisons: Arc<dyn ComparisonService>,
        store: Arc<dyn ReportStore>,
    ) -> Self {
        Self {
            reports,
            comparisons,
            store,
        }
    }

    /// Wires the production collaborators described by `config`
    pub async fn from_config(config: Arc<Config>) -> AppResult<Self> {
        let store = open_report_store(&config.database).await?;
        info!("Using the {} report store", store.backend());

        let fetcher: Arc<dyn ReportFetcher> = Arc::new(ReportDownloader::new(&config.source)?);
        let extractor: Arc<dyn ReportExtractor> = Arc::new(GeminiClient::new(
            config.gemini.clone(),
            RateLimiter::new(&config.rate_limiter),
            RetryConfig::new(),
        )?);
        let mailer: Arc<dyn Mailer> = Arc::new(SmtpMailer::new(config.smtp.clone()));

        let wkhtmltoimage = WkHtmlToImage::new(config.image.wkhtmltoimage_path.as_deref());
        if wkhtmltoimage.binary().is_none() {
            warn!("wkhtmltoimage not found, comparison images are unavailable");
        }
        let renderer: Arc<dyn ImageRenderer> = Arc::new(wkhtmltoimage);
        let host: Arc<dyn ImageHost> = Arc::new(ImgbbHost::new(&config.image)?);

        let reports = Arc::new(ReportServiceImpl::new(
            config.clone(),
            fetcher.clone(),
            extractor.clone(),
            store.clone(),
            mailer.clone(),
        ));
        let comparisons = Arc::new(ComparisonServiceImpl::new(
            config,
            fetcher,
            extractor,
            store.clone(),
            mailer,
            renderer,
            host,
        ));

        Ok(Self::new(reports, comparisons, store))
    }
}
