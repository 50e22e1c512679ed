/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::config::ReportSourceConfig;
use crate::constants::USER_AGENT;
use crate::error::{AppError, AppResult};
use crate::presentation::ReportPeriod;
use async_trait::async_trait;
use reqwest::Client;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Every PDF starts with these bytes
const PDF_MAGIC: &[u8] = b"%PDF";

/// Public URL of the stats package of `period`
pub fn report_url(base_url: &str, period: &ReportPeriod) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), period.file_name())
}

/// Whether `bytes` look like a PDF document
pub fn is_pdf(bytes: &[u8]) -> bool {
    bytes.starts_with(PDF_MAGIC)
}

/// Source of monthly stats package PDFs
#[async_trait]
pub trait ReportFetcher: Send + Sync {
    /// Returns the PDF bytes of the package covering `period`
    async fn fetch(&self, period: &ReportPeriod) -> AppResult<Vec<u8>>;
}

/// Downloads stats packages and keeps them in a cache directory
pub struct ReportDownloader {
    http_client: Client,
    base_url: String,
    cache_dir: PathBuf,
}

impl ReportDownloader {
    /// Creates a downloader for `config`
    pub fn new(config: &ReportSourceConfig) -> AppResult<Self> {
        let http_client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http_client,
            base_url: config.base_url.clone(),
            cache_dir: config.cache_dir.clone(),
        })
    }

    /// Cache location of the package of `period`
    pub fn cache_path(&self, period: &ReportPeriod) -> PathBuf {
        self.cache_dir.join(period.file_name())
    }

    async fn read_cached(&self, path: &Path) -> Option<Vec<u8>> {
        match tokio::fs::read(path).await {
            Ok(bytes) if is_pdf(&bytes) => Some(bytes),
            Ok(_) => {
                warn!("Ignoring cached file that is not a PDF: {}", path.display());
                None
            }
            Err(_) => None,
        }
    }

    async fn download(&self, url: &str) -> AppResult<Vec<u8>> {
        info!("Downloading {}", url);
        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Download {
                url: url.to_string(),
                status,
            });
        }

        let bytes = response.bytes().await?.to_vec();
        if !is_pdf(&bytes) {
            return Err(AppError::InvalidPdf(url.to_string()));
        }
        debug!("Downloaded {} bytes", bytes.len());
        Ok(bytes)
    }
}

#[async_trait]
impl ReportFetcher for ReportDownloader {
    async fn fetch(&self, period: &ReportPeriod) -> AppResult<Vec<u8>> {
        let path = self.cache_path(period);
        if let Some(bytes) = self.read_cached(&path).await {
            info!("Using cached PDF {} ({} bytes)", path.display(), bytes.len());
            return Ok(bytes);
        }

        let url = report_url(&self.base_url, period);
        let bytes = self.download(&url).await?;

        tokio::fs::create_dir_all(&self.cache_dir).await?;
        tokio::fs::write(&path, &bytes).await?;
        info!("PDF saved as {}", path.display());

        Ok(bytes)
    }
}
