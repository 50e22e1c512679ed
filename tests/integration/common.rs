// Common utilities for integration tests

use async_trait::async_trait;
use realty_genie::application::config::{
    Config, GeminiConfig, ImageConfig, RateLimiterConfig, ReportSourceConfig, ServerConfig,
    SmtpConfig,
};
use realty_genie::prelude::*;
use realty_genie::storage::config::DatabaseConfig;
use serde_json::{Value, json};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const FAKE_PDF: &[u8] = b"%PDF-1.7\nfake stats package";
pub const FAKE_PNG: &[u8] = b"\x89PNG\r\n\x1a\nfake";

/// Creates a test config pointing every remote endpoint at `server_url`
pub fn create_test_config(server_url: &str, cache_dir: PathBuf) -> Config {
    Config {
        gemini: GeminiConfig {
            api_key: "test-key".to_string(),
            base_url: server_url.to_string(),
            report_model: "gemini-2.5-flash".to_string(),
            comparison_model: "gemini-2.5-pro".to_string(),
            timeout: 5,
        },
        rate_limiter: RateLimiterConfig {
            max_requests: 100,
            period_seconds: 1,
            burst_size: 100,
        },
        source: ReportSourceConfig {
            base_url: server_url.to_string(),
            cache_dir,
            output_dir: None,
        },
        database: DatabaseConfig::default(),
        smtp: SmtpConfig {
            server: "smtp.example.com".to_string(),
            port: 587,
            username: "user".to_string(),
            password: "secret".to_string(),
            from_email: "reports@example.com".to_string(),
            from_name: "Realty Genie".to_string(),
        },
        image: ImageConfig {
            wkhtmltoimage_path: None,
            imgbb_api_key: None,
            imgbb_url: format!("{server_url}/1/upload"),
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
    }
}

/// Always returns [`FAKE_PDF`], counting calls
#[derive(Default)]
pub struct FakeFetcher {
    pub calls: AtomicUsize,
}

#[async_trait]
impl ReportFetcher for FakeFetcher {
    async fn fetch(&self, _period: &ReportPeriod) -> AppResult<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(FAKE_PDF.to_vec())
    }
}

/// Answers with canned text chosen by the prompt, recording the models used
pub struct FakeExtractor {
    pub report: String,
    pub infographic: String,
    pub comparison: String,
    pub models: Mutex<Vec<String>>,
}

impl FakeExtractor {
    pub fn calls(&self) -> usize {
        self.models.lock().unwrap().len()
    }
}

impl Default for FakeExtractor {
    fn default() -> Self {
        Self {
            report: market_report_text(),
            infographic: infographic_json().to_string(),
            comparison: comparison_json().to_string(),
            models: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ReportExtractor for FakeExtractor {
    async fn generate(&self, model: &str, prompt: &str, pdf: &[u8]) -> AppResult<String> {
        assert!(pdf.starts_with(b"%PDF"));
        self.models.lock().unwrap().push(model.to_string());
        if prompt.contains("visual infographic data") {
            Ok(self.infographic.clone())
        } else if prompt.contains("Extract and compare") {
            Ok(self.comparison.clone())
        } else {
            Ok(self.report.clone())
        }
    }
}

/// Records sent messages instead of talking SMTP
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<(Vec<String>, String, String)>>,
    pub fail: bool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send_html(&self, to: &[String], subject: &str, html: &str) -> AppResult<()> {
        if self.fail {
            return Err(AppError::Mail("relay refused".to_string()));
        }
        self.sent
            .lock()
            .unwrap()
            .push((to.to_vec(), subject.to_string(), html.to_string()));
        Ok(())
    }
}

/// Returns [`FAKE_PNG`] for any HTML
pub struct FakeRenderer;

#[async_trait]
impl ImageRenderer for FakeRenderer {
    async fn render_png(&self, html: &str, width: u32) -> AppResult<Vec<u8>> {
        assert!(html.contains("Greater Vancouver Market Comparison"));
        assert_eq!(width, 900);
        Ok(FAKE_PNG.to_vec())
    }
}

/// Image host answering with a fixed URL, or nothing
pub struct FakeHost(pub Option<String>);

#[async_trait]
impl ImageHost for FakeHost {
    async fn upload(&self, _png: &[u8]) -> Option<String> {
        self.0.clone()
    }
}

/// Model output for the full report: fenced, with a raw newline and a trailing comma
pub fn market_report_text() -> String {
    "```json\n{\n  \"month\": \"November\",\n  \"year\": \"2025\",\n  \"newsletter_article\": \"Sales slowed.\nListings grew.\",\n  \"market_summary\": {\"total_sales\": 1846, \"active_listings\": 13245,},\n}\n```".to_string()
}

pub fn infographic_json() -> Value {
    json!({
        "location_title": "GREATER VANCOUVER",
        "main_statistics": [
            {"label": "NEW LISTINGS", "current": "2,210", "pct_change": -25.5, "prev_month": "2,967", "prev_year": "2,367 (-6.6%)"},
            {"label": "TOTAL SALES", "current": "1,846", "pct_change": 4.2, "prev_month": "1,771", "prev_year": "1,700 (+8.6%)"}
        ],
        "benchmark_price_narratives": [
            {"type": "Townhomes", "price": "$1,080,000", "description": "benchmark price held steady."}
        ],
        "poster_metrics": []
    })
}

pub fn comparison_json() -> Value {
    json!({
        "month": "November",
        "year": "2025",
        "cities": [
            {"name": "Richmond", "overall": {"activeListings": 2345, "totalSales": 210, "benchmarkPrice": 1180000, "momChange": -0.8, "yoyChange": -4.1}},
            {"name": "Burnaby North", "overall": {"activeListings": "1,020", "totalSales": 95, "benchmarkPrice": "$980,000", "momChange": "0.5%", "yoyChange": "-2.2%"}}
        ],
        "summary": "Richmond softened while Burnaby North held."
    })
}

/// Services over in-memory fakes, with handles to inspect them
pub struct Harness {
    pub fetcher: Arc<FakeFetcher>,
    pub extractor: Arc<FakeExtractor>,
    pub mailer: Arc<RecordingMailer>,
    pub store: Arc<MemoryReportStore>,
    pub reports: Arc<ReportServiceImpl>,
    pub comparisons: Arc<ComparisonServiceImpl>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with(
            create_test_config("http://127.0.0.1:9", std::env::temp_dir().join("rg-tests")),
            FakeExtractor::default(),
            RecordingMailer::default(),
            Some("https://i.ibb.co/abc/comparison.png".to_string()),
        )
    }

    pub fn with(
        config: Config,
        extractor: FakeExtractor,
        mailer: RecordingMailer,
        image_url: Option<String>,
    ) -> Self {
        let config = Arc::new(config);
        let fetcher = Arc::new(FakeFetcher::default());
        let extractor = Arc::new(extractor);
        let mailer = Arc::new(mailer);
        let store = Arc::new(MemoryReportStore::new());

        let reports = Arc::new(ReportServiceImpl::new(
            config.clone(),
            fetcher.clone(),
            extractor.clone(),
            store.clone(),
            mailer.clone(),
        ));
        let comparisons = Arc::new(ComparisonServiceImpl::new(
            config.clone(),
            fetcher.clone(),
            extractor.clone(),
            store.clone(),
            mailer.clone(),
            Arc::new(FakeRenderer),
            Arc::new(FakeHost(image_url)),
        ));

        Self {
            fetcher,
            extractor,
            mailer,
            store,
            reports,
            comparisons,
        }
    }

    pub fn state(&self) -> AppState {
        AppState::new(
            self.reports.clone(),
            self.comparisons.clone(),
            self.store.clone(),
        )
    }
}

pub fn period(month: &str, year: &str) -> ReportPeriod {
    ReportPeriod::parse(month, year).unwrap()
}

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|n| n.to_string()).collect()
}
