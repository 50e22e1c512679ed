//! # Realty Genie Prelude
//!
//! The types and traits needed to wire the service or drive it from a
//! binary or a test.
//!
//! ```rust
//! use realty_genie::prelude::*;
//!
//! let period = ReportPeriod::parse("nov", "2025").unwrap();
//! assert_eq!(period.month(), "November");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration of the service
pub use crate::application::config::Config;

/// Library version information
pub use crate::{VERSION, version};

/// Logging setup
pub use crate::utils::logger::setup_logger;

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, AppResult};

// ============================================================================
// SERVICES
// ============================================================================

/// Service traits
pub use crate::application::services::{ComparisonService, ReportService};

/// Service implementations
pub use crate::application::services::{ComparisonServiceImpl, ReportServiceImpl};

/// Request and response bodies
pub use crate::application::models::*;

// ============================================================================
// COLLABORATORS
// ============================================================================

/// Model client
pub use crate::gemini::{GeminiClient, ReportExtractor, parse_model_json, parse_model_object};

/// Stats package download
pub use crate::source::{ReportDownloader, ReportFetcher};

/// Persistence
pub use crate::storage::{MemoryReportStore, PgReportStore, ReportStore, open_report_store};

/// Rendering and delivery
pub use crate::mail::{Mailer, SmtpMailer};
pub use crate::render::{
    EmailTemplate, ImageHost, ImageRenderer, ImgbbHost, WkHtmlToImage, city_comparison_html,
};

// ============================================================================
// DOMAIN TYPES
// ============================================================================

/// Periods, reports, infographics and comparisons
pub use crate::presentation::{
    CityComparison, CityData, PropertyMetrics, ReportPeriod, StoredComparison, StoredReport,
    VisualInfographicData,
};

// ============================================================================
// HTTP SERVER
// ============================================================================

/// Router, state and entry point
pub use crate::server::{ApiError, AppState, build_router, serve};
