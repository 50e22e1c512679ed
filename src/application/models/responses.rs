use crate::presentation::StoredReport;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `GET /`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    /// Fixed banner
    pub message: String,
    /// Whether the report store answers
    pub database: bool,
}

/// Body of `/infographic`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct InfographicResponse {
    /// `Infographic already exists` or `Infographic generated successfully`
    pub message: String,
    /// Infographic section as stored
    pub visual_infographic_data: Value,
}

/// Body of `GET /reports`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportListResponse {
    /// Number of reports
    pub count: usize,
    /// Reports, newest year first
    pub reports: Vec<StoredReport>,
}

/// Body of `DELETE /reports/{month}`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    /// Outcome
    pub message: String,
}

/// Body of `/send-email`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmailSentResponse {
    /// Outcome
    pub message: String,
    /// Addresses the email went to
    pub recipients: Vec<String>,
}

/// Body of `/cities`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct CitiesResponse {
    /// Areas that can be compared
    pub cities: Vec<String>,
    /// Number of areas
    pub count: usize,
}

/// Body of `/email-city-comparison`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonEmailResponse {
    /// Always `true`; failures are error responses
    pub success: bool,
    /// Outcome
    pub message: String,
    /// Addresses the email went to
    pub recipients: Vec<String>,
    /// Compared areas
    pub cities: Vec<String>,
    /// Month name
    pub month: String,
    /// Four digit year
    pub year: String,
}

/// Body of `/city-comparison-image`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonImageResponse {
    /// Always `true`; failures are error responses
    pub success: bool,
    /// `data:image/png;base64,...`
    pub image_base64: String,
    /// Public URL when image hosting is configured
    pub image_url: Option<String>,
    /// Month name
    pub month: String,
    /// Four digit year
    pub year: String,
    /// Compared areas
    pub cities: Vec<String>,
}
