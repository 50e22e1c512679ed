use crate::error::{AppError, AppResult};
use crate::presentation::ReportPeriod;
use crate::render::EmailTemplate;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Body of `/analyze` and `/infographic`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthRequest {
    /// Month name, any case
    pub month: String,
    /// Four digit year
    pub year: String,
}

impl MonthRequest {
    /// Validated period
    pub fn period(&self) -> AppResult<ReportPeriod> {
        ReportPeriod::parse(&self.month, &self.year)
    }
}

/// Body of `/send-email`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmailRequest {
    /// Month name, any case
    pub month: String,
    /// Four digit year
    pub year: String,
    /// Recipients
    pub to_emails: Vec<String>,
    /// Subject; a default naming the period is used when absent
    #[serde(default)]
    pub subject: Option<String>,
    /// `pastel` (default) or `blue`
    #[serde(default)]
    pub template: Option<String>,
}

impl EmailRequest {
    /// Validated period
    pub fn period(&self) -> AppResult<ReportPeriod> {
        ReportPeriod::parse(&self.month, &self.year)
    }

    /// Requested template, pastel when absent
    pub fn template(&self) -> AppResult<EmailTemplate> {
        self.template
            .as_deref()
            .map_or(Ok(EmailTemplate::default()), str::parse::<EmailTemplate>)
    }
}

/// Body of `/compare-cities` and `/city-comparison-image`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct CityComparisonRequest {
    /// Month name, any case
    pub month: String,
    /// Four digit year
    pub year: String,
    /// Two or three Greater Vancouver areas
    #[serde(default)]
    pub cities: Vec<String>,
}

impl CityComparisonRequest {
    /// Validated period
    pub fn period(&self) -> AppResult<ReportPeriod> {
        ReportPeriod::parse(&self.month, &self.year)
    }
}

/// Body of `/email-city-comparison`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct CityComparisonEmailRequest {
    /// Month name, any case
    pub month: String,
    /// Four digit year
    pub year: String,
    /// Two or three Greater Vancouver areas
    #[serde(default)]
    pub cities: Vec<String>,
    /// Recipients
    #[serde(default)]
    pub to_emails: Vec<String>,
    /// Subject; a default naming the areas is used when absent
    #[serde(default)]
    pub subject: Option<String>,
}

impl CityComparisonEmailRequest {
    /// Validated period
    pub fn period(&self) -> AppResult<ReportPeriod> {
        ReportPeriod::parse(&self.month, &self.year)
    }
}

/// Subject given by the caller unless blank, `default` otherwise
pub fn subject_or(subject: Option<&str>, default: impl FnOnce() -> String) -> String {
    match subject.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => default(),
    }
}

/// Rejects an empty recipient list
pub fn require_recipients(to_emails: &[String]) -> AppResult<()> {
    if to_emails.iter().all(|e| e.trim().is_empty()) {
        return Err(AppError::InvalidInput(
            "Please provide at least one recipient email".to_string(),
        ));
    }
    Ok(())
}
