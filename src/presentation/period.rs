use crate::constants::REPORT_FILE_PREFIX;
use crate::error::{AppError, AppResult};
use chrono::Month;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Month and year a stats package covers
///
/// The month is normalised to its English title-case name so keys stored in
/// the database and file names on the publisher site always agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportPeriod {
    month: String,
    year: String,
}

/// `"nov"`, `" NOVEMBER "` -> `"November"`
pub fn normalize_month(month: &str) -> AppResult<String> {
    let month = month.trim();
    month
        .parse::<Month>()
        .map(|m| m.name().to_string())
        .map_err(|_| AppError::InvalidInput(format!("unknown month: {month}")))
}

impl ReportPeriod {
    /// Validates and normalises a month name (`"nov"`, `"NOVEMBER"`) and a four digit year
    pub fn parse(month: &str, year: &str) -> AppResult<Self> {
        let month = normalize_month(month)?;

        let year = year.trim();
        if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::InvalidInput(format!(
                "year must have four digits: {year}"
            )));
        }

        Ok(Self {
            month,
            year: year.to_string(),
        })
    }

    /// Title-case month name
    pub fn month(&self) -> &str {
        &self.month
    }

    /// Four digit year
    pub fn year(&self) -> &str {
        &self.year
    }

    /// `GVR-Stats-Package-{Month}-{Year}.pdf`
    pub fn file_name(&self) -> String {
        format!("{REPORT_FILE_PREFIX}-{}-{}.pdf", self.month, self.year)
    }

    /// `NOVEMBER 2025`, used in report headers
    pub fn upper_label(&self) -> String {
        format!("{} {}", self.month.to_uppercase(), self.year)
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}
