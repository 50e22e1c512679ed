use crate::error::AppResult;
use crate::presentation::infographic::VisualInfographicData;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// Key of the infographic section inside a report document
pub const INFOGRAPHIC_KEY: &str = "visual_infographic_data";

/// A market report document as kept in the store
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct StoredReport {
    /// Document id
    pub id: String,
    /// Month name
    pub month: String,
    /// Four digit year
    pub year: String,
    /// Model output, loosely typed
    pub data: Value,
    /// Whether `data` parsed as JSON without repair falling back
    pub json_valid: bool,
    /// Where `data` came from
    pub source: String,
    /// First time this report was stored
    pub created_at: DateTime<Utc>,
    /// Last time this report was stored
    pub updated_at: DateTime<Utc>,
}

impl StoredReport {
    /// Raw infographic section, when present and not empty
    pub fn infographic_value(&self) -> Option<&Value> {
        infographic_value(&self.data)
    }

    /// Typed infographic section
    ///
    /// A section that is present but does not decode is an error, not `None`.
    pub fn infographic(&self) -> AppResult<Option<VisualInfographicData>> {
        self.infographic_value()
            .map(|v| serde_json::from_value(v.clone()))
            .transpose()
            .map_err(Into::into)
    }
}

/// Infographic section of a report document, ignoring `null` and `{}`
pub fn infographic_value(data: &Value) -> Option<&Value> {
    match data.get(INFOGRAPHIC_KEY) {
        None | Some(Value::Null) => None,
        Some(Value::Object(map)) if map.is_empty() => None,
        Some(value) => Some(value),
    }
}
