use crate::presentation::serialization::{
    lenient_bool_opt, lenient_f64_opt, lenient_string, lenient_string_opt, lenient_vec,
};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Visual data behind the infographic emails and posters
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct VisualInfographicData {
    /// Region headline, e.g. `GREATER VANCOUVER`
    #[serde(
        default,
        deserialize_with = "lenient_string_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub location_title: Option<String>,
    /// New listings, active listings, total sales and average price
    #[serde(default, deserialize_with = "lenient_vec")]
    pub main_statistics: Vec<MainStatistic>,
    /// One narrative per property type
    #[serde(default, deserialize_with = "lenient_vec")]
    pub benchmark_price_narratives: Vec<BenchmarkNarrative>,
    /// Short metrics for the poster layout
    #[serde(default, deserialize_with = "lenient_vec")]
    pub poster_metrics: Vec<PosterMetric>,
}

/// A headline statistic compared with the previous month and year
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MainStatistic {
    /// Metric name, e.g. `NEW LISTINGS`
    #[serde(default, deserialize_with = "lenient_string")]
    pub label: String,
    /// Current value as displayed
    #[serde(default, deserialize_with = "lenient_string")]
    pub current: String,
    /// Month over month change in percent
    #[serde(default, deserialize_with = "lenient_f64_opt")]
    pub pct_change: Option<f64>,
    /// Previous month value as displayed
    #[serde(default, deserialize_with = "lenient_string")]
    pub prev_month: String,
    /// Previous year value, usually with its own percentage
    #[serde(default, deserialize_with = "lenient_string")]
    pub prev_year: String,
}

impl MainStatistic {
    /// Change used for colouring; a missing value counts as flat
    pub fn change(&self) -> f64 {
        self.pct_change.unwrap_or(0.0)
    }
}

/// Benchmark price narrative for one property type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BenchmarkNarrative {
    /// Property type, e.g. `Townhomes`
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub property_type: String,
    /// Benchmark price as displayed
    #[serde(default, deserialize_with = "lenient_string")]
    pub price: String,
    /// One or two sentences describing the movement
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
}

/// Compact metric shown on posters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PosterMetric {
    /// Metric name
    #[serde(default, deserialize_with = "lenient_string")]
    pub label: String,
    /// Value as displayed
    #[serde(default, deserialize_with = "lenient_string")]
    pub value: String,
    /// Change as displayed, e.g. `-25.5%`
    #[serde(default, deserialize_with = "lenient_string")]
    pub change: String,
    /// Whether the change is good news
    #[serde(default, deserialize_with = "lenient_bool_opt", skip_serializing_if = "Option::is_none")]
    pub positive: Option<bool>,
    /// `up` or `down`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<String>,
}
