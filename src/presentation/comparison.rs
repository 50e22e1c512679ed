use crate::presentation::serialization::{lenient_f64_opt, lenient_string, lenient_vec};
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Side by side market figures of two or three areas
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CityComparison {
    /// Month name
    #[serde(default, deserialize_with = "lenient_string")]
    pub month: String,
    /// Four digit year
    #[serde(default, deserialize_with = "lenient_string")]
    pub year: String,
    /// One entry per compared area
    #[serde(default, deserialize_with = "lenient_vec")]
    pub cities: Vec<CityData>,
    /// Short narrative of the main trends
    #[serde(default, deserialize_with = "lenient_string")]
    pub summary: String,
}

/// Sorts area names so that `[b, a]` and `[a, b]` address the same comparison
pub fn sorted_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut names: Vec<String> = names.into_iter().map(str::to_string).collect();
    names.sort();
    names
}

/// Figures of one area split by property type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CityData {
    /// Area name as listed in the stats package
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    /// All property types combined
    #[serde(default)]
    pub overall: PropertyMetrics,
    /// Detached homes
    #[serde(default)]
    pub detached: PropertyMetrics,
    /// Townhouses
    #[serde(default)]
    pub townhouse: PropertyMetrics,
    /// Apartments and condos
    #[serde(default, alias = "appartment")]
    pub apartment: PropertyMetrics,
}

/// Monthly figures of one property type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PropertyMetrics {
    /// Listings added this month
    #[serde(default, deserialize_with = "lenient_f64_opt", skip_serializing_if = "Option::is_none")]
    pub new_listings: Option<f64>,
    /// Listings active at month end
    #[serde(default, deserialize_with = "lenient_f64_opt", skip_serializing_if = "Option::is_none")]
    pub active_listings: Option<f64>,
    /// Sales this month
    #[serde(default, deserialize_with = "lenient_f64_opt", skip_serializing_if = "Option::is_none")]
    pub total_sales: Option<f64>,
    /// MLS HPI benchmark price
    #[serde(default, deserialize_with = "lenient_f64_opt", skip_serializing_if = "Option::is_none")]
    pub benchmark_price: Option<f64>,
    /// Month over month benchmark change in percent
    #[serde(default, deserialize_with = "lenient_f64_opt", skip_serializing_if = "Option::is_none")]
    pub mom_change: Option<f64>,
    /// Year over year benchmark change in percent
    #[serde(default, deserialize_with = "lenient_f64_opt", skip_serializing_if = "Option::is_none")]
    pub yoy_change: Option<f64>,
}

/// A comparison as kept in the store
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredComparison {
    /// Document id
    pub id: String,
    /// Month name
    pub month: String,
    /// Four digit year
    pub year: String,
    /// Sorted area names
    pub city_names: Vec<String>,
    /// Per area figures
    pub cities: Vec<CityData>,
    /// Narrative summary
    pub summary: String,
    /// First time this comparison was stored
    pub created_at: DateTime<Utc>,
    /// Last time this comparison was stored
    pub updated_at: DateTime<Utc>,
}

impl StoredComparison {
    /// Drops storage metadata
    pub fn into_comparison(self) -> CityComparison {
        CityComparison {
            month: self.month,
            year: self.year,
            cities: self.cities,
            summary: self.summary,
        }
    }
}
