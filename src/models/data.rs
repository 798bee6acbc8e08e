use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_NAME: &str = "";
pub const DEFAULT_GEO: &str = "";
pub const DEFAULT_SCORE: f64 = 0.0;
/// Default for `daily_change`, `weekly_change` and `monthly_change`.
pub const DEFAULT_CHANGE: f64 = 0.0;
pub const DEFAULT_LAST_UPDATE: &str = "";

// ---------------------------------------------------------------------------
// TrendsData — One scored observation for a term at a geo and time
// ---------------------------------------------------------------------------

/// A single scored observation for one term at one geography and time.
///
/// Every field is always present. Missing keys deserialize to the
/// `DEFAULT_*` constants of this module and unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrendsData {
    pub name: String,
    pub geo: String,
    pub score: f64,
    pub daily_change: f64,
    pub weekly_change: f64,
    pub monthly_change: f64,
    /// Textual timestamp of the last refresh, kept as produced.
    pub last_update: String,
}

impl Default for TrendsData {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            geo: DEFAULT_GEO.to_string(),
            score: DEFAULT_SCORE,
            daily_change: DEFAULT_CHANGE,
            weekly_change: DEFAULT_CHANGE,
            monthly_change: DEFAULT_CHANGE,
            last_update: DEFAULT_LAST_UPDATE.to_string(),
        }
    }
}

impl TrendsData {
    /// Build a fully populated record from a partial one.
    pub fn from_partial(partial: PartialTrendsData) -> Self {
        Self {
            name: partial.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            geo: partial.geo.unwrap_or_else(|| DEFAULT_GEO.to_string()),
            score: partial.score.unwrap_or(DEFAULT_SCORE),
            daily_change: partial.daily_change.unwrap_or(DEFAULT_CHANGE),
            weekly_change: partial.weekly_change.unwrap_or(DEFAULT_CHANGE),
            monthly_change: partial.monthly_change.unwrap_or(DEFAULT_CHANGE),
            last_update: partial
                .last_update
                .unwrap_or_else(|| DEFAULT_LAST_UPDATE.to_string()),
        }
    }

    /// Build a record from arbitrary JSON without failing.
    ///
    /// Non-object input yields the default record. A key that is missing or
    /// holds a value of the wrong type falls back to that field's default.
    /// Numeric fields also accept numeric strings such as `"42"`.
    pub fn from_value(value: &Value) -> Self {
        let map = match value {
            Value::Object(map) => map,
            _ => return Self::default(),
        };

        Self::from_partial(PartialTrendsData {
            name: string_field(map, "name"),
            geo: string_field(map, "geo"),
            score: number_field(map, "score"),
            daily_change: number_field(map, "dailyChange"),
            weekly_change: number_field(map, "weeklyChange"),
            monthly_change: number_field(map, "monthlyChange"),
            last_update: string_field(map, "lastUpdate"),
        })
    }
}

// ---------------------------------------------------------------------------
// PartialTrendsData — Factory input with every field optional
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialTrendsData {
    pub name: Option<String>,
    pub geo: Option<String>,
    pub score: Option<f64>,
    pub daily_change: Option<f64>,
    pub weekly_change: Option<f64>,
    pub monthly_change: Option<f64>,
    pub last_update: Option<String>,
}

impl From<PartialTrendsData> for TrendsData {
    fn from(partial: PartialTrendsData) -> Self {
        TrendsData::from_partial(partial)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(|v| v.as_str()).map(|s| s.to_string())
}

fn number_field(map: &Map<String, Value>, key: &str) -> Option<f64> {
    match map.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}
