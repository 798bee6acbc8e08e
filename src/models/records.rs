//! Flat records exchanged as CSV and JSON artifacts.
//!
//! Trend scores and news volume are headerless CSV, one observation per
//! line, in the column order of the struct fields.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::Result;
use crate::normalize::csv_term;

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// Which artifact of a record family: the full initial load or the
/// incremental update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Snapshot {
    Initial,
    Update,
}

impl Snapshot {
    pub fn trend_scores_key(self) -> &'static str {
        match self {
            Snapshot::Initial => config::TREND_SCORES_INITIAL_KEY,
            Snapshot::Update => config::TREND_SCORES_UPDATE_KEY,
        }
    }

    pub fn news_volume_key(self) -> &'static str {
        match self {
            Snapshot::Initial => config::NEWS_VOLUME_INITIAL_KEY,
            Snapshot::Update => config::NEWS_VOLUME_UPDATE_KEY,
        }
    }
}

// ---------------------------------------------------------------------------
// TrendScoreRow — `geo,term,date,score`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendScoreRow {
    pub geo: String,
    pub term: String,
    pub date: String,
    #[serde(serialize_with = "serialize_whole")]
    pub score: f64,
}

impl TrendScoreRow {
    pub fn new(geo: impl Into<String>, term: &str, date: impl Into<String>, score: f64) -> Self {
        Self {
            geo: geo.into(),
            term: csv_term(term),
            date: date.into(),
            score,
        }
    }
}

// ---------------------------------------------------------------------------
// NewsVolumeRow — `term,date,value,norm`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsVolumeRow {
    pub term: String,
    /// Day stamp, e.g. `20240101T000000Z`.
    pub date: String,
    #[serde(serialize_with = "serialize_whole")]
    pub value: f64,
    pub norm: f64,
}

impl NewsVolumeRow {
    pub fn new(term: &str, date: impl Into<String>, value: f64, norm: f64) -> Self {
        Self {
            term: csv_term(term),
            date: date.into(),
            value,
            norm,
        }
    }
}

// ---------------------------------------------------------------------------
// GrowthRate — Element of `output/growth_rates.json`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthRate {
    pub name: String,
    pub date: String,
    pub growth_rate: Option<f64>,
    pub trends_growth: Option<f64>,
    pub news_growth: Option<f64>,
}

// ---------------------------------------------------------------------------
// CSV codec
// ---------------------------------------------------------------------------

/// Largest magnitude at which every integer is exactly representable in f64.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Write whole numbers without a fractional part (`79`, not `79.0`).
fn serialize_whole<S>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

// ---------------------------------------------------------------------------
// Readers and writers
// ---------------------------------------------------------------------------

/// Parse headerless CSV into rows. Blank input yields no rows.
pub fn read_csv_rows<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(bytes);
    let mut rows = Vec::new();
    for record in rdr.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Encode rows as headerless CSV.
pub fn write_csv_rows<T: Serialize>(rows: &[T]) -> Result<Vec<u8>> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.into_inner()
        .map_err(|e| crate::error::TrendsError::Io(e.into_error()))
}
