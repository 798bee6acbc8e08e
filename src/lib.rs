//! Trends SDK for Rust.
//!
//! Typed trend-score records ([`TrendsData`], [`TrendsTerm`]), table column
//! descriptors ([`TableColumn`]) and a directory-backed store for the
//! artifacts of a trends pipeline: topic entities, trend score and news
//! volume CSVs, growth rates and per-topic term documents.
//!
//! # Quick start
//!
//! ```no_run
//! use trends_sdk::{TrendsSdk, TrendsData, PartialTrendsData};
//!
//! let sdk = TrendsSdk::builder().data_dir("/tmp/trends").build().unwrap();
//!
//! // Terms tracked under a topic
//! let terms = sdk.terms().get("databases").unwrap();
//!
//! // Records fill unspecified fields with defaults
//! let row = TrendsData::from_partial(PartialTrendsData {
//!     score: Some(42.0),
//!     ..Default::default()
//! });
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod queries;
pub mod store;

pub use error::{Result, TrendsError};
pub use models::{
    trends_columns, PartialTrendsData, TableColumn, TermsDocument, TrendsData, TrendsTerm,
};
pub use store::Store;

use std::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// TrendsSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`TrendsSdk`] instance.
///
/// Use [`TrendsSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](TrendsSdkBuilder::build) to create the SDK.
#[derive(Default)]
pub struct TrendsSdkBuilder {
    data_dir: Option<PathBuf>,
}

impl TrendsSdkBuilder {
    /// Set the store root directory.
    ///
    /// If not set, the `TRENDS_DATA_DIR` environment variable is used, then
    /// the platform cache directory (e.g. `~/.cache/trends-sdk` on Linux).
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Build the SDK, creating the store root if needed.
    pub fn build(self) -> Result<TrendsSdk> {
        let store = Store::new(self.data_dir)?;
        Ok(TrendsSdk { store })
    }
}

// ---------------------------------------------------------------------------
// TrendsSdk
// ---------------------------------------------------------------------------

/// The main entry point for the trends SDK.
///
/// Owns a [`Store`] and exposes query interfaces as lightweight borrowing
/// wrappers.
pub struct TrendsSdk {
    store: Store,
}

impl TrendsSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> TrendsSdkBuilder {
        TrendsSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the per-topic terms documents.
    pub fn terms(&self) -> queries::TermQuery<'_> {
        queries::TermQuery::new(&self.store)
    }

    /// Access the topic entities input file.
    pub fn entities(&self) -> queries::EntityQuery<'_> {
        queries::EntityQuery::new(&self.store)
    }

    /// Access trend score artifacts.
    pub fn scores(&self) -> queries::ScoreQuery<'_> {
        queries::ScoreQuery::new(&self.store)
    }

    /// Access news volume artifacts.
    pub fn news(&self) -> queries::NewsQuery<'_> {
        queries::NewsQuery::new(&self.store)
    }

    /// Access growth rates.
    pub fn growth(&self) -> queries::GrowthQuery<'_> {
        queries::GrowthQuery::new(&self.store)
    }

    /// Return a reference to the underlying [`Store`] for advanced usage.
    pub fn store(&self) -> &Store {
        &self.store
    }
}

impl fmt::Display for TrendsSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrendsSdk(data_dir={})", self.store.root.display())
    }
}
