//! News volume queries over the headerless `term,date,value,norm` CSV files.

use crate::error::Result;
use crate::models::{read_csv_rows, write_csv_rows, NewsVolumeRow, Snapshot};
use crate::normalize::csv_term;
use crate::store::Store;

// ---------------------------------------------------------------------------
// NewsQuery
// ---------------------------------------------------------------------------

/// Query interface for news volume artifacts.
pub struct NewsQuery<'a> {
    store: &'a Store,
}

impl<'a> NewsQuery<'a> {
    /// Create a new `NewsQuery` bound to the given store.
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// All rows of a snapshot. A missing artifact yields no rows.
    pub fn rows(&self, snapshot: Snapshot) -> Result<Vec<NewsVolumeRow>> {
        let key = snapshot.news_volume_key();
        if !self.store.exists(key) {
            return Ok(Vec::new());
        }
        read_csv_rows(&self.store.read_blob(key)?)
    }

    /// Rows of a snapshot recorded for one day stamp.
    pub fn for_day(&self, snapshot: Snapshot, stamp: &str) -> Result<Vec<NewsVolumeRow>> {
        Ok(latest_only(self.rows(snapshot)?, stamp))
    }

    /// Replace a snapshot with `rows`. Commas are stripped from terms.
    pub fn write(&self, snapshot: Snapshot, rows: &[NewsVolumeRow]) -> Result<()> {
        let clean: Vec<NewsVolumeRow> = rows
            .iter()
            .map(|r| NewsVolumeRow {
                term: csv_term(&r.term),
                ..r.clone()
            })
            .collect();
        self.store
            .write_blob(snapshot.news_volume_key(), &write_csv_rows(&clean)?)
    }
}

/// Keep only rows whose date equals `stamp`, preserving order.
pub fn latest_only(rows: Vec<NewsVolumeRow>, stamp: &str) -> Vec<NewsVolumeRow> {
    rows.into_iter().filter(|r| r.date == stamp).collect()
}
