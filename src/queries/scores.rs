//! Trend score queries over the headerless `geo,term,date,score` CSV files.

use crate::error::Result;
use crate::models::{read_csv_rows, write_csv_rows, Snapshot, TrendScoreRow};
use crate::normalize::csv_term;
use crate::store::Store;

// ---------------------------------------------------------------------------
// ScoreQuery
// ---------------------------------------------------------------------------

/// Query interface for trend score artifacts.
pub struct ScoreQuery<'a> {
    store: &'a Store,
}

impl<'a> ScoreQuery<'a> {
    /// Create a new `ScoreQuery` bound to the given store.
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// All rows of a snapshot. A missing artifact yields no rows.
    pub fn rows(&self, snapshot: Snapshot) -> Result<Vec<TrendScoreRow>> {
        let key = snapshot.trend_scores_key();
        if !self.store.exists(key) {
            return Ok(Vec::new());
        }
        read_csv_rows(&self.store.read_blob(key)?)
    }

    /// Rows for one term, optionally restricted to one geo.
    ///
    /// Term matching ignores case and commas.
    pub fn for_term(
        &self,
        snapshot: Snapshot,
        term: &str,
        geo: Option<&str>,
    ) -> Result<Vec<TrendScoreRow>> {
        let wanted = csv_term(term);
        Ok(self
            .rows(snapshot)?
            .into_iter()
            .filter(|r| r.term.eq_ignore_ascii_case(&wanted))
            .filter(|r| geo.map(|g| r.geo.eq_ignore_ascii_case(g)).unwrap_or(true))
            .collect())
    }

    /// Replace a snapshot with `rows`. Commas are stripped from terms.
    pub fn write(&self, snapshot: Snapshot, rows: &[TrendScoreRow]) -> Result<()> {
        let clean: Vec<TrendScoreRow> = rows
            .iter()
            .map(|r| TrendScoreRow {
                term: csv_term(&r.term),
                ..r.clone()
            })
            .collect();
        self.store
            .write_blob(snapshot.trend_scores_key(), &write_csv_rows(&clean)?)
    }
}
