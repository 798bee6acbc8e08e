//! Growth rate queries backed by `output/growth_rates.json`.

use tracing::warn;

use crate::config;
use crate::error::Result;
use crate::models::GrowthRate;
use crate::store::Store;

// ---------------------------------------------------------------------------
// GrowthQuery
// ---------------------------------------------------------------------------

/// Query interface for aggregated growth rates.
pub struct GrowthQuery<'a> {
    store: &'a Store,
}

impl<'a> GrowthQuery<'a> {
    /// Create a new `GrowthQuery` bound to the given store.
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// All stored growth rates. A missing artifact yields none.
    pub fn list(&self) -> Result<Vec<GrowthRate>> {
        if !self.store.exists(config::GROWTH_RATES_KEY) {
            return Ok(Vec::new());
        }
        self.store.load_json_as(config::GROWTH_RATES_KEY)
    }

    /// Growth rates for one name (case-insensitive), in stored order.
    pub fn for_name(&self, name: &str) -> Result<Vec<GrowthRate>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|g| g.name.eq_ignore_ascii_case(name))
            .collect())
    }

    /// Replace the stored growth rates, keeping at most
    /// [`config::MAX_GROWTH_ROWS`] rows.
    pub fn save(&self, rows: &[GrowthRate]) -> Result<()> {
        if rows.len() > config::MAX_GROWTH_ROWS {
            warn!(
                rows = rows.len(),
                max = config::MAX_GROWTH_ROWS,
                "truncating growth rates"
            );
        }
        let kept = &rows[..rows.len().min(config::MAX_GROWTH_ROWS)];
        self.store.write_json(config::GROWTH_RATES_KEY, &kept)
    }
}
