//! Topic entity queries backed by `output/topic_entities.json`.

use crate::config;
use crate::error::Result;
use crate::models::{TopicEntities, TopicTerms};
use crate::store::Store;

// ---------------------------------------------------------------------------
// EntityQuery
// ---------------------------------------------------------------------------

/// Query interface for the topic entities input file.
pub struct EntityQuery<'a> {
    store: &'a Store,
}

impl<'a> EntityQuery<'a> {
    /// Create a new `EntityQuery` bound to the given store.
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Load the raw entities file.
    pub fn raw(&self) -> Result<TopicEntities> {
        self.store.load_json_as(config::TOPIC_ENTITIES_KEY)
    }

    /// Normalized term names listed under `key`, plus the geos to cover.
    ///
    /// Pass [`config::DEFAULT_ENTITY_KEY`] for the main term list.
    pub fn load(&self, key: &str) -> Result<TopicTerms> {
        let terms = self.raw()?.topic_terms(key);
        tracing::info!(
            key,
            terms = terms.terms.len(),
            geos = terms.geos.len(),
            "loaded topic terms"
        );
        Ok(terms)
    }
}
