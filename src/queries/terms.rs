//! Per-topic term documents stored at `trends/{topic}.json`.
//!
//! Each document has the `{"terms": [...]}` shape served to table clients.
//! A topic with no document simply has no terms.

use tracing::debug;

use crate::config;
use crate::error::{Result, TrendsError};
use crate::models::{TermsDocument, TrendsTerm};
use crate::store::Store;

// ---------------------------------------------------------------------------
// TermQuery
// ---------------------------------------------------------------------------

/// Query interface for the terms tracked under a topic.
pub struct TermQuery<'a> {
    store: &'a Store,
}

impl<'a> TermQuery<'a> {
    /// Create a new `TermQuery` bound to the given store.
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Load the terms document for a topic.
    ///
    /// Returns an empty document when the topic has none.
    pub fn document(&self, topic: &str) -> Result<TermsDocument> {
        validate_topic(topic)?;
        let key = config::terms_document_key(topic);
        if !self.store.exists(&key) {
            debug!(topic, "no terms document; returning empty");
            return Ok(TermsDocument::default());
        }
        self.store.load_json_as(&key)
    }

    /// All terms of a topic, in stored order.
    pub fn get(&self, topic: &str) -> Result<Vec<TrendsTerm>> {
        Ok(self.document(topic)?.terms)
    }

    /// Term labels of a topic, in stored order.
    pub fn names(&self, topic: &str) -> Result<Vec<String>> {
        Ok(self.get(topic)?.into_iter().map(|t| t.name).collect())
    }

    /// Find a term by label (case-insensitive).
    pub fn find(&self, topic: &str, name: &str) -> Result<Option<TrendsTerm>> {
        Ok(self
            .get(topic)?
            .into_iter()
            .find(|t| t.name.eq_ignore_ascii_case(name)))
    }

    /// Replace the terms document of a topic.
    pub fn save(&self, topic: &str, terms: &[TrendsTerm]) -> Result<()> {
        validate_topic(topic)?;
        let doc = TermsDocument::new(terms.to_vec());
        self.store.write_json(&config::terms_document_key(topic), &doc)
    }
}

fn validate_topic(topic: &str) -> Result<()> {
    if topic.is_empty() || topic.contains(['/', '\\']) || topic == ".." || topic == "." {
        return Err(TrendsError::InvalidArgument(format!(
            "Invalid topic name: {:?}",
            topic
        )));
    }
    Ok(())
}
