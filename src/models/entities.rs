use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::WORLD_GEO;
use crate::normalize::normalize_term_name;

// ---------------------------------------------------------------------------
// TopicEntities — Raw `output/topic_entities.json`
// ---------------------------------------------------------------------------

/// The topic entities file. Term lists live under configurable keys, each
/// an array of `{"Name": "..."}` objects; `geos` is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopicEntities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geos: Option<Vec<String>>,
    #[serde(flatten)]
    pub lists: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "Name")]
    pub name: String,
}

impl TopicEntities {
    /// Entities listed under `key`. Entries without a `Name` string are skipped.
    pub fn entities(&self, key: &str) -> Vec<Entity> {
        match self.lists.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.get("Name").and_then(|n| n.as_str()))
                .map(|name| Entity {
                    name: name.to_string(),
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Normalized term names under `key` and the geos to cover.
    ///
    /// Geos default to `["WORLD"]` when the file names none.
    pub fn topic_terms(&self, key: &str) -> TopicTerms {
        let terms = self
            .entities(key)
            .iter()
            .map(|e| normalize_term_name(&e.name))
            .collect();
        let geos = self
            .geos
            .clone()
            .unwrap_or_else(|| vec![WORLD_GEO.to_string()]);
        TopicTerms { geos, terms }
    }
}

// ---------------------------------------------------------------------------
// TopicTerms
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicTerms {
    pub geos: Vec<String>,
    pub terms: Vec<String>,
}
