use serde::{Deserialize, Serialize};

use super::data::TrendsData;

// ---------------------------------------------------------------------------
// TrendsTerm — Ordered observations grouped under one term label
// ---------------------------------------------------------------------------

/// An ordered sequence of [`TrendsData`] observations under one term name.
///
/// `name` is the term's own label. It is not required to match the `name`
/// of the observations it holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendsTerm {
    pub name: String,
    #[serde(default)]
    pub data: Vec<TrendsData>,
}

impl TrendsTerm {
    /// Create a term with no observations.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: Vec::new(),
        }
    }

    pub fn with_data(name: impl Into<String>, data: Vec<TrendsData>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Append an observation after the existing ones.
    pub fn push(&mut self, data: TrendsData) {
        self.data.push(data);
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrendsData> {
        self.data.iter()
    }

    /// Distinct geo codes in the order they first appear.
    ///
    /// Codes are compared ignoring ASCII case, like [`for_geo`](Self::for_geo);
    /// the first spelling seen is reported.
    pub fn geos(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for d in &self.data {
            if !seen.iter().any(|g| g.eq_ignore_ascii_case(&d.geo)) {
                seen.push(d.geo.as_str());
            }
        }
        seen
    }

    /// Observations for one geo, in their original order.
    pub fn for_geo(&self, geo: &str) -> Vec<&TrendsData> {
        self.data
            .iter()
            .filter(|d| d.geo.eq_ignore_ascii_case(geo))
            .collect()
    }
}

impl<'a> IntoIterator for &'a TrendsTerm {
    type Item = &'a TrendsData;
    type IntoIter = std::slice::Iter<'a, TrendsData>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

// ---------------------------------------------------------------------------
// TermsDocument — Per-topic `{"terms": [...]}` payload
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TermsDocument {
    #[serde(default)]
    pub terms: Vec<TrendsTerm>,
}

impl TermsDocument {
    pub fn new(terms: Vec<TrendsTerm>) -> Self {
        Self { terms }
    }
}
