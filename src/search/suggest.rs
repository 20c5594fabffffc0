//! Autocomplete suggestion matching.
//!
//! Suggestions are independent of the fuzzy ranking pipeline: they use plain
//! case-insensitive substring containment, contribute at most one entry per
//! record, and are returned in a fixed scan order (symptoms, doctors,
//! hospitals, medicines) with no relevance ranking. Health records are never
//! suggested.

use crate::models::{Catalog, Collection};
use serde::Serialize;

/// A lightweight autocomplete entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Display text
    pub text: String,

    /// Human-readable category label
    pub category: String,

    /// Category icon token
    pub icon: String,
}

impl Suggestion {
    fn new(text: String, collection: Collection) -> Self {
        Self {
            text,
            category: collection.label().to_string(),
            icon: collection.icon().to_string(),
        }
    }
}

/// Collect substring-matched suggestions across the catalog, truncated to
/// `limit` in scan order (first match wins within the limit).
///
/// An empty query matches every scanned record; this is the documented
/// degenerate behavior, bounded by `limit`.
pub fn suggest(catalog: &Catalog, query: &str, limit: usize) -> Vec<Suggestion> {
    let needle = query.to_lowercase();
    let mut suggestions = Vec::new();

    for record in catalog.collection(Collection::Symptoms) {
        if let Some(name) = record.text_value("name") {
            if name.to_lowercase().contains(&needle) {
                suggestions.push(Suggestion::new(name.to_string(), Collection::Symptoms));
            }
        }
    }

    for record in catalog.collection(Collection::Doctors) {
        let name = record.text_value("name").unwrap_or_default();
        let specialty = record.text_value("specialty").unwrap_or_default();
        if name.to_lowercase().contains(&needle) || specialty.to_lowercase().contains(&needle) {
            suggestions.push(Suggestion::new(
                format!("{} - {}", name, specialty),
                Collection::Doctors,
            ));
        }
    }

    for record in catalog.collection(Collection::Hospitals) {
        if let Some(name) = record.text_value("name") {
            if name.to_lowercase().contains(&needle) {
                suggestions.push(Suggestion::new(name.to_string(), Collection::Hospitals));
            }
        }
    }

    for record in catalog.collection(Collection::Medicines) {
        if let Some(name) = record.text_value("name") {
            if name.to_lowercase().contains(&needle) {
                suggestions.push(Suggestion::new(name.to_string(), Collection::Medicines));
            }
        }
    }

    suggestions.truncate(limit);
    suggestions
}
