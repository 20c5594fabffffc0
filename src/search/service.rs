//! Main search service implementation.

use crate::config::SearchOptions;
use crate::models::{Catalog, Category, Collection};
use crate::search::ranker::{rank, ScoredResult};
use crate::search::suggest::{suggest, Suggestion};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Per-category ranked results merged for one query
#[derive(Debug, Serialize)]
pub struct SearchResults {
    /// Ranked, truncated hits keyed by collection response key
    pub results: BTreeMap<&'static str, Vec<ScoredResult>>,

    /// Sum of per-category result counts
    pub total_results: usize,
}

/// Main search service.
///
/// Holds the immutable catalog and the engine tunables. All operations only
/// read shared records and allocate their own derived results, so a single
/// service instance serves concurrent requests without locking.
#[derive(Clone)]
pub struct SearchService {
    catalog: Arc<Catalog>,
    options: SearchOptions,
}

impl SearchService {
    /// Create a new search service over an immutable catalog
    pub fn new(catalog: Arc<Catalog>, options: SearchOptions) -> Self {
        Self { catalog, options }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Rank every selected collection against the query and merge the
    /// truncated per-category lists.
    pub fn search(&self, query: &str, category: Category, limit: usize) -> SearchResults {
        let limit = limit.min(self.options.max_results);
        let mut results = BTreeMap::new();

        for collection in Collection::ALL {
            if !category.selects(collection) {
                continue;
            }

            let mut hits = self.rank_collection(query, collection);
            hits.truncate(limit);
            results.insert(collection.key(), hits);
        }

        let total_results = results.values().map(Vec::len).sum();

        tracing::debug!(
            query = %query,
            category = %category,
            total_results,
            "Search completed"
        );

        SearchResults {
            results,
            total_results,
        }
    }

    /// Rank a single collection against the query, unbounded
    pub fn rank_collection(&self, query: &str, collection: Collection) -> Vec<ScoredResult> {
        rank(
            query,
            self.catalog.collection(collection),
            collection.search_fields(),
            self.options.threshold,
        )
    }

    /// Substring-matched autocomplete suggestions, truncated to `limit`
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<Suggestion> {
        suggest(&self.catalog, query, limit.min(self.options.max_results))
    }
}
