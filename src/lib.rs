//! MedAid Search Service
//!
//! A multi-domain fuzzy-search engine over five fixed medical record
//! collections (symptoms, doctors, hospitals, medicines, health records).
//! Records are scored against a free-text query with a normalized
//! string-similarity ratio, filtered by a 30% acceptance threshold, and
//! returned ranked per category; a separate substring matcher serves
//! autocomplete suggestions. The sample data is illustrative only.
//!
//! # Example
//!
//! ```
//! use medaid_search::config::SearchOptions;
//! use medaid_search::models::{Catalog, Category};
//! use medaid_search::search::SearchService;
//! use std::sync::Arc;
//!
//! let service = SearchService::new(Arc::new(Catalog::seeded()), SearchOptions::default());
//!
//! let outcome = service.search("fever", Category::All, 10);
//! assert!(outcome.total_results > 0);
//!
//! let suggestions = service.suggest("dr", 5);
//! assert!(!suggestions.is_empty());
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod search;

pub use config::Config;
pub use error::{AppError, Result};
