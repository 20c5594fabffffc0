//! Fuzzy search engine.
//!
//! The engine scores every record in the selected collections against a
//! free-text query using a normalized string-similarity ratio, keeps the
//! records above a configurable acceptance threshold, and returns them
//! ranked best-first. A separate substring matcher produces unranked
//! autocomplete suggestions.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              SearchService                  │
//! │  - search()   per-category rank + merge     │
//! │  - suggest()  substring autocomplete        │
//! └─────────────────────────────────────────────┘
//!                │                │
//!                ▼                ▼
//! ┌──────────────────────┐ ┌─────────────────────┐
//! │   Record Ranker      │ │  Suggestion Matcher │
//! │  best field score,   │ │  substring scan in  │
//! │  threshold, stable   │ │  fixed category     │
//! │  descending sort     │ │  order              │
//! └──────────────────────┘ └─────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────┐
//! │  Similarity Scorer   │
//! │  case-folded ratio   │
//! │  in [0, 1]           │
//! └──────────────────────┘
//! ```
//!
//! All three layers are pure functions over the immutable catalog: no
//! locking, no caching, no suspension points.

mod ranker;
mod service;
mod similarity;
mod suggest;

pub use ranker::{rank, ScoredResult};
pub use service::{SearchResults, SearchService};
pub use similarity::similarity;
pub use suggest::{suggest, Suggestion};
