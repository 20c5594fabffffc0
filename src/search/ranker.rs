//! Record ranking against a free-text query.

use crate::models::{FieldValue, Record};
use crate::search::similarity::similarity;
use serde::Serialize;
use std::cmp::Ordering;

/// A record that crossed the acceptance threshold for a query.
///
/// Carries a copy of the source record plus the two derived attributes;
/// the record's own fields are flattened into the serialized object, so a
/// hit looks like the original record with `relevance_score` and
/// `matched_field` attached.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredResult {
    /// Copy of the matched record
    #[serde(flatten)]
    pub record: Record,

    /// Winning similarity as a percentage, rounded to two decimals
    pub relevance_score: f64,

    /// Field whose value produced the winning score ("" if nothing scored)
    pub matched_field: String,
}

/// Score every record against the query and return the survivors, best
/// first.
///
/// Each record's score is the maximum similarity between the query and any
/// listed field: text fields compare directly, text-list fields contribute
/// their best element (the field name is recorded, not the element), and
/// numeric or boolean fields are skipped. Records must score strictly above
/// `threshold` to be returned; the comparison happens on the rounded
/// percentage both sides report, so raw-ratio floating-point noise (a ratio
/// like 7/10 yielding 0.30000000000000004) cannot land a 30.00 result in the
/// output. Output is sorted by descending score with a
/// stable sort, so equal scores keep collection insertion order. The ranker
/// is unbounded; truncation is the caller's concern.
///
/// Total over well-typed input: an empty query scores 0.0 everywhere and
/// yields an empty result, unknown field names are simply skipped.
pub fn rank(
    query: &str,
    records: &[Record],
    fields: &[&str],
    threshold: f64,
) -> Vec<ScoredResult> {
    let mut results: Vec<ScoredResult> = records
        .iter()
        .filter_map(|record| score_record(query, record, fields, threshold))
        .collect();

    results.sort_by(|a, b| {
        b.relevance_score
            .partial_cmp(&a.relevance_score)
            .unwrap_or(Ordering::Equal)
    });

    results
}

fn score_record(
    query: &str,
    record: &Record,
    fields: &[&str],
    threshold: f64,
) -> Option<ScoredResult> {
    let mut best_score = 0.0_f64;
    let mut best_field = "";

    for &field in fields {
        let Some(value) = record.get(field) else {
            continue;
        };

        let score = match value {
            FieldValue::Text(text) => similarity(query, text),
            FieldValue::TextList(items) => items
                .iter()
                .map(|item| similarity(query, item))
                .fold(0.0, f64::max),
            // Numbers and flags never participate in scoring.
            FieldValue::Bool(_) | FieldValue::Int(_) | FieldValue::Float(_) => continue,
        };

        if score > best_score {
            best_score = score;
            best_field = field;
        }
    }

    let relevance_score = to_percentage(best_score);

    if relevance_score > to_percentage(threshold) {
        Some(ScoredResult {
            record: record.clone(),
            relevance_score,
            matched_field: best_field.to_string(),
        })
    } else {
        None
    }
}

/// Ratio in `[0, 1]` to a percentage rounded to two decimal places
fn to_percentage(score: f64) -> f64 {
    (score * 10_000.0).round() / 100.0
}
