//! String similarity scorer.

/// Normalized similarity ratio between two strings, in `[0, 1]`.
///
/// Both inputs are case-folded before comparison, so `similarity` is
/// case-insensitive. The metric is normalized Levenshtein distance: identical
/// non-empty strings score exactly 1.0 and strings with no character overlap
/// score near 0.0. Pure and deterministic; either input being empty yields
/// 0.0 rather than an error, which is what makes an empty query a valid
/// (always-empty) search.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    strsim::normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings_score_one() {
        assert_eq!(similarity("fever", "fever"), 1.0);
        assert_eq!(similarity("Dr. Rajesh Kumar", "Dr. Rajesh Kumar"), 1.0);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(similarity("FEVER", "fever"), 1.0);
        assert_eq!(similarity("PyReXiA", "pyrexia"), 1.0);
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        assert_eq!(similarity("", ""), 0.0);
        assert_eq!(similarity("", "fever"), 0.0);
        assert_eq!(similarity("fever", ""), 0.0);
    }

    #[test]
    fn test_near_match_scores_high() {
        let score = similarity("feve", "Fever");
        assert!(score > 0.7, "score was {score}");
    }

    #[test]
    fn test_disjoint_strings_score_low() {
        let score = similarity("xyzxyzxyz", "Fever");
        assert!(score < 0.2, "score was {score}");
    }

    #[test]
    fn test_symmetric() {
        assert_eq!(similarity("feve", "fever"), similarity("fever", "feve"));
    }

    #[test]
    fn test_deterministic() {
        let first = similarity("headache", "head pain");
        let second = similarity("headache", "head pain");
        assert_eq!(first, second);
    }

    #[test]
    fn test_bounded() {
        for (a, b) in [
            ("fever", "pyrexia"),
            ("a", "abcdefghij"),
            ("chest pain", "chest discomfort"),
        ] {
            let score = similarity(a, b);
            assert!((0.0..=1.0).contains(&score), "{a} vs {b} scored {score}");
        }
    }
}
