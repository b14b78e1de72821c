//! Token-sort fuzzy matching against catalog descriptions.
//!
//! Both strings are reduced to lowercase word tokens (`_` included), the
//! tokens are sorted and rejoined, and the indel similarity of the results is
//! taken.
//! Word order therefore does not affect the score.

use icd_catalog::CodeCatalog;
use icd_model::Candidate;
use rapidfuzz::fuzz;

use crate::utils::sort_by_confidence;

/// Candidates must score strictly above this (on the 0-100 scale).
pub const FUZZY_MIN_SCORE: f64 = 50.0;

/// Token-sort similarity on a 0-100 scale, rounded to a whole number.
///
/// Returns 0 when either side has no tokens.
pub fn token_sort_ratio(left: &str, right: &str) -> f64 {
    let left = sorted_tokens(left);
    let right = sorted_tokens(right);
    if left.is_empty() || right.is_empty() {
        return 0.0;
    }
    (fuzz::ratio(left.chars(), right.chars()) * 100.0).round_ties_even()
}

/// Scores `normalized` against every catalog description.
///
/// Survivors are tagged fuzzy with `confidence = score / 100` and returned in
/// descending confidence, ties in catalog order.
pub fn fuzzy_match(normalized: &str, catalog: &CodeCatalog) -> Vec<Candidate> {
    let mut matches: Vec<Candidate> = catalog
        .iter()
        .filter_map(|entry| {
            let score = token_sort_ratio(normalized, &entry.description.to_lowercase());
            (score > FUZZY_MIN_SCORE).then(|| Candidate::fuzzy(entry, score / 100.0))
        })
        .collect();
    sort_by_confidence(&mut matches);
    matches
}

fn sorted_tokens(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(char::is_ascii)
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ch.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();
    let mut tokens: Vec<&str> = cleaned.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use icd_model::{CodeEntry, MatchType};

    use super::*;

    #[test]
    fn word_order_does_not_matter() {
        assert_eq!(token_sort_ratio("pain chest", "chest pain"), 100.0);
        assert_eq!(
            token_sort_ratio("hypertension essential primary", "Essential (primary) hypertension"),
            100.0
        );
    }

    #[test]
    fn empty_side_scores_zero() {
        assert_eq!(token_sort_ratio("", "fatigue"), 0.0);
        assert_eq!(token_sort_ratio("fatigue", "  "), 0.0);
    }

    #[test]
    fn ratio_is_whole_percentage() {
        let score = token_sort_ratio("chronic kidney disease", "chronic kidney disease stage 5");
        assert_eq!(score, score.trunc());
        assert!(score > 50.0 && score < 100.0);
    }

    #[test]
    fn exact_description_ranks_first() {
        let catalog = CodeCatalog::builtin();
        let matches = fuzzy_match("essential primary hypertension", &catalog);
        assert_eq!(matches[0].code, "I10");
        assert_eq!(matches[0].confidence, 1.0);
        assert!(matches.iter().all(|m| m.match_type == MatchType::Fuzzy));
        assert!(matches.iter().all(|m| m.confidence > 0.5));
        assert!(matches.windows(2).all(|w| w[0].confidence >= w[1].confidence));
    }

    #[test]
    fn unrelated_text_has_no_candidates() {
        let catalog = CodeCatalog::builtin();
        assert!(fuzzy_match("xqzv flmr", &catalog).is_empty());
        assert!(fuzzy_match("", &catalog).is_empty());
    }

    #[test]
    fn underscore_stays_inside_a_token() {
        assert_eq!(sorted_tokens("Heart_Failure, acute"), "acute heart_failure");
        assert!(token_sort_ratio("heart_failure", "failure heart") < 100.0);
    }

    #[test]
    fn equal_scores_keep_catalog_order() {
        let catalog = CodeCatalog::from_entries(
            vec![
                CodeEntry::new("Z99.9", "alpha bbbb", "Test"),
                CodeEntry::new("A00.0", "alpha cccc", "Test"),
            ],
            "test",
        )
        .unwrap();

        let matches = fuzzy_match("alpha", &catalog);
        let codes: Vec<_> = matches.iter().map(|m| m.code.as_str()).collect();
        assert_eq!(codes, ["Z99.9", "A00.0"]);
        assert_eq!(matches[0].confidence, matches[1].confidence);
    }
}
