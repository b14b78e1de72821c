//! Keyword pattern matching.

use icd_catalog::CodeCatalog;
use icd_model::{Candidate, PatternGroup};
use tracing::debug;

use crate::utils::sort_by_confidence;

/// Added to the keyword coverage ratio, so any hit starts above 0.5.
pub const PATTERN_BASE_CONFIDENCE: f64 = 0.5;
/// Upper bound for pattern confidence.
pub const PATTERN_MAX_CONFIDENCE: f64 = 0.95;

/// Keywords of `group` present in `normalized`, in group order.
///
/// A keyword is present when it is a substring of the whole text or of any
/// whitespace-delimited token.
pub fn matched_keywords(normalized: &str, group: &PatternGroup) -> Vec<String> {
    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    group
        .keywords
        .iter()
        .filter(|keyword| {
            normalized.contains(keyword.as_str())
                || tokens.iter().any(|token| token.contains(keyword.as_str()))
        })
        .cloned()
        .collect()
}

/// `min(0.95, matched / total + 0.5)`.
pub fn keyword_confidence(matched: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (matched as f64 / total as f64 + PATTERN_BASE_CONFIDENCE).min(PATTERN_MAX_CONFIDENCE)
}

/// Scores `normalized` against every pattern group.
///
/// Each group with at least one keyword hit emits one candidate per
/// associated code found in `catalog`; codes missing from the catalog are
/// skipped. Groups match independently of each other.
pub fn pattern_match(
    normalized: &str,
    groups: &[PatternGroup],
    catalog: &CodeCatalog,
) -> Vec<Candidate> {
    let mut matches = Vec::new();
    for group in groups {
        let keywords = matched_keywords(normalized, group);
        if keywords.is_empty() {
            continue;
        }
        let confidence = keyword_confidence(keywords.len(), group.keyword_count());
        for code in &group.associated_codes {
            let Some(entry) = catalog.get(code) else {
                debug!(group = %group.name, %code, "pattern code not in catalog, skipping");
                continue;
            };
            matches.push(Candidate::pattern(entry, confidence, keywords.clone()));
        }
    }
    sort_by_confidence(&mut matches);
    matches
}

#[cfg(test)]
mod tests {
    use icd_catalog::builtin_pattern_groups;
    use icd_model::MatchType;

    use super::*;

    fn group(keywords: &[&str], codes: &[&str]) -> PatternGroup {
        PatternGroup::new("test", keywords, codes)
    }

    #[test]
    fn confidence_formula() {
        assert!((keyword_confidence(1, 5) - 0.7).abs() < 1e-9);
        assert!((keyword_confidence(2, 5) - 0.9).abs() < 1e-9);
        assert_eq!(keyword_confidence(2, 4), 0.95);
        assert_eq!(keyword_confidence(3, 3), 0.95);
        assert_eq!(keyword_confidence(0, 0), 0.0);
    }

    #[test]
    fn keyword_presence_uses_substrings() {
        let g = group(&["diabetes", "diabetic", "glucose", "high blood pressure"], &[]);
        assert_eq!(
            matched_keywords("prediabetes with high blood pressure", &g),
            vec!["diabetes".to_string(), "high blood pressure".to_string()]
        );
        assert!(matched_keywords("", &g).is_empty());
    }

    #[test]
    fn emits_one_candidate_per_known_code() {
        let catalog = CodeCatalog::builtin();
        let groups = vec![group(
            &["renal", "kidney", "ckd", "nephropathy", "dialysis"],
            &["N18.6", "X99.9", "N18.9"],
        )];
        let matches = pattern_match("end stage renal disease", &groups, &catalog);
        let codes: Vec<_> = matches.iter().map(|m| m.code.as_str()).collect();
        assert_eq!(codes, vec!["N18.6", "N18.9"]);
        for m in &matches {
            assert!((m.confidence - 0.7).abs() < 1e-9);
            assert_eq!(m.match_type, MatchType::Pattern);
            assert_eq!(m.keywords(), ["renal".to_string()]);
        }
    }

    #[test]
    fn multiple_groups_match_independently() {
        let catalog = CodeCatalog::builtin();
        let matches = pattern_match(
            "diabetes mellitus with chronic kidney disease",
            &builtin_pattern_groups(),
            &catalog,
        );
        assert!(matches.iter().any(|m| m.code == "E11.9"));
        assert!(matches.iter().any(|m| m.code == "N18.9"));
        assert!(matches.windows(2).all(|w| w[0].confidence >= w[1].confidence));
    }

    #[test]
    fn unresolved_codes_are_skipped() {
        let catalog = CodeCatalog::builtin();
        let matches = pattern_match("anxiety", &builtin_pattern_groups(), &catalog);
        assert!(matches.is_empty());
    }
}
