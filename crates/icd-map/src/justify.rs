//! Human-readable justifications for the chosen match.

use icd_model::{Candidate, MatchType};

/// Explains why `best` was chosen for `original`.
///
/// Pattern candidates that carry no keywords cannot cite their evidence and
/// fall back to generic terminology phrasing.
pub fn justify(original: &str, best: &Candidate) -> String {
    let confidence = percent(best.confidence);
    match best.match_type {
        MatchType::Fuzzy => format!(
            "Fuzzy string matching identified '{}' as the best match for '{}' with {} similarity.",
            best.description, original, confidence
        ),
        MatchType::Pattern if !best.keywords().is_empty() => format!(
            "Pattern matching identified key medical terms ({}) that align with '{}' (confidence: {}).",
            best.keywords().join(", "),
            best.description,
            confidence
        ),
        MatchType::Pattern => generic(original, best, &confidence),
    }
}

fn generic(original: &str, best: &Candidate, confidence: &str) -> String {
    format!(
        "Medical terminology analysis suggests '{}' as the most appropriate ICD-10 code for '{}' (confidence: {}).",
        best.description, original, confidence
    )
}

fn percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}
