//! Merging fuzzy and pattern candidates.

use std::collections::HashMap;

use icd_model::Candidate;

use crate::pattern::PATTERN_MAX_CONFIDENCE;
use crate::utils::sort_by_confidence;

/// Multiplier applied to a pattern candidate competing with an existing
/// entry for the same code.
pub const PATTERN_PREFERENCE_BOOST: f64 = 1.1;

/// Merges candidates into one ranked list with at most one entry per code.
///
/// Fuzzy candidates go in first, keeping the highest score per code. A
/// pattern candidate for a new code is inserted as-is. For a code already
/// present its confidence is boosted to `min(0.95, confidence * 1.1)`, and
/// it replaces the stored candidate, provenance included, only when the
/// boosted value is strictly higher.
///
/// The result is sorted by descending confidence; ties keep the order in
/// which codes were first inserted.
pub fn combine(fuzzy: Vec<Candidate>, pattern: Vec<Candidate>) -> Vec<Candidate> {
    let mut merged: Vec<Candidate> = Vec::with_capacity(fuzzy.len() + pattern.len());
    let mut positions: HashMap<String, usize> = HashMap::new();

    for candidate in fuzzy {
        match positions.get(&candidate.code) {
            Some(&idx) => {
                if candidate.confidence > merged[idx].confidence {
                    merged[idx] = candidate;
                }
            }
            None => {
                positions.insert(candidate.code.clone(), merged.len());
                merged.push(candidate);
            }
        }
    }

    for mut candidate in pattern {
        match positions.get(&candidate.code) {
            Some(&idx) => {
                let boosted =
                    (candidate.confidence * PATTERN_PREFERENCE_BOOST).min(PATTERN_MAX_CONFIDENCE);
                if boosted > merged[idx].confidence {
                    candidate.confidence = boosted;
                    merged[idx] = candidate;
                }
            }
            None => {
                positions.insert(candidate.code.clone(), merged.len());
                merged.push(candidate);
            }
        }
    }

    sort_by_confidence(&mut merged);
    merged
}
