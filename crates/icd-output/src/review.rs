//! Manual review triage.

use icd_model::{MappingResult, PatientMappings};
use serde::Serialize;

/// A mapping flagged for manual review, with the patient it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReviewItem<'a> {
    pub patient_id: usize,
    pub mapping: &'a MappingResult,
}

/// Mappings with confidence below `confidence_threshold`, in input order.
///
/// Unknown mappings always qualify for any positive threshold since they
/// carry a confidence of zero.
pub fn review_queue(results: &[PatientMappings], confidence_threshold: f64) -> Vec<ReviewItem<'_>> {
    results
        .iter()
        .flat_map(|patient| {
            patient
                .mappings
                .iter()
                .filter(move |mapping| mapping.needs_review(confidence_threshold))
                .map(move |mapping| ReviewItem {
                    patient_id: patient.patient_id,
                    mapping,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(diagnosis: &str, confidence: f64) -> MappingResult {
        MappingResult {
            original_diagnosis: diagnosis.to_string(),
            icd10_code: "I10".to_string(),
            description: "Essential (primary) hypertension".to_string(),
            confidence,
            justification: String::new(),
            alternatives: Vec::new(),
        }
    }

    #[test]
    fn keeps_only_low_confidence_in_order() {
        let results = vec![
            PatientMappings {
                patient_id: 1,
                original_diagnoses: vec!["a".into(), "b".into()],
                mappings: vec![mapping("a", 0.9), mapping("b", 0.4)],
            },
            PatientMappings {
                patient_id: 2,
                original_diagnoses: vec!["c".into(), "d".into()],
                mappings: vec![MappingResult::unknown("c"), mapping("d", 0.7)],
            },
        ];

        let queue = review_queue(&results, 0.7);
        let flagged: Vec<_> = queue
            .iter()
            .map(|item| (item.patient_id, item.mapping.original_diagnosis.as_str()))
            .collect();
        assert_eq!(flagged, vec![(1, "b"), (2, "c")]);

        assert!(review_queue(&results, 0.0).is_empty());
    }
}
