//! Externally visible mapping results.

use serde::{Deserialize, Serialize};

use crate::confidence::ConfidenceBand;

/// Code reported when no candidate survives matching.
pub const UNKNOWN_CODE: &str = "UNKNOWN";
pub const UNKNOWN_DESCRIPTION: &str = "No matching ICD-10 code found";
pub const UNKNOWN_JUSTIFICATION: &str = "No suitable matches found in ICD-10 database";

/// A ranked runner-up to the best match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    #[serde(rename = "icd10_code")]
    pub code: String,
    pub description: String,
    pub confidence: f64,
}

/// Final mapping for one diagnosis string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingResult {
    /// The diagnosis exactly as supplied by the caller.
    pub original_diagnosis: String,
    /// Best code, or [`UNKNOWN_CODE`].
    pub icd10_code: String,
    pub description: String,
    pub confidence: f64,
    pub justification: String,
    /// Runner-ups in descending confidence order, never sharing a code with
    /// the best match or with each other.
    pub alternatives: Vec<Alternative>,
}

impl MappingResult {
    /// The sentinel result for a diagnosis that matched nothing.
    pub fn unknown(original_diagnosis: impl Into<String>) -> Self {
        Self {
            original_diagnosis: original_diagnosis.into(),
            icd10_code: UNKNOWN_CODE.to_string(),
            description: UNKNOWN_DESCRIPTION.to_string(),
            confidence: 0.0,
            justification: UNKNOWN_JUSTIFICATION.to_string(),
            alternatives: Vec::new(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.icd10_code == UNKNOWN_CODE
    }

    /// True when the mapping falls below the caller's review threshold.
    pub fn needs_review(&self, confidence_threshold: f64) -> bool {
        self.confidence < confidence_threshold
    }

    pub fn band(&self) -> ConfidenceBand {
        ConfidenceBand::from_score(self.confidence)
    }
}

/// All mappings produced for one patient row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientMappings {
    /// 1-based patient position in the input file.
    pub patient_id: usize,
    pub original_diagnoses: Vec<String>,
    pub mappings: Vec<MappingResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_result_is_empty() {
        let result = MappingResult::unknown("xqzv");
        assert!(result.is_unknown());
        assert_eq!(result.confidence, 0.0);
        assert!(result.alternatives.is_empty());
        assert!(result.needs_review(0.7));
    }

    #[test]
    fn alternative_uses_export_field_name() {
        let alt = Alternative {
            code: "I10".to_string(),
            description: "Essential (primary) hypertension".to_string(),
            confidence: 0.55,
        };
        let value = serde_json::to_value(&alt).unwrap();
        assert_eq!(value["icd10_code"], "I10");
    }
}
