//! Tests for icd-model types.

use icd_model::{
    Alternative, ConfidenceBand, MapperConfig, MappingResult, PatientMappings, UNKNOWN_CODE,
};

fn sample_result() -> MappingResult {
    MappingResult {
        original_diagnosis: "HTN".to_string(),
        icd10_code: "I10".to_string(),
        description: "Essential (primary) hypertension".to_string(),
        confidence: 0.95,
        justification: "Pattern matching identified key medical terms (hypertension)".to_string(),
        alternatives: vec![Alternative {
            code: "I11.9".to_string(),
            description: "Hypertensive heart disease without heart failure".to_string(),
            confidence: 0.95,
        }],
    }
}

#[test]
fn patient_mappings_serialize_round_trip() {
    let patient = PatientMappings {
        patient_id: 1,
        original_diagnoses: vec!["HTN".to_string()],
        mappings: vec![sample_result(), MappingResult::unknown("xqzv flmr")],
    };
    let json = serde_json::to_string(&patient).expect("serialize patient");
    let round: PatientMappings = serde_json::from_str(&json).expect("deserialize patient");
    assert_eq!(round, patient);
    assert_eq!(round.mappings[1].icd10_code, UNKNOWN_CODE);
}

#[test]
fn review_uses_strict_threshold() {
    let result = sample_result();
    assert!(!result.needs_review(0.95));
    assert!(result.needs_review(0.96));
    assert_eq!(result.band(), ConfidenceBand::VeryHigh);
}

#[test]
fn config_deserializes_with_missing_fields() {
    let config: MapperConfig =
        serde_json::from_str(r#"{"max_alternatives": 5}"#).expect("deserialize config");
    assert_eq!(config.max_alternatives, 5);
    assert_eq!(config.confidence_threshold, 0.7);
}
