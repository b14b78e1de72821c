//! Export and report rendering over a small fixed run.

use std::fs;

use chrono::{TimeZone, Utc};
use icd_model::{Alternative, MappingResult, PatientMappings};
use icd_output::{
    ExportFormat, MappingStatistics, export_csv, export_json, render_report_at, review_queue,
    write_export,
};
use tempfile::TempDir;

fn fixture() -> Vec<PatientMappings> {
    vec![
        PatientMappings {
            patient_id: 1,
            original_diagnoses: vec!["HTN".to_string(), "xqzv".to_string()],
            mappings: vec![
                MappingResult {
                    original_diagnosis: "HTN".to_string(),
                    icd10_code: "I10".to_string(),
                    description: "Essential (primary) hypertension".to_string(),
                    confidence: 0.95,
                    justification: "Pattern matching identified key medical terms (htn) that \
                                    align with 'Essential (primary) hypertension' (confidence: \
                                    95.0%)."
                        .to_string(),
                    alternatives: vec![Alternative {
                        code: "I11.9".to_string(),
                        description: "Hypertensive heart disease without heart failure"
                            .to_string(),
                        confidence: 0.75,
                    }],
                },
                MappingResult::unknown("xqzv"),
            ],
        },
        PatientMappings {
            patient_id: 2,
            original_diagnoses: vec!["Asthma, unspecified".to_string()],
            mappings: vec![MappingResult {
                original_diagnosis: "Asthma, unspecified".to_string(),
                icd10_code: "J45.9".to_string(),
                description: "Asthma, unspecified".to_string(),
                confidence: 1.0,
                justification: "Fuzzy string matching identified 'Asthma, unspecified' as the \
                                best match for 'Asthma, unspecified' with 100.0% similarity."
                    .to_string(),
                alternatives: Vec::new(),
            }],
        },
    ]
}

#[test]
fn csv_export_flattens_alternatives() {
    let csv = export_csv(&fixture()).unwrap();
    insta::assert_snapshot!(csv, @r#"
Patient_ID,Original_Diagnosis,ICD10_Code,ICD10_Description,Confidence_Score,Justification,Alternative_Codes
1,HTN,I10,Essential (primary) hypertension,0.95,Pattern matching identified key medical terms (htn) that align with 'Essential (primary) hypertension' (confidence: 95.0%).,I11.9: Hypertensive heart disease without heart failure (Score: 0.75)
1,xqzv,UNKNOWN,No matching ICD-10 code found,0.0,No suitable matches found in ICD-10 database,
2,"Asthma, unspecified",J45.9,"Asthma, unspecified",1.0,"Fuzzy string matching identified 'Asthma, unspecified' as the best match for 'Asthma, unspecified' with 100.0% similarity.",
"#);
}

#[test]
fn json_export_keeps_nested_structure() {
    let json = export_json(&fixture()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(value[0]["patient_id"], 1);
    assert_eq!(value[0]["original_diagnoses"][1], "xqzv");
    assert_eq!(value[0]["mappings"][0]["icd10_code"], "I10");
    assert_eq!(value[0]["mappings"][0]["alternatives"][0]["icd10_code"], "I11.9");
    assert_eq!(value[0]["mappings"][1]["icd10_code"], "UNKNOWN");
    assert!(json.contains("\n  {"));
}

#[test]
fn report_summarizes_run() {
    let generated_at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
    let report = render_report_at(&fixture(), 0.7, generated_at);
    insta::assert_snapshot!(report, @r"
ICD-10 Mapping Report
=====================
Generated: 2026-01-02 03:04:05 UTC

Summary:
- Total Patients: 2
- Total Diagnoses Mapped: 3
- Average Confidence Score: 0.65
- High Confidence Mappings (>= 0.70): 2 (66.7%)
- Needs Review (< 0.70): 1 (33.3%)
- Unknown Mappings: 1 (33.3%)
- Unique ICD-10 Codes Used: 2

Confidence Distribution:
- Very High (>=0.9): 2
- High (0.7-0.9): 0
- Medium (0.5-0.7): 0
- Low (<0.5): 1

Top Codes:
- I10: 1
- J45.9: 1

Detailed Results:

Patient 1:
  - HTN
    -> I10: Essential (primary) hypertension
    Confidence: 0.95
    Alternatives: 1 found
  - xqzv
    -> UNKNOWN: No matching ICD-10 code found
    Confidence: 0.00

Patient 2:
  - Asthma, unspecified
    -> J45.9: Asthma, unspecified
    Confidence: 1.00
");
}

#[test]
fn statistics_and_review_queue_agree() {
    let results = fixture();
    let stats = MappingStatistics::compute(&results, 0.7);
    let queue = review_queue(&results, 0.7);

    assert_eq!(stats.review_count(), queue.len());
    assert_eq!(queue[0].patient_id, 1);
    assert!(queue[0].mapping.is_unknown());
}

#[test]
fn export_writes_requested_format() {
    let dir = TempDir::new().unwrap();
    let results = fixture();

    let csv_path = dir.path().join("mapped.csv");
    write_export(&csv_path, &results, ExportFormat::Csv).unwrap();
    let written = fs::read_to_string(&csv_path).unwrap();
    assert!(written.starts_with("Patient_ID,Original_Diagnosis,"));
    assert_eq!(written.lines().count(), 4);

    let json_path = dir.path().join("mapped.json");
    write_export(&json_path, &results, ExportFormat::Json).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(value[1]["patient_id"], 2);
}
