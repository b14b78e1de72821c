//! Integration tests for the mapping pipeline and settings loading.

use std::fs;

use icd_cli::config::load_settings;
use icd_cli::pipeline::map_records;
use icd_cli::progress::patient_progress;
use icd_ingest::DiagnosisRecord;
use icd_map::DiagnosisMapper;
use icd_model::{MapperConfig, UNKNOWN_CODE};
use icd_output::ExportFormat;
use tempfile::TempDir;

fn record(patient_id: usize, cell: &str) -> DiagnosisRecord {
    DiagnosisRecord {
        patient_id,
        diagnoses_list: cell.to_string(),
    }
}

#[test]
fn maps_records_in_order() {
    let mapper = DiagnosisMapper::builtin();
    let records = vec![
        record(1, "['Type 2 DM with hyperglycemia', 'HTN']"),
        record(2, "n/a"),
        record(3, "xqzv flmr; asthma"),
    ];
    let progress = patient_progress(records.len() as u64, false);

    let run = map_records(&mapper, &records, &MapperConfig::default(), &progress);

    assert_eq!(progress.position(), 3);
    let ids: Vec<_> = run.results.iter().map(|p| p.patient_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(run.results[0].mappings[0].icd10_code, "E11.65");
    assert!(run.results[1].mappings.is_empty());
    assert_eq!(run.results[2].mappings[0].icd10_code, UNKNOWN_CODE);
    assert_eq!(run.results[2].mappings[1].icd10_code, "J45.9");
    assert_eq!(run.total_mappings(), 4);
    assert_eq!(run.ingest.empty_diagnoses, 1);
}

#[test]
fn explicit_settings_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("icd-mapper.toml");
    fs::write(
        &path,
        "[mapping]\nconfidence_threshold = 0.85\n\n[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let settings = load_settings(Some(&path)).unwrap();
    assert!((settings.mapping.confidence_threshold - 0.85).abs() < 1e-9);
    assert_eq!(settings.mapping.max_alternatives, 3);
    assert_eq!(settings.output.format, ExportFormat::Json);
}

#[test]
fn missing_explicit_settings_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = load_settings(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(format!("{err:#}").contains("absent.toml"));
}
