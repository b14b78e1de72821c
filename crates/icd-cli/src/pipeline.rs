//! Parallel mapping of loaded patient records.

use std::time::{Duration, Instant};

use icd_ingest::{DiagnosisRecord, IngestStats, parse_diagnoses, validate_records};
use icd_map::DiagnosisMapper;
use icd_model::{MapperConfig, PatientMappings};
use indicatif::ProgressBar;
use rayon::prelude::*;
use tracing::{info, info_span, trace, warn};

use crate::logging::redact_value;

/// Outcome of mapping a loaded diagnosis file.
#[derive(Debug)]
pub struct MapRun {
    pub results: Vec<PatientMappings>,
    pub ingest: IngestStats,
    pub elapsed: Duration,
}

impl MapRun {
    pub fn total_mappings(&self) -> usize {
        self.results.iter().map(|p| p.mappings.len()).sum()
    }
}

/// Maps every record in parallel, ticking `progress` once per patient.
///
/// Results keep record order. Rows without usable diagnoses produce a
/// patient entry with no mappings.
pub fn map_records(
    mapper: &DiagnosisMapper,
    records: &[DiagnosisRecord],
    config: &MapperConfig,
    progress: &ProgressBar,
) -> MapRun {
    let span = info_span!("map_records", patients = records.len());
    let _guard = span.enter();
    let started = Instant::now();

    let ingest = validate_records(records);
    if !ingest.is_clean() {
        warn!(
            rows = ingest.empty_diagnoses,
            "rows without usable diagnoses"
        );
    }
    info!(
        patients = ingest.total_rows,
        diagnoses = ingest.total_diagnoses,
        threshold = config.confidence_threshold,
        "mapping started"
    );

    let results: Vec<PatientMappings> = records
        .par_iter()
        .map(|record| {
            let diagnoses = parse_diagnoses(&record.diagnoses_list);
            let patient = mapper.map_patient(record.patient_id, diagnoses, config);
            for mapping in &patient.mappings {
                trace!(
                    patient_id = patient.patient_id,
                    diagnosis = redact_value(&mapping.original_diagnosis),
                    code = %mapping.icd10_code,
                    confidence = mapping.confidence,
                    "mapped diagnosis"
                );
            }
            progress.inc(1);
            patient
        })
        .collect();
    progress.finish_and_clear();

    let run = MapRun {
        results,
        ingest,
        elapsed: started.elapsed(),
    };
    info!(
        patients = run.results.len(),
        mappings = run.total_mappings(),
        elapsed_ms = run.elapsed.as_millis() as u64,
        "mapping finished"
    );
    run
}
