//! Input validation statistics.

use serde::Serialize;

use crate::parse::parse_diagnoses;
use crate::reader::DiagnosisRecord;

/// Summary of a loaded diagnosis file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestStats {
    pub total_rows: usize,
    /// Rows yielding at least one diagnosis.
    pub valid_rows: usize,
    pub total_diagnoses: usize,
    /// Rows whose cell parsed to nothing usable.
    pub empty_diagnoses: usize,
    pub validation_errors: Vec<String>,
}

impl IngestStats {
    pub fn is_clean(&self) -> bool {
        self.validation_errors.is_empty()
    }
}

/// Parses every record and tallies the outcome.
pub fn validate_records(records: &[DiagnosisRecord]) -> IngestStats {
    let mut stats = IngestStats {
        total_rows: records.len(),
        ..IngestStats::default()
    };
    for record in records {
        let diagnoses = parse_diagnoses(&record.diagnoses_list);
        if diagnoses.is_empty() {
            stats.empty_diagnoses += 1;
            stats
                .validation_errors
                .push(format!("Row {}: No valid diagnoses found", record.patient_id));
        } else {
            stats.valid_rows += 1;
            stats.total_diagnoses += diagnoses.len();
        }
    }
    stats
}

/// Up to `limit` diagnoses for preview, at most two per row, drawn from the
/// first `limit` rows.
pub fn sample_diagnoses(records: &[DiagnosisRecord], limit: usize) -> Vec<String> {
    records
        .iter()
        .take(limit)
        .flat_map(|record| parse_diagnoses(&record.diagnoses_list).into_iter().take(2))
        .take(limit)
        .collect()
}
