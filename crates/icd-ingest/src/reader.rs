//! Diagnosis CSV reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{IngestError, Result};

/// Column holding each patient's diagnoses.
pub const DIAGNOSES_COLUMN: &str = "Diagnoses_list";

/// One patient row with a non-empty diagnoses cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosisRecord {
    /// 1-based position among the kept rows.
    pub patient_id: usize,
    /// The raw cell, unparsed.
    pub diagnoses_list: String,
}

/// Loads patient rows from a CSV file.
///
/// Rows whose diagnoses cell is empty or whitespace are dropped before
/// patient IDs are assigned.
pub fn load_diagnosis_csv(path: &Path) -> Result<Vec<DiagnosisRecord>> {
    let file = File::open(path).map_err(|e| IngestError::open(path, e))?;
    let records = read_diagnosis_records(file, path)?;
    info!(path = %path.display(), rows = records.len(), "loaded diagnosis file");
    Ok(records)
}

/// Reads patient rows from any CSV source. `path` is only used in errors
/// and log fields.
pub fn read_diagnosis_records<R: Read>(source: R, path: &Path) -> Result<Vec<DiagnosisRecord>> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(source);

    let headers = reader.headers().map_err(|e| csv_error(path, e))?;
    let column = headers
        .iter()
        .position(|name| name.trim_start_matches('\u{feff}').trim() == DIAGNOSES_COLUMN)
        .ok_or_else(|| IngestError::MissingColumn {
            column: DIAGNOSES_COLUMN,
            path: path.to_path_buf(),
        })?;

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(path, e))?;
        match record.get(column).map(str::trim) {
            Some(cell) if !cell.is_empty() => records.push(DiagnosisRecord {
                patient_id: records.len() + 1,
                diagnoses_list: cell.to_string(),
            }),
            _ => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(path = %path.display(), dropped, "dropped rows with empty diagnoses");
    }
    Ok(records)
}

fn csv_error(path: &Path, source: csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(contents: &str) -> Result<Vec<DiagnosisRecord>> {
        read_diagnosis_records(contents.as_bytes(), Path::new("inline.csv"))
    }

    #[test]
    fn assigns_ids_after_dropping_empty_rows() {
        let records = read(
            "Patient,Diagnoses_list\n\
             a,\"['Hypertension', 'Asthma']\"\n\
             b,\n\
             c,   \n\
             d,COPD\n",
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].patient_id, 1);
        assert_eq!(records[1].patient_id, 2);
        assert_eq!(records[1].diagnoses_list, "COPD");
    }

    #[test]
    fn short_rows_count_as_empty() {
        let records = read("Patient,Diagnoses_list\na\nb,asthma\n").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].diagnoses_list, "asthma");
    }

    #[test]
    fn header_with_bom_is_recognized() {
        let records = read("\u{feff}Diagnoses_list\nasthma\n").unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn missing_column_is_an_error() {
        let err = read("Patient,Diagnosis\na,asthma\n").unwrap_err();
        assert!(matches!(
            err,
            IngestError::MissingColumn {
                column: DIAGNOSES_COLUMN,
                ..
            }
        ));
    }
}
