//! Diagnosis input ingestion.
//!
//! Reads patient rows from a CSV with a `Diagnoses_list` column and turns
//! each cell into a clean list of diagnosis strings ready for mapping.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use icd_ingest::{load_diagnosis_csv, parse_diagnoses, validate_records};
//!
//! let records = load_diagnosis_csv(Path::new("patients.csv"))?;
//! let stats = validate_records(&records);
//! for record in &records {
//!     let diagnoses = parse_diagnoses(&record.diagnoses_list);
//! }
//! ```

mod error;
mod parse;
mod reader;
mod stats;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{DIAGNOSES_COLUMN, DiagnosisRecord, load_diagnosis_csv, read_diagnosis_records};

// === Cell Parsing ===
pub use parse::{NON_DIAGNOSES, clean_diagnosis, parse_diagnoses};

// === Validation ===
pub use stats::{IngestStats, sample_diagnoses, validate_records};
