//! CSV and JSON export of patient mappings.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use icd_model::{Alternative, PatientMappings};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{OutputError, Result};

/// Column order of the CSV export.
pub const CSV_HEADERS: [&str; 7] = [
    "Patient_ID",
    "Original_Diagnosis",
    "ICD10_Code",
    "ICD10_Description",
    "Confidence_Score",
    "Justification",
    "Alternative_Codes",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    pub fn extension(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(OutputError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Flattens alternatives into one cell: `code: description (Score: 0.xx)`
/// entries joined by `"; "`. Empty when there are none.
pub fn format_alternatives(alternatives: &[Alternative]) -> String {
    alternatives
        .iter()
        .map(|alt| format!("{}: {} (Score: {:.2})", alt.code, alt.description, alt.confidence))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Writes one CSV row per mapping, patients in input order.
pub fn write_csv<W: Write>(results: &[PatientMappings], writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(CSV_HEADERS)?;
    for patient in results {
        let patient_id = patient.patient_id.to_string();
        for mapping in &patient.mappings {
            csv.write_record([
                patient_id.as_str(),
                mapping.original_diagnosis.as_str(),
                mapping.icd10_code.as_str(),
                mapping.description.as_str(),
                format_score(mapping.confidence).as_str(),
                mapping.justification.as_str(),
                format_alternatives(&mapping.alternatives).as_str(),
            ])?;
        }
    }
    csv.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn export_csv(results: &[PatientMappings]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(results, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Writes the nested per-patient structure as pretty-printed JSON.
pub fn write_json<W: Write>(results: &[PatientMappings], writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, results)?;
    Ok(())
}

pub fn export_json(results: &[PatientMappings]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

/// Writes `results` to `path` in the requested format.
pub fn write_export(path: &Path, results: &[PatientMappings], format: ExportFormat) -> Result<()> {
    let io_error = |source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    match format {
        ExportFormat::Csv => write_csv(results, &mut writer)?,
        ExportFormat::Json => write_json(results, &mut writer)?,
    }
    writer.flush().map_err(io_error)?;

    let mappings: usize = results.iter().map(|p| p.mappings.len()).sum();
    info!(path = %path.display(), %format, patients = results.len(), mappings, "wrote export");
    Ok(())
}

/// Whole numbers keep one decimal place so the column reads as a score.
fn format_score(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
