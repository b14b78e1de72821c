//! Plain-text mapping report.

use std::path::Path;

use chrono::{DateTime, Utc};
use icd_model::{ConfidenceBand, PatientMappings};
use tracing::info;

use crate::error::{OutputError, Result};
use crate::stats::MappingStatistics;

/// Renders the report stamped with the current time.
pub fn render_report(results: &[PatientMappings], confidence_threshold: f64) -> String {
    render_report_at(results, confidence_threshold, Utc::now())
}

/// Renders the report with an explicit generation time.
pub fn render_report_at(
    results: &[PatientMappings],
    confidence_threshold: f64,
    generated_at: DateTime<Utc>,
) -> String {
    if results.is_empty() {
        return "No mapping results to report.\n".to_string();
    }

    let stats = MappingStatistics::compute(results, confidence_threshold);
    let mut report = String::new();

    report.push_str("ICD-10 Mapping Report\n");
    report.push_str("=====================\n");
    report.push_str(&format!(
        "Generated: {}\n\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    report.push_str("Summary:\n");
    report.push_str(&format!("- Total Patients: {}\n", stats.total_patients));
    report.push_str(&format!("- Total Diagnoses Mapped: {}\n", stats.total_mappings));
    report.push_str(&format!(
        "- Average Confidence Score: {:.2}\n",
        stats.average_confidence
    ));
    report.push_str(&format!(
        "- High Confidence Mappings (>= {:.2}): {} ({:.1}%)\n",
        confidence_threshold,
        stats.high_confidence_count,
        stats.percent_of_total(stats.high_confidence_count)
    ));
    report.push_str(&format!(
        "- Needs Review (< {:.2}): {} ({:.1}%)\n",
        confidence_threshold,
        stats.review_count(),
        stats.percent_of_total(stats.review_count())
    ));
    report.push_str(&format!(
        "- Unknown Mappings: {} ({:.1}%)\n",
        stats.unknown_mappings,
        stats.percent_of_total(stats.unknown_mappings)
    ));
    report.push_str(&format!("- Unique ICD-10 Codes Used: {}\n\n", stats.unique_codes));

    report.push_str("Confidence Distribution:\n");
    for band in ConfidenceBand::ALL {
        report.push_str(&format!(
            "- {} ({}): {}\n",
            band.label(),
            band.range(),
            stats.band_count(band)
        ));
    }

    if !stats.top_codes.is_empty() {
        report.push_str("\nTop Codes:\n");
        for (code, count) in &stats.top_codes {
            report.push_str(&format!("- {code}: {count}\n"));
        }
    }

    report.push_str("\nDetailed Results:\n");
    for patient in results {
        report.push_str(&format!("\nPatient {}:\n", patient.patient_id));
        for mapping in &patient.mappings {
            report.push_str(&format!("  - {}\n", mapping.original_diagnosis));
            report.push_str(&format!(
                "    -> {}: {}\n",
                mapping.icd10_code, mapping.description
            ));
            report.push_str(&format!("    Confidence: {:.2}\n", mapping.confidence));
            if !mapping.alternatives.is_empty() {
                report.push_str(&format!(
                    "    Alternatives: {} found\n",
                    mapping.alternatives.len()
                ));
            }
        }
    }

    report
}

pub fn write_report(path: &Path, results: &[PatientMappings], confidence_threshold: f64) -> Result<()> {
    let report = render_report(results, confidence_threshold);
    std::fs::write(path, report).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "wrote mapping report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_results_have_placeholder_text() {
        assert_eq!(render_report(&[], 0.7), "No mapping results to report.\n");
    }

    #[test]
    fn patient_without_mappings_is_listed() {
        let results = vec![PatientMappings {
            patient_id: 7,
            original_diagnoses: Vec::new(),
            mappings: Vec::new(),
        }];
        let report = render_report(&results, 0.7);
        assert!(report.contains("- Total Patients: 1\n"));
        assert!(report.contains("- Total Diagnoses Mapped: 0\n"));
        assert!(report.contains("\nPatient 7:\n"));
        assert!(!report.contains("Top Codes"));
    }
}
