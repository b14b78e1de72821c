//! Aggregate statistics over a mapping run.

use std::collections::{BTreeMap, HashMap};

use icd_model::{ConfidenceBand, PatientMappings, UNKNOWN_CODE};
use serde::Serialize;

/// Number of most frequent codes kept in [`MappingStatistics::top_codes`].
pub const TOP_CODES_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappingStatistics {
    pub total_patients: usize,
    pub total_mappings: usize,
    /// Mean confidence over all mappings, `0.0` when there are none.
    pub average_confidence: f64,
    /// Threshold used for `high_confidence_count`.
    pub confidence_threshold: f64,
    /// Mappings at or above the threshold.
    pub high_confidence_count: usize,
    pub unknown_mappings: usize,
    /// Distinct codes assigned, excluding the unknown sentinel.
    pub unique_codes: usize,
    /// Mapping count per band; every band is present.
    pub confidence_distribution: BTreeMap<ConfidenceBand, usize>,
    /// Most frequent assigned codes, by count then code.
    pub top_codes: Vec<(String, usize)>,
}

impl MappingStatistics {
    pub fn compute(results: &[PatientMappings], confidence_threshold: f64) -> Self {
        let mut confidence_distribution: BTreeMap<ConfidenceBand, usize> =
            ConfidenceBand::ALL.iter().map(|band| (*band, 0)).collect();
        let mut code_counts: HashMap<&str, usize> = HashMap::new();
        let mut total_mappings = 0usize;
        let mut confidence_sum = 0.0;
        let mut high_confidence_count = 0usize;
        let mut unknown_mappings = 0usize;

        for mapping in results.iter().flat_map(|patient| &patient.mappings) {
            total_mappings += 1;
            confidence_sum += mapping.confidence;
            if mapping.confidence >= confidence_threshold {
                high_confidence_count += 1;
            }
            *confidence_distribution.entry(mapping.band()).or_default() += 1;
            if mapping.icd10_code == UNKNOWN_CODE {
                unknown_mappings += 1;
            } else {
                *code_counts.entry(mapping.icd10_code.as_str()).or_default() += 1;
            }
        }

        let unique_codes = code_counts.len();
        let mut top_codes: Vec<(String, usize)> = code_counts
            .into_iter()
            .map(|(code, count)| (code.to_string(), count))
            .collect();
        top_codes.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        top_codes.truncate(TOP_CODES_LIMIT);

        let average_confidence = if total_mappings == 0 {
            0.0
        } else {
            confidence_sum / total_mappings as f64
        };

        Self {
            total_patients: results.len(),
            total_mappings,
            average_confidence,
            confidence_threshold,
            high_confidence_count,
            unknown_mappings,
            unique_codes,
            confidence_distribution,
            top_codes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_mappings == 0
    }

    pub fn band_count(&self, band: ConfidenceBand) -> usize {
        self.confidence_distribution.get(&band).copied().unwrap_or(0)
    }

    /// Mappings below the threshold.
    pub fn review_count(&self) -> usize {
        self.total_mappings - self.high_confidence_count
    }

    /// Share of all mappings, in percent. `0.0` when there are none.
    pub fn percent_of_total(&self, count: usize) -> f64 {
        if self.total_mappings == 0 {
            0.0
        } else {
            count as f64 / self.total_mappings as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use icd_model::MappingResult;

    use super::*;

    fn mapping(code: &str, confidence: f64) -> MappingResult {
        if code == UNKNOWN_CODE {
            return MappingResult::unknown("nothing");
        }
        MappingResult {
            original_diagnosis: format!("dx {code}"),
            icd10_code: code.to_string(),
            description: String::new(),
            confidence,
            justification: String::new(),
            alternatives: Vec::new(),
        }
    }

    fn patient(patient_id: usize, mappings: Vec<MappingResult>) -> PatientMappings {
        PatientMappings {
            patient_id,
            original_diagnoses: mappings.iter().map(|m| m.original_diagnosis.clone()).collect(),
            mappings,
        }
    }

    #[test]
    fn counts_bands_codes_and_unknowns() {
        let results = vec![
            patient(1, vec![mapping("I10", 0.95), mapping("E11.65", 0.72)]),
            patient(2, vec![mapping("I10", 0.55), mapping(UNKNOWN_CODE, 0.0)]),
            patient(3, Vec::new()),
        ];
        let stats = MappingStatistics::compute(&results, 0.7);

        assert_eq!(stats.total_patients, 3);
        assert_eq!(stats.total_mappings, 4);
        assert!((stats.average_confidence - 0.555).abs() < 1e-9);
        assert_eq!(stats.high_confidence_count, 2);
        assert_eq!(stats.review_count(), 2);
        assert_eq!(stats.unknown_mappings, 1);
        assert_eq!(stats.unique_codes, 2);
        assert_eq!(stats.band_count(ConfidenceBand::VeryHigh), 1);
        assert_eq!(stats.band_count(ConfidenceBand::High), 1);
        assert_eq!(stats.band_count(ConfidenceBand::Medium), 1);
        assert_eq!(stats.band_count(ConfidenceBand::Low), 1);
        assert_eq!(
            stats.top_codes,
            vec![("I10".to_string(), 2), ("E11.65".to_string(), 1)]
        );
        assert!((stats.percent_of_total(stats.unknown_mappings) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn threshold_moves_high_confidence_count() {
        let results = vec![patient(1, vec![mapping("I10", 0.8), mapping("J45.9", 0.6)])];
        assert_eq!(MappingStatistics::compute(&results, 0.5).high_confidence_count, 2);
        assert_eq!(MappingStatistics::compute(&results, 0.9).high_confidence_count, 0);
    }

    #[test]
    fn empty_results() {
        let stats = MappingStatistics::compute(&[], 0.7);
        assert!(stats.is_empty());
        assert_eq!(stats.average_confidence, 0.0);
        assert_eq!(stats.percent_of_total(0), 0.0);
        assert_eq!(stats.confidence_distribution.len(), 4);
    }
}
