//! Diagnosis mapping orchestration.

use std::sync::Arc;

use icd_catalog::{CodeCatalog, builtin_pattern_groups};
use icd_model::{Alternative, Candidate, MapperConfig, MappingResult, PatientMappings, PatternGroup};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::combine::combine;
use crate::fuzzy::fuzzy_match;
use crate::justify::justify;
use crate::normalize::normalize;
use crate::pattern::pattern_match;

/// Maps free-text diagnoses to ranked catalog codes.
///
/// The catalog and pattern groups are immutable after construction and
/// shared behind `Arc`, so a mapper is cheap to clone and safe to use from
/// many threads at once.
#[derive(Debug, Clone)]
pub struct DiagnosisMapper {
    catalog: Arc<CodeCatalog>,
    pattern_groups: Arc<[PatternGroup]>,
}

impl Default for DiagnosisMapper {
    fn default() -> Self {
        Self::builtin()
    }
}

impl DiagnosisMapper {
    pub fn new(catalog: CodeCatalog, pattern_groups: Vec<PatternGroup>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            pattern_groups: pattern_groups.into(),
        }
    }

    /// Mapper over the built-in catalog and pattern groups.
    pub fn builtin() -> Self {
        Self::with_catalog(CodeCatalog::builtin())
    }

    /// Mapper over `catalog` with the built-in pattern groups.
    pub fn with_catalog(catalog: CodeCatalog) -> Self {
        Self::new(catalog, builtin_pattern_groups())
    }

    pub fn catalog(&self) -> &CodeCatalog {
        &self.catalog
    }

    pub fn pattern_groups(&self) -> &[PatternGroup] {
        &self.pattern_groups
    }

    /// Full ranked candidate list for `diagnosis`, best first.
    ///
    /// Both matchers read the same normalized text and share no state, so
    /// they run side by side.
    pub fn rank(&self, diagnosis: &str) -> Vec<Candidate> {
        let normalized = normalize(diagnosis);
        let (fuzzy, pattern) = rayon::join(
            || fuzzy_match(&normalized, &self.catalog),
            || pattern_match(&normalized, &self.pattern_groups, &self.catalog),
        );
        debug!(
            fuzzy = fuzzy.len(),
            pattern = pattern.len(),
            "scored diagnosis"
        );
        combine(fuzzy, pattern)
    }

    /// Maps one diagnosis.
    ///
    /// `confidence_threshold` is advisory and never changes the result. At
    /// most `max_alternatives` runner-ups are attached.
    pub fn map_diagnosis(
        &self,
        diagnosis: &str,
        confidence_threshold: f64,
        max_alternatives: usize,
    ) -> MappingResult {
        let mut ranked = self.rank(diagnosis).into_iter();
        let Some(best) = ranked.next() else {
            debug!("no candidates, reporting unknown code");
            return MappingResult::unknown(diagnosis);
        };

        trace!(
            code = %best.code,
            confidence = best.confidence,
            below_threshold = best.confidence < confidence_threshold,
            "selected best match"
        );

        let alternatives = ranked
            .take(max_alternatives)
            .map(|candidate| Alternative {
                code: candidate.code,
                description: candidate.description,
                confidence: candidate.confidence,
            })
            .collect();

        MappingResult {
            original_diagnosis: diagnosis.to_string(),
            justification: justify(diagnosis, &best),
            icd10_code: best.code,
            description: best.description,
            confidence: best.confidence,
            alternatives,
        }
    }

    pub fn map_with(&self, diagnosis: &str, config: &MapperConfig) -> MappingResult {
        self.map_diagnosis(
            diagnosis,
            config.confidence_threshold,
            config.max_alternatives,
        )
    }

    /// Maps every diagnosis in parallel. Output order follows input order.
    pub fn map_batch(&self, diagnoses: &[String], config: &MapperConfig) -> Vec<MappingResult> {
        diagnoses
            .par_iter()
            .map(|diagnosis| self.map_with(diagnosis, config))
            .collect()
    }

    /// Maps one patient's diagnosis list.
    pub fn map_patient(
        &self,
        patient_id: usize,
        diagnoses: Vec<String>,
        config: &MapperConfig,
    ) -> PatientMappings {
        let mappings = self.map_batch(&diagnoses, config);
        PatientMappings {
            patient_id,
            original_diagnoses: diagnoses,
            mappings,
        }
    }
}
