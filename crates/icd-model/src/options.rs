//! Configuration options for diagnosis mapping.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.7;
pub const DEFAULT_MAX_ALTERNATIVES: usize = 3;

/// Per-call mapping options.
///
/// `confidence_threshold` is advisory: it is carried for the caller's own
/// triage (e.g. flagging mappings for manual review) and never filters or
/// alters the returned mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    pub confidence_threshold: f64,
    pub max_alternatives: usize,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            max_alternatives: DEFAULT_MAX_ALTERNATIVES,
        }
    }
}

impl MapperConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_max_alternatives(mut self, max_alternatives: usize) -> Self {
        self.max_alternatives = max_alternatives;
        self
    }

    /// Checks that the threshold is a finite value in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        let t = self.confidence_threshold;
        if !t.is_finite() || !(0.0..=1.0).contains(&t) {
            return Err(ModelError::InvalidThreshold(t));
        }
        Ok(())
    }
}
