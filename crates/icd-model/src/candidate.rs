//! Scored, provenance-tagged candidates produced by the matchers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::CodeEntry;

/// Which matcher produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Token-sort string similarity against the catalog description.
    Fuzzy,
    /// Keyword pattern group hit.
    Pattern,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fuzzy => "fuzzy",
            Self::Pattern => "pattern",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A potential mapping for one diagnosis string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub code: String,
    pub description: String,
    pub category: String,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
    pub match_type: MatchType,
    /// Keywords that triggered a pattern match. `None` for fuzzy candidates.
    pub matched_keywords: Option<Vec<String>>,
}

impl Candidate {
    pub fn fuzzy(entry: &CodeEntry, confidence: f64) -> Self {
        Self {
            code: entry.code.clone(),
            description: entry.description.clone(),
            category: entry.category.clone(),
            confidence,
            match_type: MatchType::Fuzzy,
            matched_keywords: None,
        }
    }

    pub fn pattern(entry: &CodeEntry, confidence: f64, matched_keywords: Vec<String>) -> Self {
        Self {
            code: entry.code.clone(),
            description: entry.description.clone(),
            category: entry.category.clone(),
            confidence,
            match_type: MatchType::Pattern,
            matched_keywords: Some(matched_keywords),
        }
    }

    /// Matched keywords, empty for fuzzy candidates.
    pub fn keywords(&self) -> &[String] {
        self.matched_keywords.as_deref().unwrap_or(&[])
    }
}
