//! Confidence bands used for downstream triage.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse confidence categories for displaying and triaging mappings.
///
/// Bands never influence which code is chosen; they only describe the
/// score of a mapping that has already been produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBand {
    /// Below 0.5.
    Low,
    /// 0.5 up to 0.7.
    Medium,
    /// 0.7 up to 0.9.
    High,
    /// 0.9 and above.
    VeryHigh,
}

impl ConfidenceBand {
    pub const ALL: [ConfidenceBand; 4] = [Self::VeryHigh, Self::High, Self::Medium, Self::Low];

    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 0.9 {
            Self::VeryHigh
        } else if score >= 0.7 {
            Self::High
        } else if score >= 0.5 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryHigh => "Very High",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Score range covered by the band, for report legends.
    #[must_use]
    pub fn range(&self) -> &'static str {
        match self {
            Self::VeryHigh => ">=0.9",
            Self::High => "0.7-0.9",
            Self::Medium => "0.5-0.7",
            Self::Low => "<0.5",
        }
    }
}

impl fmt::Display for ConfidenceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_are_inclusive_below() {
        assert_eq!(ConfidenceBand::from_score(0.95), ConfidenceBand::VeryHigh);
        assert_eq!(ConfidenceBand::from_score(0.9), ConfidenceBand::VeryHigh);
        assert_eq!(ConfidenceBand::from_score(0.7), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::from_score(0.69), ConfidenceBand::Medium);
        assert_eq!(ConfidenceBand::from_score(0.5), ConfidenceBand::Medium);
        assert_eq!(ConfidenceBand::from_score(0.0), ConfidenceBand::Low);
    }

    #[test]
    fn bands_are_ordered() {
        assert!(ConfidenceBand::VeryHigh > ConfidenceBand::High);
        assert!(ConfidenceBand::Medium > ConfidenceBand::Low);
    }
}
