use serde::{Deserialize, Serialize};

/// A named cluster of keywords tied to a fixed set of catalog codes.
///
/// Keywords and codes live in one structure so the two can never drift
/// apart. Codes that are absent from the catalog are skipped at lookup
/// time rather than rejected here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternGroup {
    pub name: String,
    pub keywords: Vec<String>,
    pub associated_codes: Vec<String>,
}

impl PatternGroup {
    pub fn new(name: &str, keywords: &[&str], associated_codes: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            associated_codes: associated_codes.iter().map(|c| (*c).to_string()).collect(),
        }
    }

    /// Number of defining keywords, used as the denominator of the
    /// keyword-coverage score.
    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }
}
