use serde::{Deserialize, Serialize};

/// A single reference code with its description and clinical category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodeEntry {
    /// Diagnosis code (e.g. "E11.65"). Unique within a catalog.
    pub code: String,
    /// Official description text.
    pub description: String,
    /// Broad clinical category (e.g. "Endocrine").
    pub category: String,
}

impl CodeEntry {
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            category: category.into(),
        }
    }
}
