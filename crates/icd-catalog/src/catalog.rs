//! The in-memory code catalog.

use std::collections::{BTreeMap, HashMap};

use icd_model::CodeEntry;
use serde::{Deserialize, Serialize};

use crate::builtin::{BUILTIN_VERSION, builtin_entries};
use crate::error::{CatalogError, Result};

/// Summary of catalog contents for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStatistics {
    pub total_codes: usize,
    /// Entry count per category, ordered by category name.
    pub categories: BTreeMap<String, usize>,
    pub version: String,
}

/// Insertion-ordered, code-unique set of reference entries.
///
/// Entries are never mutated or removed once the catalog is built. Order
/// matters: fuzzy matching breaks score ties by catalog position.
#[derive(Debug, Clone)]
pub struct CodeCatalog {
    entries: Vec<CodeEntry>,
    index: HashMap<String, usize>,
    version: String,
}

impl CodeCatalog {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        let entries = builtin_entries();
        let index = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (entry.code.clone(), idx))
            .collect();
        Self {
            entries,
            index,
            version: BUILTIN_VERSION.to_string(),
        }
    }

    /// Builds a catalog from explicit entries.
    ///
    /// Codes must be unique; the first duplicate found is reported.
    pub fn from_entries(entries: Vec<CodeEntry>, version: impl Into<String>) -> Result<Self> {
        if entries.is_empty() {
            return Err(CatalogError::NoEntries);
        }
        let mut index = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            if index.insert(entry.code.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateCode {
                    code: entry.code.clone(),
                });
            }
        }
        Ok(Self {
            entries,
            index,
            version: version.into(),
        })
    }

    /// Appends entries whose codes are not yet present and returns how many
    /// were added. Existing entries always win.
    pub fn extend_with(&mut self, entries: impl IntoIterator<Item = CodeEntry>) -> usize {
        let mut added = 0;
        for entry in entries {
            if self.index.contains_key(&entry.code) {
                continue;
            }
            self.index.insert(entry.code.clone(), self.entries.len());
            self.entries.push(entry);
            added += 1;
        }
        added
    }

    pub fn get(&self, code: &str) -> Option<&CodeEntry> {
        self.index.get(code).map(|&idx| &self.entries[idx])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    pub fn entries(&self) -> &[CodeEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CodeEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.category.as_str()) {
                seen.push(entry.category.as_str());
            }
        }
        seen
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn statistics(&self) -> CatalogStatistics {
        let mut categories = BTreeMap::new();
        for entry in &self.entries {
            *categories.entry(entry.category.clone()).or_insert(0) += 1;
        }
        CatalogStatistics {
            total_codes: self.entries.len(),
            categories,
            version: self.version.clone(),
        }
    }
}

impl Default for CodeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a CodeCatalog {
    type Item = &'a CodeEntry;
    type IntoIter = std::slice::Iter<'a, CodeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
