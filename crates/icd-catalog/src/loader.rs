//! Catalog enrichment from CSV files.
//!
//! An enrichment file adds codes to the built-in catalog. It is optional:
//! any failure to read it falls back to the built-in catalog with a logged
//! warning and is never surfaced to the caller.

use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use icd_model::CodeEntry;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::catalog::CodeCatalog;
use crate::error::{CatalogError, Result};
use crate::validate::is_valid_icd10_code;

#[derive(Debug, Deserialize)]
struct CatalogRow {
    code: String,
    description: String,
    #[serde(default)]
    category: String,
}

/// Reads catalog entries from a CSV with `code,description,category` headers.
///
/// Rows with a blank code or description, a malformed code, or a code seen
/// earlier in the file are skipped. A file without any usable row is an
/// error.
pub fn load_catalog_csv(path: &Path) -> Result<Vec<CodeEntry>> {
    let file = File::open(path).map_err(|e| CatalogError::io(path, e))?;
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(file);

    let mut seen = HashSet::new();
    let mut entries = Vec::new();
    for (idx, record) in reader.deserialize::<CatalogRow>().enumerate() {
        let line = idx + 2;
        let row = match record {
            Ok(row) => row,
            Err(error) if error.is_io_error() => return Err(CatalogError::csv(path, error)),
            Err(error) => {
                warn!(path = %path.display(), line, %error, "skipping unreadable catalog row");
                continue;
            }
        };
        if row.code.is_empty() || row.description.is_empty() {
            warn!(path = %path.display(), line, "skipping catalog row with blank fields");
            continue;
        }
        if !is_valid_icd10_code(&row.code) {
            warn!(path = %path.display(), line, code = %row.code, "skipping malformed code");
            continue;
        }
        if !seen.insert(row.code.clone()) {
            warn!(path = %path.display(), line, code = %row.code, "skipping duplicate code");
            continue;
        }
        let category = if row.category.is_empty() {
            "Uncategorized".to_string()
        } else {
            row.category
        };
        entries.push(CodeEntry::new(row.code, row.description, category));
    }

    if entries.is_empty() {
        return Err(CatalogError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(entries)
}

/// Builds the process catalog: built-in codes plus an optional enrichment
/// file.
///
/// Never fails. Enrichment problems are logged and the built-in catalog is
/// used as-is.
pub fn load_catalog_or_builtin(enrichment: Option<&Path>) -> CodeCatalog {
    let mut catalog = CodeCatalog::builtin();
    let Some(path) = enrichment else {
        debug!(codes = catalog.len(), "using built-in catalog");
        return catalog;
    };
    match load_catalog_csv(path) {
        Ok(entries) => {
            let offered = entries.len();
            let added = catalog.extend_with(entries);
            info!(
                path = %path.display(),
                offered,
                added,
                total = catalog.len(),
                "enriched catalog"
            );
        }
        Err(error) => {
            warn!(%error, "could not load enhanced catalog, using built-in codes");
        }
    }
    catalog
}
