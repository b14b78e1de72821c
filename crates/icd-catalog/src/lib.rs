#![deny(unsafe_code)]

//! Reference code catalog and keyword pattern groups.
//!
//! Both tables are built once at startup and are read-only afterwards, so
//! they can be shared freely across threads.

pub mod builtin;
pub mod catalog;
pub mod error;
pub mod loader;
pub mod patterns;
pub mod validate;

pub use catalog::{CatalogStatistics, CodeCatalog};
pub use error::{CatalogError, Result};
pub use loader::{load_catalog_csv, load_catalog_or_builtin};
pub use patterns::{builtin_pattern_groups, unresolved_pattern_codes};
pub use validate::is_valid_icd10_code;
