//! Data model for diagnosis-to-code mapping.
//!
//! The types here are shared by the catalog, the matching engine, and the
//! ingestion and export layers that surround it.

pub mod candidate;
pub mod catalog;
pub mod confidence;
pub mod error;
pub mod mapping;
pub mod options;
pub mod pattern;

pub use candidate::{Candidate, MatchType};
pub use catalog::CodeEntry;
pub use confidence::ConfidenceBand;
pub use error::{ModelError, Result};
pub use mapping::{Alternative, MappingResult, PatientMappings, UNKNOWN_CODE};
pub use options::MapperConfig;
pub use pattern::PatternGroup;
