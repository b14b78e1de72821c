#![deny(unsafe_code)]

//! Matching and ranking engine.
//!
//! A diagnosis string flows through [`normalize`], is scored independently
//! by the fuzzy and pattern matchers, merged by [`combine`], explained by
//! [`justify`], and assembled into a [`MappingResult`] by
//! [`DiagnosisMapper`].
//!
//! [`MappingResult`]: icd_model::MappingResult

pub mod combine;
pub mod engine;
pub mod fuzzy;
pub mod justify;
pub mod normalize;
pub mod pattern;
mod utils;

pub use combine::combine;
pub use engine::DiagnosisMapper;
pub use fuzzy::{fuzzy_match, token_sort_ratio};
pub use justify::justify;
pub use normalize::{normalize, strip_clinical_prefix};
pub use pattern::{keyword_confidence, matched_keywords, pattern_match};
