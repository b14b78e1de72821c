//! Output generation for diagnosis mappings.
//!
//! - **CSV**: one row per mapped diagnosis, alternatives flattened into a
//!   single cell
//! - **JSON**: the nested per-patient structure, pretty-printed
//! - **Report**: plain-text summary with statistics and per-patient detail
//! - **Review queue**: mappings that fall below a confidence threshold

mod error;
mod export;
mod report;
mod review;
mod stats;

pub use error::{OutputError, Result};
pub use export::{
    CSV_HEADERS, ExportFormat, export_csv, export_json, format_alternatives, write_csv,
    write_export, write_json,
};
pub use report::{render_report, render_report_at, write_report};
pub use review::{ReviewItem, review_queue};
pub use stats::{MappingStatistics, TOP_CODES_LIMIT};
