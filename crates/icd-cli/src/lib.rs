//! Library components of the `icd-mapper` command-line tool.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod progress;
