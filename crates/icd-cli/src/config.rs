//! TOML settings file.
//!
//! ```toml
//! [mapping]
//! confidence_threshold = 0.8
//! max_alternatives = 5
//!
//! [catalog]
//! enrichment = "data/icd10_extra.csv"
//!
//! [output]
//! format = "json"
//! ```
//!
//! Every section and key is optional. Command-line flags override file
//! values.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use icd_model::MapperConfig;
use icd_output::ExportFormat;
use serde::{Deserialize, Serialize};

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "icd-mapper.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub mapping: MapperConfig,
    pub catalog: CatalogSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogSettings {
    /// Optional CSV adding codes to the built-in catalog.
    pub enrichment: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    pub format: ExportFormat,
}

impl Settings {
    /// Parses settings from TOML text and validates them.
    pub fn from_toml(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content).context("parse settings")?;
        settings
            .mapping
            .validate()
            .context("invalid [mapping] settings")?;
        Ok(settings)
    }

    /// Mapping options with command-line overrides applied.
    pub fn mapper_config(
        &self,
        threshold: Option<f64>,
        max_alternatives: Option<usize>,
    ) -> Result<MapperConfig> {
        let mut config = self.mapping;
        if let Some(threshold) = threshold {
            config = config.with_threshold(threshold);
        }
        if let Some(max_alternatives) = max_alternatives {
            config = config.with_max_alternatives(max_alternatives);
        }
        config.validate().context("invalid mapping options")?;
        Ok(config)
    }

    /// Enrichment catalog path, the command-line value taking precedence.
    pub fn enrichment_path<'a>(&'a self, cli_path: Option<&'a Path>) -> Option<&'a Path> {
        cli_path.or(self.catalog.enrichment.as_deref())
    }
}

/// Loads settings.
///
/// With an explicit `path` the file must exist and parse. Without one,
/// [`DEFAULT_CONFIG_FILE`] is used when present and defaults otherwise.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => read_settings(path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                read_settings(default_path)
            } else {
                tracing::debug!("no settings file found, using defaults");
                Ok(Settings::default())
            }
        }
    }
}

fn read_settings(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read settings file {}", path.display()))?;
    let settings = Settings::from_toml(&content)
        .with_context(|| format!("load settings file {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded settings");
    Ok(settings)
}
