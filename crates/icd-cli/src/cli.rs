//! CLI argument definitions for the ICD-10 mapper.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use icd_output::ExportFormat;

#[derive(Parser)]
#[command(
    name = "icd-mapper",
    version,
    about = "Map free-text diagnoses to ICD-10-CM codes",
    long_about = "Map free-text clinical diagnoses to ranked ICD-10-CM codes.\n\n\
                  Combines fuzzy description matching with keyword pattern rules and\n\
                  explains every suggestion. Confidence thresholds only flag mappings\n\
                  for review; they never change the suggested code."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow diagnosis text in log output (redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Settings file (default: ./icd-mapper.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Map every patient in a diagnosis CSV and export the results.
    Map(MapArgs),

    /// Map diagnoses given on the command line.
    Lookup(LookupArgs),

    /// Show catalog contents and pattern coverage.
    Catalog(CatalogArgs),

    /// Validate a diagnosis CSV without mapping it.
    Inspect(InspectArgs),
}

#[derive(Args)]
pub struct MappingArgs {
    /// Confidence below which mappings are flagged for review (0-1).
    #[arg(long = "threshold", value_name = "F")]
    pub threshold: Option<f64>,

    /// Maximum number of alternative codes per diagnosis.
    #[arg(long = "max-alternatives", value_name = "N")]
    pub max_alternatives: Option<usize>,
}

#[derive(Args)]
pub struct CatalogArgs {
    /// CSV of extra codes (code,description,category) added to the built-in catalog.
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: Option<PathBuf>,
}

#[derive(Parser)]
pub struct MapArgs {
    /// CSV file with a Diagnoses_list column.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Export path (default: <CSV stem>_icd10.<format> next to the input).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Export format.
    #[arg(long = "format", value_enum)]
    pub format: Option<ExportFormatArg>,

    /// Also write a plain-text report.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Number of review rows to print (0 hides the review table).
    #[arg(long = "show-review", value_name = "N", default_value_t = 20)]
    pub show_review: usize,

    /// Hide the progress bar.
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    #[command(flatten)]
    pub mapping: MappingArgs,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

#[derive(Parser)]
pub struct LookupArgs {
    /// Diagnosis strings to map.
    #[arg(value_name = "DIAGNOSIS", required = true)]
    pub diagnoses: Vec<String>,

    #[command(flatten)]
    pub mapping: MappingArgs,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// CSV file with a Diagnoses_list column.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Number of sample diagnoses to show.
    #[arg(long = "samples", value_name = "N", default_value_t = 5)]
    pub samples: usize,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Csv,
    Json,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(arg: ExportFormatArg) -> Self {
        match arg {
            ExportFormatArg::Csv => ExportFormat::Csv,
            ExportFormatArg::Json => ExportFormat::Json,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn map_flags_parse() {
        let cli = Cli::try_parse_from([
            "icd-mapper",
            "--log-data",
            "map",
            "patients.csv",
            "--format",
            "json",
            "--threshold",
            "0.8",
            "--catalog",
            "extra.csv",
        ])
        .unwrap();
        assert!(cli.log_data);
        let Command::Map(args) = cli.command else {
            panic!("expected map command");
        };
        assert_eq!(args.input, PathBuf::from("patients.csv"));
        assert!(matches!(args.format, Some(ExportFormatArg::Json)));
        assert_eq!(args.mapping.threshold, Some(0.8));
        assert_eq!(args.mapping.max_alternatives, None);
        assert_eq!(args.catalog.catalog, Some(PathBuf::from("extra.csv")));
    }

    #[test]
    fn lookup_requires_a_diagnosis() {
        assert!(Cli::try_parse_from(["icd-mapper", "lookup"]).is_err());
        let cli = Cli::try_parse_from(["icd-mapper", "lookup", "HTN", "Type 2 DM"]).unwrap();
        let Command::Lookup(args) = cli.command else {
            panic!("expected lookup command");
        };
        assert_eq!(args.diagnoses, vec!["HTN", "Type 2 DM"]);
    }
}
