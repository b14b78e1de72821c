use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use icd_catalog::{CatalogStatistics, load_catalog_or_builtin, unresolved_pattern_codes};
use icd_cli::config::Settings;
use icd_cli::logging::redact_value;
use icd_cli::pipeline::{MapRun, map_records};
use icd_cli::progress::patient_progress;
use icd_ingest::{IngestStats, load_diagnosis_csv, sample_diagnoses, validate_records};
use icd_map::DiagnosisMapper;
use icd_model::{MapperConfig, MappingResult};
use icd_output::{ExportFormat, MappingStatistics, write_export, write_report};
use tracing::{debug, info_span};

use crate::cli::{InspectArgs, LookupArgs, MapArgs};

/// Everything the summary printer needs after a `map` run.
pub struct MapOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub report: Option<PathBuf>,
    pub format: ExportFormat,
    pub config: MapperConfig,
    pub run: MapRun,
    pub stats: MappingStatistics,
    pub show_review: usize,
}

pub struct CatalogOverview {
    pub stats: CatalogStatistics,
    pub pattern_groups: usize,
    /// `(group, code)` pairs pointing at codes the catalog lacks.
    pub unresolved: Vec<(String, String)>,
}

pub struct InspectOutcome {
    pub input: PathBuf,
    pub stats: IngestStats,
    pub samples: Vec<String>,
}

pub fn run_map(args: &MapArgs, settings: &Settings) -> Result<MapOutcome> {
    let span = info_span!("map", input = %args.input.display());
    let _guard = span.enter();

    let config = settings.mapper_config(args.mapping.threshold, args.mapping.max_alternatives)?;
    let mapper = build_mapper(settings, args.catalog.catalog.as_deref());
    let records = load_diagnosis_csv(&args.input)
        .with_context(|| format!("load diagnoses from {}", args.input.display()))?;

    let show_progress = !args.no_progress && io::stderr().is_terminal();
    let progress = patient_progress(records.len() as u64, show_progress);
    let run = map_records(&mapper, &records, &config, &progress);

    let format = args
        .format
        .map(ExportFormat::from)
        .unwrap_or(settings.output.format);
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input, format));
    write_export(&output, &run.results, format)
        .with_context(|| format!("export results to {}", output.display()))?;
    if let Some(report) = &args.report {
        write_report(report, &run.results, config.confidence_threshold)
            .with_context(|| format!("write report to {}", report.display()))?;
    }

    let stats = MappingStatistics::compute(&run.results, config.confidence_threshold);
    Ok(MapOutcome {
        input: args.input.clone(),
        output,
        report: args.report.clone(),
        format,
        config,
        run,
        stats,
        show_review: args.show_review,
    })
}

pub fn run_lookup(args: &LookupArgs, settings: &Settings) -> Result<(MapperConfig, Vec<MappingResult>)> {
    let config = settings.mapper_config(args.mapping.threshold, args.mapping.max_alternatives)?;
    let mapper = build_mapper(settings, args.catalog.catalog.as_deref());
    for diagnosis in &args.diagnoses {
        debug!(diagnosis = redact_value(diagnosis), "lookup");
    }
    Ok((config, mapper.map_batch(&args.diagnoses, &config)))
}

pub fn run_catalog(catalog_path: Option<&Path>, settings: &Settings) -> CatalogOverview {
    let mapper = build_mapper(settings, catalog_path);
    CatalogOverview {
        stats: mapper.catalog().statistics(),
        pattern_groups: mapper.pattern_groups().len(),
        unresolved: unresolved_pattern_codes(mapper.pattern_groups(), mapper.catalog()),
    }
}

pub fn run_inspect(args: &InspectArgs) -> Result<InspectOutcome> {
    let records = load_diagnosis_csv(&args.input)
        .with_context(|| format!("load diagnoses from {}", args.input.display()))?;
    Ok(InspectOutcome {
        input: args.input.clone(),
        stats: validate_records(&records),
        samples: sample_diagnoses(&records, args.samples),
    })
}

fn build_mapper(settings: &Settings, cli_catalog: Option<&Path>) -> DiagnosisMapper {
    let catalog = load_catalog_or_builtin(settings.enrichment_path(cli_catalog));
    DiagnosisMapper::with_catalog(catalog)
}

/// `<dir>/<stem>_icd10.<ext>` beside the input file.
fn default_output_path(input: &Path, format: ExportFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("diagnoses");
    input.with_file_name(format!("{stem}_icd10.{}", format.extension()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_sits_next_to_input() {
        assert_eq!(
            default_output_path(Path::new("data/patients.csv"), ExportFormat::Json),
            PathBuf::from("data/patients_icd10.json")
        );
        assert_eq!(
            default_output_path(Path::new("patients.csv"), ExportFormat::Csv),
            PathBuf::from("patients_icd10.csv")
        );
    }

    #[test]
    fn builtin_catalog_overview_flags_missing_anxiety_code() {
        let overview = run_catalog(None, &Settings::default());
        assert_eq!(overview.stats.total_codes, 60);
        assert_eq!(overview.pattern_groups, 18);
        assert_eq!(
            overview.unresolved,
            vec![("anxiety".to_string(), "F41.9".to_string())]
        );
    }
}
