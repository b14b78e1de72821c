use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use icd_model::{ConfidenceBand, MapperConfig, MappingResult};
use icd_output::{ReviewItem, format_alternatives, review_queue};

use crate::commands::{CatalogOverview, InspectOutcome, MapOutcome};

pub fn print_map_summary(outcome: &MapOutcome) {
    let stats = &outcome.stats;
    println!("Input: {}", outcome.input.display());
    println!("Output: {} ({})", outcome.output.display(), outcome.format);
    if let Some(path) = &outcome.report {
        println!("Report: {}", path.display());
    }
    println!(
        "Mapped {} diagnoses for {} patients in {:.2}s",
        stats.total_mappings,
        stats.total_patients,
        outcome.run.elapsed.as_secs_f64()
    );

    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Patients"), Cell::new(stats.total_patients)]);
    table.add_row(vec![Cell::new("Diagnoses mapped"), Cell::new(stats.total_mappings)]);
    table.add_row(vec![
        Cell::new("Rows without diagnoses"),
        count_cell(outcome.run.ingest.empty_diagnoses, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Average confidence"),
        Cell::new(format!("{:.2}", stats.average_confidence)),
    ]);
    table.add_row(vec![
        Cell::new(format!(
            "At or above threshold ({:.2})",
            outcome.config.confidence_threshold
        )),
        Cell::new(stats.high_confidence_count).fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Needs review"),
        count_cell(stats.review_count(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Unknown"),
        count_cell(stats.unknown_mappings, Color::Red),
    ]);
    table.add_row(vec![Cell::new("Unique codes"), Cell::new(stats.unique_codes)]);
    for band in ConfidenceBand::ALL {
        table.add_row(vec![
            dim_cell(format!("  {} ({})", band.label(), band.range())),
            Cell::new(stats.band_count(band)).fg(band_color(band)),
        ]);
    }
    println!("{table}");

    if outcome.show_review > 0 {
        let queue = review_queue(&outcome.run.results, outcome.config.confidence_threshold);
        print_review_table(&queue, outcome.show_review);
    }
}

fn print_review_table(queue: &[ReviewItem<'_>], limit: usize) {
    if queue.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Patient"),
        header_cell("Diagnosis"),
        header_cell("Code"),
        header_cell("Description"),
        header_cell("Confidence"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for item in queue.iter().take(limit) {
        table.add_row(vec![
            Cell::new(item.patient_id),
            Cell::new(&item.mapping.original_diagnosis),
            code_cell(item.mapping),
            Cell::new(&item.mapping.description),
            confidence_cell(item.mapping.confidence),
        ]);
    }
    println!();
    if queue.len() > limit {
        println!("Needs review (showing {limit} of {}):", queue.len());
    } else {
        println!("Needs review:");
    }
    println!("{table}");
}

pub fn print_lookup(config: &MapperConfig, results: &[MappingResult]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Diagnosis"),
        header_cell("Code"),
        header_cell("Description"),
        header_cell("Confidence"),
        header_cell("Band"),
        header_cell("Alternatives"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for result in results {
        let alternatives = format_alternatives(&result.alternatives);
        table.add_row(vec![
            Cell::new(&result.original_diagnosis),
            code_cell(result),
            Cell::new(&result.description),
            confidence_cell(result.confidence),
            Cell::new(result.band()).fg(band_color(result.band())),
            if alternatives.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(alternatives.replace("; ", "\n"))
            },
        ]);
    }
    println!("{table}");

    for result in results {
        let flag = if result.needs_review(config.confidence_threshold) {
            " [review]"
        } else {
            ""
        };
        println!("- {}{flag}: {}", result.original_diagnosis, result.justification);
    }
}

pub fn print_catalog(overview: &CatalogOverview) {
    println!(
        "Catalog: {} ({} codes, {} pattern groups)",
        overview.stats.version, overview.stats.total_codes, overview.pattern_groups
    );
    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("Codes")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (category, count) in &overview.stats.categories {
        table.add_row(vec![Cell::new(category), Cell::new(count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(overview.stats.total_codes).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if !overview.unresolved.is_empty() {
        println!();
        println!("Pattern codes missing from the catalog (never suggested):");
        for (group, code) in &overview.unresolved {
            println!("- {group}: {code}");
        }
    }
}

pub fn print_inspect(outcome: &InspectOutcome) {
    let stats = &outcome.stats;
    println!("Input: {}", outcome.input.display());
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Rows"), Cell::new(stats.total_rows)]);
    table.add_row(vec![Cell::new("Rows with diagnoses"), Cell::new(stats.valid_rows)]);
    table.add_row(vec![Cell::new("Diagnoses"), Cell::new(stats.total_diagnoses)]);
    table.add_row(vec![
        Cell::new("Rows without diagnoses"),
        count_cell(stats.empty_diagnoses, Color::Yellow),
    ]);
    println!("{table}");

    if !outcome.samples.is_empty() {
        println!();
        println!("Sample diagnoses:");
        for sample in &outcome.samples {
            println!("- {sample}");
        }
    }
    if !stats.validation_errors.is_empty() {
        eprintln!();
        eprintln!("Validation issues:");
        for error in &stats.validation_errors {
            eprintln!("- {error}");
        }
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn code_cell(result: &MappingResult) -> Cell {
    if result.is_unknown() {
        Cell::new(&result.icd10_code).fg(Color::Red)
    } else {
        Cell::new(&result.icd10_code)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    }
}

fn confidence_cell(confidence: f64) -> Cell {
    Cell::new(format!("{confidence:.2}")).fg(band_color(ConfidenceBand::from_score(confidence)))
}

fn band_color(band: ConfidenceBand) -> Color {
    match band {
        ConfidenceBand::VeryHigh => Color::Green,
        ConfidenceBand::High => Color::DarkGreen,
        ConfidenceBand::Medium => Color::Yellow,
        ConfidenceBand::Low => Color::Red,
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
