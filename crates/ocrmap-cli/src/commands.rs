use anyhow::{Context, Result};
use comfy_table::{Cell, Color, Table};
use tracing::{debug, info_span};

use ocrmap_cli::pipeline::{align_inputs, load_inputs, select_document};
use ocrmap_cli::settings::resolve_config;
use ocrmap_core::{AlignConfig, Aligner, AlignmentStats};
use ocrmap_model::AlignedRecord;
use ocrmap_output::{document_header, highlight_spans, preview_line, write_jsonl};

use crate::cli::{InputArgs, MapArgs, ShowArgs};
use crate::summary::{
    apply_index_table_style, apply_table_style, dim_cell, header_cell, kind_cell, level_color,
    optional_cell, score_cell,
};
use crate::types::MapResult;

fn config_for(input: &InputArgs) -> Result<AlignConfig> {
    resolve_config(input.config.as_deref(), &input.overrides())
}

pub fn run_map(args: &MapArgs) -> Result<MapResult> {
    let span = info_span!("map", output = %args.output.display());
    let _guard = span.enter();

    let config = config_for(&args.input)?;
    let thresholds = config.confidence;
    let inputs = load_inputs(&args.input.annotations, &args.input.ocr_dir)?;
    let records = align_inputs(&inputs, config, args.input.jobs)?;
    write_jsonl(&args.output, &records)
        .with_context(|| format!("write results to {}", args.output.display()))?;

    Ok(MapResult {
        output: args.output.clone(),
        stats: AlignmentStats::from_records(&records, &thresholds),
    })
}

pub fn run_list(args: &InputArgs) -> Result<()> {
    let config = config_for(args)?;
    let inputs = load_inputs(&args.annotations, &args.ocr_dir)?;
    let records = align_inputs(&inputs, config, args.jobs)?;

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("OCR file"),
        header_cell("Score"),
        header_cell("Spans"),
        header_cell("Preview"),
    ]);
    apply_index_table_style(&mut table);
    for (idx, record) in records.iter().enumerate() {
        table.add_row(vec![
            Cell::new(idx + 1),
            file_cell(record),
            score_cell(Some(record.match_score)),
            Cell::new(format!(
                "{}/{}",
                record.mapped_span_count(),
                record.spans.len()
            )),
            Cell::new(preview_line(record)),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let config = config_for(&args.input)?;
    let inputs = load_inputs(&args.input.annotations, &args.input.ocr_dir)?;
    let document = select_document(&inputs, args.id)?;

    let aligner = Aligner::new(config, &inputs.corpus);
    let record = aligner.align(document);
    debug!(
        id = args.id,
        matched_file = record.matched_file.as_deref().unwrap_or("-"),
        "document aligned"
    );

    println!("{}", document_header(args.id, &record));
    println!();
    println!("{}", span_table(&record, aligner.config()));

    let ocr_text = record
        .matched_file
        .as_deref()
        .and_then(|file| aligner.corpus().normalized(file));
    if let Some(text) = ocr_text {
        println!();
        println!("OCR text:");
        println!("{}", highlight_spans(text, &record.spans));
    }
    Ok(())
}

fn span_table(record: &AlignedRecord, config: &AlignConfig) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Labels"),
        header_cell("Span text"),
        header_cell("Mapped text"),
        header_cell("Score"),
        header_cell("Start"),
        header_cell("End"),
        header_cell("Kind"),
        header_cell("Confidence"),
    ]);
    apply_table_style(&mut table);
    for span in &record.spans {
        let labels: Vec<&str> = span.labels.iter().map(String::as_str).collect();
        let confidence = if span.is_mapped() {
            config.confidence.categorize(span.mapped_score)
        } else {
            None
        };
        let confidence_cell = match confidence {
            Some(level) => Cell::new(level.as_str()).fg(level_color(level)),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(labels.join(", ")),
            Cell::new(&span.span_text),
            optional_cell(span.mapped_text.as_deref()),
            score_cell(Some(span.mapped_score)),
            optional_cell(span.mapped_start),
            optional_cell(span.mapped_end),
            kind_cell(span.match_kind),
            confidence_cell,
        ]);
    }
    table
}

fn file_cell(record: &AlignedRecord) -> Cell {
    match &record.matched_file {
        Some(file) if record.weak_match => Cell::new(format!("{file} (weak)")).fg(Color::Yellow),
        Some(file) => Cell::new(file),
        None => dim_cell("-"),
    }
}
