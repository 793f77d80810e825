use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use ocrmap_core::{AlignmentStats, ConfidenceLevel};
use ocrmap_model::MatchKind;

use crate::types::MapResult;

pub fn print_summary(result: &MapResult) {
    let stats = &result.stats;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![Cell::new("Documents"), Cell::new(stats.documents)]);
    table.add_row(vec![
        Cell::new("Weak document matches"),
        count_cell(stats.weak_documents, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Documents without OCR file"),
        count_cell(stats.unmatched_documents, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Mean document score"),
        score_cell(stats.mean_document_score()),
    ]);
    table.add_row(vec![
        Cell::new("Spans")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(stats.spans).add_attribute(Attribute::Bold),
    ]);
    for kind in [MatchKind::Exact, MatchKind::Approximate, MatchKind::Unmapped] {
        let color = match kind {
            MatchKind::Exact => Color::Green,
            MatchKind::Approximate => Color::Yellow,
            MatchKind::Unmapped => Color::Red,
        };
        table.add_row(vec![
            Cell::new(format!("  {}", kind.as_str())),
            count_cell(stats.kind_count(kind), color),
        ]);
    }
    add_level_rows(&mut table, stats);
    println!("{table}");
    println!("Done. Results saved to: {}", result.output.display());
}

fn add_level_rows(table: &mut Table, stats: &AlignmentStats) {
    for level in [ConfidenceLevel::High, ConfidenceLevel::Medium, ConfidenceLevel::Low] {
        table.add_row(vec![
            dim_cell(format!("  {}", level.description())),
            count_cell(stats.level_count(level), level_color(level)),
        ]);
    }
}

pub fn level_color(level: ConfidenceLevel) -> Color {
    match level {
        ConfidenceLevel::High => Color::Green,
        ConfidenceLevel::Medium => Color::Yellow,
        ConfidenceLevel::Low => Color::Red,
    }
}

pub fn kind_cell(kind: MatchKind) -> Cell {
    match kind {
        MatchKind::Exact => Cell::new("exact").fg(Color::Green),
        MatchKind::Approximate => Cell::new("approximate").fg(Color::Yellow),
        MatchKind::Unmapped => Cell::new("unmapped")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

pub fn score_cell(score: Option<f64>) -> Cell {
    match score {
        Some(value) => Cell::new(format!("{value:.3}")),
        None => dim_cell("-"),
    }
}

pub fn optional_cell<T: ToString>(value: Option<T>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

/// Index table: id, file, score, spans, preview.
pub fn apply_index_table_style(table: &mut Table) {
    apply_table_style(table);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(4)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::UpperBoundary(Width::Percentage(55)),
        ]);
    }
    align_column(table, 0, CellAlignment::Right);
    align_column(table, 2, CellAlignment::Right);
    align_column(table, 3, CellAlignment::Right);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
