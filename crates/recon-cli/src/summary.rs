use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::MergeReport;

pub fn print_summary(report: &MergeReport) {
    println!("Merged output: {}", report.out.display());
    if let Some(path) = &report.unmatched_out {
        println!("Unmatched output: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Records")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![
        Cell::new("Authoritative input"),
        Cell::new(report.authoritative_count),
    ]);
    table.add_row(vec![
        Cell::new("Harvested input"),
        Cell::new(report.harvested_count),
    ]);
    table.add_row(vec![
        Cell::new("Conference table"),
        Cell::new(report.conference_count),
    ]);
    table.add_row(vec![
        Cell::new("Matched (shared conferences)"),
        Cell::new(report.matched_shared).fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Unmatched (shared conferences)"),
        Cell::new(report.unmatched_shared).fg(if report.unmatched_shared > 0 {
            Color::Yellow
        } else {
            Color::Green
        }),
    ]);
    table.add_row(vec![
        Cell::new("Merged output").add_attribute(Attribute::Bold),
        Cell::new(report.merged_count).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Unmatched output"),
        Cell::new(report.unmatched_count),
    ]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
