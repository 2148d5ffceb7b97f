use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use nid_model::{RegionCodeSet, Verdict, VerdictStyle};

pub fn print_verdict(candidate: &str, verdict: &Verdict) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID number"),
        header_cell("Result"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    table.add_row(vec![
        Cell::new(candidate),
        result_cell(verdict.style()),
        Cell::new(verdict.message()),
    ]);
    println!("{table}");
}

pub fn print_region_summary(path: &Path, regions: &RegionCodeSet) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Source"), header_cell("Codes"), header_cell("Range")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let range = match (regions.first(), regions.last()) {
        (Some(first), Some(last)) => Cell::new(format!("{first} .. {last}")),
        _ => dim_cell("-"),
    };
    table.add_row(vec![
        Cell::new(path.display()),
        Cell::new(regions.len()),
        range,
    ]);
    println!("{table}");
}

pub fn print_region_lookup(code: &str, present: bool) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Region code"), header_cell("Listed")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    let style = if present {
        VerdictStyle::Success
    } else {
        VerdictStyle::Failure
    };
    table.add_row(vec![Cell::new(code), result_cell(style)]);
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn result_cell(style: VerdictStyle) -> Cell {
    match style {
        VerdictStyle::Success => Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        VerdictStyle::Failure => Cell::new("✗")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
