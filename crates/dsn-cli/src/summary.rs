use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dsn_dictionary::BuildReport;
use dsn_model::{DictionaryRow, FieldKey, ObligationLabel, UsageEntry};

use crate::commands::BuildResult;

pub fn print_summary(result: &BuildResult) {
    println!("Input: {}", result.input_dir.display());
    if result.dry_run {
        println!("Output: (dry run, nothing written)");
    } else {
        println!("Output: {}", result.output_dir.display());
        for path in &result.written {
            println!("  {}", path.display());
        }
    }
    println!("{}", report_table(&result.report));
    print_unresolved("Unknown data type", &result.report.unresolved_data_types);
    print_unresolved("Unknown block", &result.report.unresolved_blocks);
}

/// Counts of a build as a two-column table.
pub fn report_table(report: &BuildReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Item"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let rows = [
        ("Rubriques", report.fields),
        ("Dictionary rows", report.dictionary_rows),
        ("Data types", report.data_types),
        ("Blocks", report.blocks),
        ("Nomenclatures", report.nomenclatures),
        ("Nomenclature codes", report.nomenclature_rows),
        ("Usage entries", report.usage_entries),
        ("Declaration types", report.declaration_types),
        ("Obligatory", report.obligatory),
        ("Conditional", report.conditional),
        ("Without usage", report.without_usage.len()),
    ];
    for (label, count) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(count)]);
    }
    table.add_row(vec![
        Cell::new("Unresolved references"),
        count_cell(
            report.unresolved_data_types.len() + report.unresolved_blocks.len(),
            Color::Yellow,
        ),
    ]);
    table
}

/// One rubrique: its dictionary columns, then its obligation per declaration type.
pub fn rubrique_table<'a>(
    row: &DictionaryRow,
    usage: Option<&UsageEntry>,
    declaration_types: impl Iterator<Item = &'a str>,
) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Value")]);
    apply_table_style(&mut table);
    for (column, value) in dsn_model::DICTIONARY_COLUMNS.iter().zip(row.to_cells()) {
        let cell = if *column == "Obligatoire" {
            obligation_cell(row.obligation)
        } else {
            Cell::new(value)
        };
        table.add_row(vec![Cell::new(column), cell]);
    }
    if let Some(entry) = usage {
        for declaration in declaration_types {
            let code = entry.code_for(declaration).unwrap_or_default();
            let value = if code.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(code)
            };
            table.add_row(vec![dim_cell(declaration), value]);
        }
    }
    table
}

fn print_unresolved(label: &str, keys: &[FieldKey]) {
    if keys.is_empty() {
        return;
    }
    eprintln!("{label}:");
    for key in keys {
        eprintln!("- {key}");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn obligation_cell(label: ObligationLabel) -> Cell {
    match label {
        ObligationLabel::Oui => Cell::new(label.as_str())
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        ObligationLabel::Conditionnel => Cell::new(label.as_str()).fg(Color::Yellow),
        ObligationLabel::Non => dim_cell(label.as_str()),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(color)
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
