//! Table rendering with `comfy-table`.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use qtc_model::{Assessment, FlagSeverity, NarrowFormula, WideFormula};

use crate::render::{format_ms, format_rr, formula_rows};

/// Render an assessment as a sequence of tables separated by blank lines.
pub fn assessment_tables(assessment: &Assessment) -> String {
    let result = &assessment.result;
    let mut sections = vec![format!("Mode: {}", result.mode())];

    let mut inputs = Table::new();
    inputs.set_header(vec![header_cell("Measurement"), header_cell("Value")]);
    apply_table_style(&mut inputs);
    align_column(&mut inputs, 1, CellAlignment::Right);
    inputs.add_row(vec![
        Cell::new("Heart rate"),
        Cell::new(format!("{} bpm", result.heart_rate)),
    ]);
    inputs.add_row(vec![Cell::new("QT interval"), Cell::new(format_ms(result.qt_interval))]);
    if let (Some(qrs), Some(sex)) = (result.qrs_duration(), result.sex()) {
        inputs.add_row(vec![Cell::new("QRS duration"), Cell::new(format_ms(qrs))]);
        inputs.add_row(vec![Cell::new("Sex"), Cell::new(sex)]);
    }
    inputs.add_row(vec![
        Cell::new("RR interval"),
        Cell::new(format_rr(result.rr_interval_seconds)),
    ]);
    sections.push(inputs.to_string());

    let max = result.max_qtc();
    let mut formulas = Table::new();
    formulas.set_header(vec![
        header_cell("Formula"),
        header_cell("Value"),
        header_cell("Kind"),
    ]);
    apply_table_style(&mut formulas);
    align_column(&mut formulas, 1, CellAlignment::Right);
    align_column(&mut formulas, 2, CellAlignment::Center);
    for row in formula_rows(result) {
        if row.is_qtc {
            let value = Cell::new(format_ms(row.value));
            // Bold marks the value that sets the tier.
            let value = if Some(row.value) == max {
                value.add_attribute(Attribute::Bold)
            } else {
                value
            };
            formulas.add_row(vec![Cell::new(row.name), value, Cell::new(row.kind())]);
        } else {
            formulas.add_row(vec![
                dim_cell(row.name),
                dim_cell(format_ms(row.value)),
                dim_cell(row.kind()),
            ]);
        }
    }
    sections.push(formulas.to_string());

    let mut interpretation = assessment.interpretation.summary.clone();
    for note in &assessment.interpretation.notes {
        interpretation.push_str("\n  - ");
        interpretation.push_str(note);
    }
    sections.push(interpretation);

    let mut flags = Table::new();
    flags.set_header(vec![header_cell("Severity"), header_cell("Message")]);
    apply_table_style(&mut flags);
    align_column(&mut flags, 0, CellAlignment::Center);
    for flag in &assessment.flags {
        flags.add_row(vec![severity_cell(flag.severity), Cell::new(&flag.message)]);
    }
    sections.push(format!("Flags:\n{flags}"));

    let mut out = sections.join("\n\n");
    out.push('\n');
    out
}

/// Every supported formula with its expression and reference.
pub fn formula_catalogue() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Mode"),
        header_cell("Formula"),
        header_cell("Expression"),
        header_cell("Reference"),
    ]);
    apply_table_style(&mut table);
    for formula in NarrowFormula::ALL {
        table.add_row(vec![
            Cell::new("narrow"),
            Cell::new(formula.name()),
            Cell::new(formula.expression()),
            dim_cell(formula.reference()),
        ]);
    }
    for formula in WideFormula::ALL {
        table.add_row(vec![
            Cell::new("wide"),
            Cell::new(formula.name()),
            Cell::new(formula.expression()),
            dim_cell(formula.reference()),
        ]);
    }
    table
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

fn severity_cell(severity: FlagSeverity) -> Cell {
    match severity {
        FlagSeverity::Danger => Cell::new("DANGER")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        FlagSeverity::Warning => Cell::new("WARN").fg(Color::Yellow),
        FlagSeverity::Info => Cell::new("INFO").fg(Color::Cyan),
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
