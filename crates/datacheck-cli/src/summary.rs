use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use datacheck_cli::pipeline::ValidationResult;
use datacheck_model::ValidationOutcome;
use datacheck_validate::RuleResult;

pub fn print_summary(result: &ValidationResult) {
    println!("File: {}", result.file.path.display());
    println!("Cabinet: {}", result.file.cabinet);
    println!("Rows: {}  Columns: {}", result.rows, result.columns);
    println!("Report: {}", result.report_path.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Field"),
        header_cell("Rule"),
        header_cell("Parameter"),
        header_cell("Outcome"),
        header_cell("Details"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for (index, rule) in result.summary.results.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            field_cell(&rule.field),
            Cell::new(&rule.rule),
            parameter_cell(&rule.parameter),
            outcome_cell(&rule.outcome),
            details_cell(rule),
        ]);
    }
    let summary = &result.summary;
    table.add_row(vec![
        dim_cell("-"),
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} rules", summary.total())).add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(format!(
            "{} / {} / {}",
            summary.passed(),
            summary.failed(),
            summary.skipped()
        ))
        .add_attribute(Attribute::Bold),
        dim_cell("passed / failed / skipped"),
    ]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
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
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 6 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::LowerBoundary(Width::Fixed(12)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn outcome_cell(outcome: &ValidationOutcome) -> Cell {
    match outcome {
        ValidationOutcome::Pass => Cell::new("PASS")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        ValidationOutcome::Fail(_) => Cell::new("FAIL")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        ValidationOutcome::Skipped(_) => Cell::new("SKIPPED").fg(Color::Yellow),
    }
}

fn details_cell(rule: &RuleResult) -> Cell {
    match &rule.outcome {
        ValidationOutcome::Pass => dim_cell("-"),
        ValidationOutcome::Fail(details) => Cell::new(details).fg(Color::Red),
        ValidationOutcome::Skipped(reason) => Cell::new(reason).fg(Color::Yellow),
    }
}

fn field_cell(field: &str) -> Cell {
    if field.trim().is_empty() {
        dim_cell("(table)")
    } else {
        Cell::new(field)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    }
}

fn parameter_cell(parameter: &str) -> Cell {
    if parameter.trim().is_empty() {
        dim_cell("-")
    } else {
        Cell::new(parameter)
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
