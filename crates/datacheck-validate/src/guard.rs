//! Column existence guard.

use datacheck_model::{Column, SkipReason, Table, ValidationOutcome};
use datacheck_report::{Report, Style};

/// Resolve `name` to a column, or report it missing with similar names.
///
/// Every column-level validator calls this before touching the column.
pub fn require_column<'t>(
    table: &'t Table,
    name: &str,
    report: &mut Report,
) -> Result<&'t Column, ValidationOutcome> {
    if let Some(column) = table.column(name) {
        return Ok(column);
    }

    report.add_sentence(
        format!("Column '{name}' was not found in the file."),
        Style::Highlight,
    );
    let similar: Vec<String> = table
        .similar_columns(name)
        .into_iter()
        .map(str::to_string)
        .collect();
    if similar.is_empty() {
        report.add_sentence("No similar columns were found.", Style::Normal);
    } else {
        report.add_sentence("Similar columns:", Style::Normal);
        report.add_list(similar.iter().cloned());
    }
    tracing::warn!(column = name, similar = similar.len(), "column not found");

    Err(ValidationOutcome::Skipped(SkipReason::MissingColumn {
        column: name.to_string(),
        similar,
    }))
}
