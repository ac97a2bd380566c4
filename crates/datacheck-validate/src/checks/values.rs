//! Null and repeated value checks.

use std::collections::HashSet;

use datacheck_model::{Column, FailDetails, ValidationOutcome};
use datacheck_report::Style;

use super::{MAX_LISTED, add_preview, row_labels};
use crate::context::CheckContext;
use crate::guard::require_column;

/// Column has no null cells. The null count is always reported.
pub fn no_null_values(ctx: &mut CheckContext<'_>, field: &str) -> ValidationOutcome {
    ctx.report.add_heading(format!("Null values: {field}"));
    let column = match require_column(ctx.table, field, ctx.report) {
        Ok(column) => column,
        Err(skipped) => return skipped,
    };

    let nulls: Vec<usize> = column
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_null())
        .map(|(row, _)| row + 1)
        .collect();
    let style = if nulls.is_empty() {
        Style::Success
    } else {
        Style::Highlight
    };
    ctx.report.add_sentence(
        format!("Null values in column '{field}': {}", nulls.len()),
        style,
    );
    if nulls.is_empty() {
        return ValidationOutcome::Pass;
    }

    add_preview(ctx.report, &row_labels(&nulls), MAX_LISTED);
    tracing::info!(column = field, count = nulls.len(), "null values");
    ValidationOutcome::Fail(FailDetails::Rows(nulls))
}

/// Distinct non-null values that occur more than once, in order of their
/// first repetition.
pub fn repeated_values(column: &Column) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut repeated = Vec::new();
    for cell in column.iter().filter(|cell| !cell.is_null()) {
        let key = cell.key();
        if !seen.insert(key.clone()) && reported.insert(key) {
            repeated.push(cell.to_string());
        }
    }
    repeated
}

/// No non-null value appears twice in the column.
pub fn no_repeated_values(ctx: &mut CheckContext<'_>, field: &str) -> ValidationOutcome {
    ctx.report.add_heading(format!("Repeated values: {field}"));
    let column = match require_column(ctx.table, field, ctx.report) {
        Ok(column) => column,
        Err(skipped) => return skipped,
    };

    let repeated = repeated_values(column);
    if repeated.is_empty() {
        ctx.report.add_sentence(
            format!("Column '{field}' has no repeated values."),
            Style::Success,
        );
        return ValidationOutcome::Pass;
    }

    let occurrences = column
        .iter()
        .filter(|cell| !cell.is_null())
        .count()
        - distinct_count(column);
    ctx.report.add_sentence(
        format!(
            "{} distinct values are repeated in column '{field}' ({occurrences} extra occurrences).",
            repeated.len()
        ),
        Style::Highlight,
    );
    add_preview(ctx.report, &repeated, MAX_LISTED);
    tracing::info!(column = field, count = repeated.len(), "repeated values");
    ValidationOutcome::Fail(FailDetails::Values(repeated))
}

fn distinct_count(column: &Column) -> usize {
    column
        .iter()
        .filter(|cell| !cell.is_null())
        .map(|cell| cell.key())
        .collect::<HashSet<_>>()
        .len()
}
