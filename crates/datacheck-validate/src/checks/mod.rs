//! Validator implementations.
//!
//! Each check appends its own report sections and returns a
//! [`ValidationOutcome`]. Fatal declaration problems come back as
//! [`ValidationError`](crate::ValidationError).

pub mod categories;
pub mod drift;
pub mod ids;
pub mod range;
pub mod schema;
pub mod table;
pub mod values;

use datacheck_model::{SkipReason, ValidationOutcome};
use datacheck_report::{Report, Style};

use crate::context::CheckContext;
use crate::error::{Result, ValidationError};
use crate::registry::Validator;

/// Maximum number of offending rows or values listed in a report section.
pub const MAX_LISTED: usize = 15;

/// Run one validator against the context.
pub fn invoke(
    validator: Validator,
    ctx: &mut CheckContext<'_>,
    field: &str,
    parameter: &str,
) -> Result<ValidationOutcome> {
    match validator {
        Validator::DescribeFile => Ok(table::describe_file(ctx)),
        Validator::FilenamePattern => Ok(table::filename_pattern(ctx, parameter)),
        Validator::NoDuplicateRows => Ok(table::no_duplicate_rows(ctx)),
        Validator::NoEmptyRows => Ok(table::no_empty_rows(ctx)),
        Validator::ColumnNames => Ok(schema::column_names(ctx, parameter)),
        Validator::ColumnType => schema::column_type(ctx, field, parameter),
        Validator::NoFakeIds => ids::no_fake_ids(ctx, field),
        Validator::NoNullValues => Ok(values::no_null_values(ctx, field)),
        Validator::AtLeast => range::check_bound(ctx, field, parameter, range::Bound::AtLeast),
        Validator::AtMost => range::check_bound(ctx, field, parameter, range::Bound::AtMost),
        Validator::NoRepeatedValues => Ok(values::no_repeated_values(ctx, field)),
        Validator::InCategories => Ok(categories::in_categories(ctx, field, parameter)),
        Validator::DescribeIds => Ok(ids::describe_ids(ctx, field)),
        Validator::RowCountDrift => Ok(drift::row_count_drift(ctx)),
        Validator::DateFrom
        | Validator::DateUntil
        | Validator::AllowedNulls
        | Validator::NoSpecialCharacters
        | Validator::ValidCommune => Err(ValidationError::NotImplemented {
            rule: validator.name(),
        }),
    }
}

/// Strip whitespace and one pair of surrounding double quotes.
pub(crate) fn clean_parameter(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(trimmed)
        .trim()
}

/// Comma-separated parameter list, blanks dropped.
pub(crate) fn split_list(raw: &str) -> Vec<String> {
    clean_parameter(raw)
        .split(',')
        .map(|token| clean_parameter(token).to_string())
        .filter(|token| !token.is_empty())
        .collect()
}

/// List the first `limit` items, noting how many were left out.
pub(crate) fn add_preview(report: &mut Report, items: &[String], limit: usize) {
    report.add_list(items.iter().take(limit).cloned());
    if items.len() > limit {
        report.add_sentence(
            format!("... and {} more not shown.", items.len() - limit),
            Style::Normal,
        );
    }
}

pub(crate) fn invalid_parameter(
    report: &mut Report,
    parameter: &str,
    reason: impl Into<String>,
) -> ValidationOutcome {
    let reason = reason.into();
    report.add_sentence(
        format!("Invalid parameter '{parameter}': {reason}."),
        Style::Highlight,
    );
    tracing::warn!(parameter, reason = %reason, "invalid rule parameter");
    ValidationOutcome::Skipped(SkipReason::InvalidParameter {
        parameter: parameter.to_string(),
        reason,
    })
}

/// 1-based row numbers for display.
pub(crate) fn row_labels(rows: &[usize]) -> Vec<String> {
    rows.iter().map(|row| format!("Row {row}")).collect()
}
