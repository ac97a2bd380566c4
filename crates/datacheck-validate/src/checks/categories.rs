//! Category membership.
//!
//! Allowed tokens are coerced to the column's element type before
//! comparing. Token kind is decided once for the whole list:
//! - any token with a `.` or an exponent (`1e3`) makes the list decimal
//! - otherwise a list of integers is integer
//! - anything else stays text
//!
//! Text columns always compare the trimmed token text. Nulls are never
//! violations.

use std::collections::HashSet;

use chrono::NaiveDateTime;

use datacheck_model::{
    CellKey, CellValue, Column, ColumnType, FailDetails, ValidationOutcome, parse_timestamp,
};
use datacheck_report::Style;

use super::{MAX_LISTED, invalid_parameter, split_list};
use crate::context::CheckContext;
use crate::guard::require_column;

/// Number of invalid values listed in the report.
const MAX_INVALID_LISTED: usize = 10;

/// How the allowed tokens read as a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Integer,
    Decimal,
    Text,
}

impl TokenKind {
    pub fn of(tokens: &[String]) -> Self {
        if tokens.iter().any(|token| looks_decimal(token)) {
            Self::Decimal
        } else if tokens.iter().all(|token| token.parse::<i64>().is_ok()) {
            Self::Integer
        } else {
            Self::Text
        }
    }
}

fn looks_decimal(token: &str) -> bool {
    token.contains('.') || (token.contains(['e', 'E']) && parse_finite(token).is_some())
}

fn parse_finite(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Allowed values converted to the column's element type.
#[derive(Debug, Clone, PartialEq)]
enum AllowedSet {
    Text(HashSet<String>),
    Integer(HashSet<i64>),
    Decimal(Vec<f64>),
    Timestamp(HashSet<NaiveDateTime>),
}

impl AllowedSet {
    fn coerce(tokens: &[String], column_type: ColumnType) -> Result<Self, String> {
        match column_type {
            ColumnType::Text | ColumnType::Unknown => Ok(Self::Text(tokens.iter().cloned().collect())),
            ColumnType::Integer => match TokenKind::of(tokens) {
                TokenKind::Integer => convert(tokens, |t| t.parse::<i64>().ok()).map(Self::Integer),
                TokenKind::Decimal => convert(tokens, parse_finite).map(Self::Decimal),
                TokenKind::Text => Err(first_failure(tokens, |t| t.parse::<i64>().is_ok())),
            },
            ColumnType::Decimal => convert(tokens, parse_finite).map(Self::Decimal),
            ColumnType::Timestamp => convert(tokens, parse_timestamp).map(Self::Timestamp),
        }
    }

    fn contains(&self, cell: CellValue<'_>) -> bool {
        match (self, cell) {
            (_, CellValue::Null) => true,
            (Self::Text(set), CellValue::Text(value)) => set.contains(value),
            (Self::Integer(set), CellValue::Integer(value)) => set.contains(&value),
            (Self::Decimal(values), CellValue::Integer(value)) => values.contains(&(value as f64)),
            (Self::Decimal(values), CellValue::Decimal(value)) => values.contains(&value),
            (Self::Timestamp(set), CellValue::Timestamp(value)) => set.contains(&value),
            _ => false,
        }
    }
}

/// Convert every token, reporting the first one that fails.
fn convert<T, C>(tokens: &[String], parse: impl Fn(&str) -> Option<T>) -> Result<C, String>
where
    C: FromIterator<T>,
{
    tokens
        .iter()
        .map(|token| parse(token.as_str()).ok_or_else(|| token.clone()))
        .collect()
}

fn first_failure(tokens: &[String], ok: impl Fn(&str) -> bool) -> String {
    tokens
        .iter()
        .find(|token| !ok(token.as_str()))
        .cloned()
        .unwrap_or_default()
}

/// Result of comparing a column against the allowed categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCheck {
    /// Non-null cells outside the allowed set.
    pub invalid_occurrences: usize,
    /// Distinct invalid values, in order of first occurrence.
    pub invalid: Vec<String>,
    /// Distinct non-null values, in order of first occurrence.
    pub observed: Vec<String>,
}

/// Token that could not be converted to the column type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoercionFailure {
    pub token: String,
    pub column_type: ColumnType,
}

/// Compare every non-null cell of `column` with the allowed tokens.
pub fn evaluate(column: &Column, tokens: &[String]) -> Result<CategoryCheck, CoercionFailure> {
    let allowed = AllowedSet::coerce(tokens, column.column_type()).map_err(|token| {
        CoercionFailure {
            token,
            column_type: column.column_type(),
        }
    })?;

    let mut observed_keys: HashSet<CellKey> = HashSet::new();
    let mut invalid_keys: HashSet<CellKey> = HashSet::new();
    let mut check = CategoryCheck {
        invalid_occurrences: 0,
        invalid: Vec::new(),
        observed: Vec::new(),
    };
    for cell in column.iter().filter(|cell| !cell.is_null()) {
        let key = cell.key();
        if observed_keys.insert(key.clone()) {
            check.observed.push(cell.to_string());
        }
        if !allowed.contains(cell) {
            check.invalid_occurrences += 1;
            if invalid_keys.insert(key) {
                check.invalid.push(cell.to_string());
            }
        }
    }
    Ok(check)
}

/// Every non-null value belongs to the comma-separated allowed list.
pub fn in_categories(ctx: &mut CheckContext<'_>, field: &str, parameter: &str) -> ValidationOutcome {
    ctx.report.add_heading(format!("Categories: {field}"));
    let column = match require_column(ctx.table, field, ctx.report) {
        Ok(column) => column,
        Err(skipped) => return skipped,
    };
    let tokens = split_list(parameter);
    if tokens.is_empty() {
        return invalid_parameter(ctx.report, parameter, "no categories given");
    }

    let allowed_text = tokens.join(", ");
    let check = match evaluate(column, &tokens) {
        Ok(check) => check,
        Err(failure) => {
            ctx.report.add_sentence(
                format!(
                    "The categories [{allowed_text}] cannot be converted to the type of column '{field}' ({}): '{}' is not valid.",
                    failure.column_type, failure.token
                ),
                Style::Highlight,
            );
            tracing::info!(column = field, token = %failure.token, "category coercion failed");
            return ValidationOutcome::Fail(FailDetails::Rejected);
        }
    };

    ctx.report
        .add_sentence(format!("Allowed categories: {allowed_text}"), Style::Normal);
    if check.invalid.is_empty() {
        ctx.report.add_sentence(
            format!("All values in column '{field}' belong to the allowed categories."),
            Style::Success,
        );
        return ValidationOutcome::Pass;
    }

    ctx.report.add_sentence(
        format!(
            "{} values in column '{field}' are outside the allowed categories ({} distinct).",
            check.invalid_occurrences,
            check.invalid.len()
        ),
        Style::Highlight,
    );
    ctx.report.add_sentence(
        format!("Invalid values (first {MAX_INVALID_LISTED}):"),
        Style::Normal,
    );
    ctx.report
        .add_list(check.invalid.iter().take(MAX_INVALID_LISTED).cloned());
    ctx.report
        .add_sentence(format!("Observed values (first {MAX_LISTED}):"), Style::Normal);
    ctx.report
        .add_list(check.observed.iter().take(MAX_LISTED).cloned());
    tracing::info!(column = field, count = check.invalid_occurrences, "values outside categories");
    ValidationOutcome::Fail(FailDetails::Values(check.invalid))
}
