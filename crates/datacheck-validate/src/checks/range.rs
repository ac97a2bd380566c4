//! Threshold checks over numeric columns.

use datacheck_model::{ColumnData, FailDetails, ValidationOutcome, format_numeric};
use datacheck_report::Style;

use super::{MAX_LISTED, add_preview, clean_parameter, invalid_parameter};
use crate::context::CheckContext;
use crate::error::{Result, ValidationError};
use crate::guard::require_column;

/// Direction of a threshold check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Every value >= threshold.
    AtLeast,
    /// Every value <= threshold.
    AtMost,
}

impl Bound {
    const fn rule(self) -> &'static str {
        match self {
            Self::AtLeast => "at_least",
            Self::AtMost => "at_most",
        }
    }

    fn violates(self, value: f64, threshold: f64) -> bool {
        match self {
            Self::AtLeast => value < threshold,
            Self::AtMost => value > threshold,
        }
    }

    const fn heading(self) -> &'static str {
        match self {
            Self::AtLeast => "Minimum value",
            Self::AtMost => "Maximum value",
        }
    }

    const fn relation(self) -> &'static str {
        match self {
            Self::AtLeast => "below",
            Self::AtMost => "above",
        }
    }
}

/// Parse a threshold parameter as a finite float.
pub fn parse_threshold(parameter: &str) -> Option<f64> {
    clean_parameter(parameter)
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Every non-null value respects the bound.
///
/// Offending values are returned in row order, repeats included.
pub fn check_bound(
    ctx: &mut CheckContext<'_>,
    field: &str,
    parameter: &str,
    bound: Bound,
) -> Result<ValidationOutcome> {
    ctx.report
        .add_heading(format!("{}: {field} ({})", bound.heading(), clean_parameter(parameter)));
    let column = match require_column(ctx.table, field, ctx.report) {
        Ok(column) => column,
        Err(skipped) => return Ok(skipped),
    };

    let data = column.data();
    if !matches!(
        data,
        ColumnData::Integer(_) | ColumnData::Decimal(_) | ColumnData::Unknown(_)
    ) {
        return Err(ValidationError::ColumnTypeMismatch {
            rule: bound.rule(),
            column: field.to_string(),
            expected: "numeric",
            found: column.column_type(),
        });
    }

    let Some(threshold) = parse_threshold(parameter) else {
        return Ok(invalid_parameter(
            ctx.report,
            parameter,
            "the threshold is not a number",
        ));
    };

    let offending: Vec<String> = (0..data.len())
        .filter(|&row| {
            data.numeric(row)
                .is_some_and(|value| bound.violates(value, threshold))
        })
        .map(|row| data.get(row).to_string())
        .collect();

    let shown = format_numeric(threshold);
    if offending.is_empty() {
        ctx.report.add_sentence(
            format!("No values in column '{field}' are {} {shown}.", bound.relation()),
            Style::Success,
        );
        return Ok(ValidationOutcome::Pass);
    }

    ctx.report.add_sentence(
        format!(
            "{} values in column '{field}' are {} {shown}.",
            offending.len(),
            bound.relation()
        ),
        Style::Highlight,
    );
    add_preview(ctx.report, &offending, MAX_LISTED);
    tracing::info!(column = field, count = offending.len(), threshold, "values out of range");
    Ok(ValidationOutcome::Fail(FailDetails::Values(offending)))
}
