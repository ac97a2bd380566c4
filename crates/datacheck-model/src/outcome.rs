//! Validation outcomes.
//!
//! Expected failure modes (missing column, bad parameter, unknown rule) are
//! values of [`ValidationOutcome`], never errors, so a run always continues
//! past them.

use std::fmt;

/// Result of invoking one validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Check passed, or the validator is purely informational.
    Pass,
    /// Data-quality finding.
    Fail(FailDetails),
    /// Check could not be evaluated.
    Skipped(SkipReason),
}

impl ValidationOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }

    /// Short status label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail(_) => "FAIL",
            Self::Skipped(_) => "SKIPPED",
        }
    }

    /// Offending rows of a failure, if the failure is row based.
    pub fn failed_rows(&self) -> Option<&[usize]> {
        match self {
            Self::Fail(FailDetails::Rows(rows)) => Some(rows),
            _ => None,
        }
    }

    /// Offending values of a failure, if the failure is value based.
    pub fn failed_values(&self) -> Option<&[String]> {
        match self {
            Self::Fail(FailDetails::Values(values)) => Some(values),
            _ => None,
        }
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => f.write_str("passed"),
            Self::Fail(details) => write!(f, "failed ({details})"),
            Self::Skipped(reason) => write!(f, "skipped ({reason})"),
        }
    }
}

/// Payload of a failed check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailDetails {
    /// The check failed as a whole.
    Rejected,
    /// 1-based data row numbers.
    Rows(Vec<usize>),
    /// Offending values, formatted for display.
    Values(Vec<String>),
}

impl FailDetails {
    /// Number of offending rows or values (1 for a whole-check rejection).
    pub fn count(&self) -> usize {
        match self {
            Self::Rejected => 1,
            Self::Rows(rows) => rows.len(),
            Self::Values(values) => values.len(),
        }
    }
}

impl fmt::Display for FailDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected => f.write_str("rejected"),
            Self::Rows(rows) => write!(f, "{} rows", rows.len()),
            Self::Values(values) => write!(f, "{} values", values.len()),
        }
    }
}

/// Why a check was not evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Rule names a column absent from the table.
    MissingColumn { column: String, similar: Vec<String> },
    /// No validator is registered under this name.
    UnknownRule { name: String },
    /// Parameter text could not be interpreted.
    InvalidParameter { parameter: String, reason: String },
    /// Prior file for a comparison was not supplied or could not be loaded.
    ComparisonUnavailable { reason: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumn { column, .. } => write!(f, "column '{column}' not found"),
            Self::UnknownRule { name } => write!(f, "unknown rule '{name}'"),
            Self::InvalidParameter { parameter, reason } => {
                write!(f, "invalid parameter '{parameter}': {reason}")
            }
            Self::ComparisonUnavailable { reason } => write!(f, "comparison unavailable: {reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_rows_only_for_row_failures() {
        let outcome = ValidationOutcome::Fail(FailDetails::Rows(vec![2, 4]));
        assert_eq!(outcome.failed_rows(), Some(&[2, 4][..]));
        assert_eq!(outcome.failed_values(), None);
        assert_eq!(outcome.label(), "FAIL");
        assert_eq!(outcome.to_string(), "failed (2 rows)");
    }

    #[test]
    fn skip_reason_display() {
        let reason = SkipReason::MissingColumn {
            column: "RUT".to_string(),
            similar: vec!["rut_cliente".to_string()],
        };
        assert_eq!(reason.to_string(), "column 'RUT' not found");
    }
}
