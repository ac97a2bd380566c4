//! Column set and column type checks.

use datacheck_model::{ColumnType, FailDetails, ValidationOutcome};
use datacheck_report::{Report, Style};

use super::{invalid_parameter, split_list};
use crate::context::CheckContext;
use crate::error::{Result, ValidationError};
use crate::guard::require_column;

/// Expected vs. actual column names, split into three disjoint sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSetComparison {
    pub present: Vec<String>,
    pub missing: Vec<String>,
    pub unexpected: Vec<String>,
}

impl ColumnSetComparison {
    pub fn compare(expected: &[String], actual: &[&str]) -> Self {
        let mut comparison = Self::default();
        for name in expected {
            if actual.contains(&name.as_str()) {
                comparison.present.push(name.clone());
            } else {
                comparison.missing.push(name.clone());
            }
        }
        comparison.unexpected = actual
            .iter()
            .filter(|name| !expected.iter().any(|e| e == *name))
            .map(|name| (*name).to_string())
            .collect();
        comparison
    }
}

/// Informational comparison of expected column names with the file.
pub fn column_names(ctx: &mut CheckContext<'_>, parameter: &str) -> ValidationOutcome {
    ctx.report.add_heading("Column names");
    let expected = split_list(parameter);
    if expected.is_empty() {
        return invalid_parameter(ctx.report, parameter, "no expected column names given");
    }

    let comparison = ColumnSetComparison::compare(&expected, &ctx.table.column_names());
    add_names(ctx.report, "Expected columns present", &comparison.present, Style::Success);
    add_names(ctx.report, "Expected columns missing", &comparison.missing, Style::Highlight);
    add_names(ctx.report, "Columns not expected", &comparison.unexpected, Style::Highlight);
    if !comparison.missing.is_empty() {
        tracing::info!(missing = comparison.missing.len(), "expected columns missing");
    }
    ValidationOutcome::Pass
}

fn add_names(report: &mut Report, label: &str, names: &[String], style: Style) {
    if names.is_empty() {
        report.add_sentence(format!("{label}: none."), Style::Normal);
        return;
    }
    report.add_sentence(format!("{label} ({}):", names.len()), style);
    report.add_list(names.iter().cloned());
}

/// The column's inferred type equals the expected type.
///
/// The type token is checked before the column, so a misspelled token is
/// fatal even when the column is also missing.
pub fn column_type(
    ctx: &mut CheckContext<'_>,
    field: &str,
    parameter: &str,
) -> Result<ValidationOutcome> {
    let Some(expected) = ColumnType::parse_expected(parameter) else {
        return Err(ValidationError::UnknownColumnType {
            column: field.to_string(),
            token: parameter.trim().to_string(),
        });
    };

    ctx.report.add_heading(format!("Column type: {field}"));
    let column = match require_column(ctx.table, field, ctx.report) {
        Ok(column) => column,
        Err(skipped) => return Ok(skipped),
    };

    let actual = column.column_type();
    if actual == expected {
        ctx.report.add_sentence(
            format!("Column '{field}' has the expected type ({expected})."),
            Style::Success,
        );
        Ok(ValidationOutcome::Pass)
    } else {
        ctx.report.add_sentence(
            format!("Column '{field}' is {actual}, expected {expected}."),
            Style::Highlight,
        );
        tracing::info!(column = field, %actual, %expected, "column type mismatch");
        Ok(ValidationOutcome::Fail(FailDetails::Rejected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Fixture;
    use datacheck_model::{Column, SkipReason, Table};

    fn table() -> Table {
        Table::new(vec![
            Column::integer("RUT", vec![Some(1)]),
            Column::text("COMUNA", vec![Some("Talca")]),
            Column::decimal("MONTO", vec![Some(1.5)]),
        ])
        .unwrap()
    }

    #[test]
    fn compare_splits_three_sets() {
        let expected = vec!["RUT".to_string(), "NOMBRE".to_string()];
        let comparison = ColumnSetComparison::compare(&expected, &["RUT", "COMUNA"]);
        assert_eq!(comparison.present, vec!["RUT"]);
        assert_eq!(comparison.missing, vec!["NOMBRE"]);
        assert_eq!(comparison.unexpected, vec!["COMUNA"]);
    }

    #[test]
    fn column_names_is_informational() {
        let mut fixture = Fixture::new(table());
        let outcome = column_names(&mut fixture.ctx(), "RUT, NOMBRE");
        assert_eq!(outcome, ValidationOutcome::Pass);
        assert!(fixture.report.mentions("Expected columns missing (1):"));
        assert!(fixture.report.mentions("Columns not expected (2):"));
    }

    #[test]
    fn column_type_match_and_mismatch() {
        let mut fixture = Fixture::new(table());
        assert_eq!(
            column_type(&mut fixture.ctx(), "RUT", "entero").unwrap(),
            ValidationOutcome::Pass
        );
        assert_eq!(
            column_type(&mut fixture.ctx(), "MONTO", "integer").unwrap(),
            ValidationOutcome::Fail(FailDetails::Rejected)
        );
        assert!(fixture.report.mentions("Column 'MONTO' is decimal, expected integer."));
    }

    #[test]
    fn unknown_type_token_is_fatal_before_guard() {
        let mut fixture = Fixture::new(table());
        let result = column_type(&mut fixture.ctx(), "ABSENT", "boolean");
        assert_eq!(
            result,
            Err(ValidationError::UnknownColumnType {
                column: "ABSENT".to_string(),
                token: "boolean".to_string(),
            })
        );
    }

    #[test]
    fn missing_column_is_skipped() {
        let mut fixture = Fixture::new(table());
        let outcome = column_type(&mut fixture.ctx(), "ABSENT", "text").unwrap();
        assert!(matches!(
            outcome,
            ValidationOutcome::Skipped(SkipReason::MissingColumn { .. })
        ));
    }
}
