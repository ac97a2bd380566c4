//! Identifier checks: known test ids and identifier description.

use std::collections::BTreeSet;

use datacheck_model::{
    CellValue, Column, ColumnData, FailDetails, ValidationOutcome, format_thousands,
};
use datacheck_report::Style;

use super::{MAX_LISTED, add_preview};
use crate::context::CheckContext;
use crate::error::{Result, ValidationError};
use crate::guard::require_column;

/// Identifiers at or above this value belong to organizations.
pub const JURIDICAL_THRESHOLD: i64 = 50_000_000;

/// Lower bound (inclusive) of the highlighted identifier band.
pub const BAND_START: i64 = 30_000_000;

/// Upper bound (exclusive) of the highlighted identifier band.
pub const BAND_END: i64 = 40_000_000;

/// The column contains no identifier from the known test set.
///
/// Requires an integer column; anything else aborts the run.
pub fn no_fake_ids(ctx: &mut CheckContext<'_>, field: &str) -> Result<ValidationOutcome> {
    ctx.report.add_heading(format!("Known test identifiers: {field}"));
    let column = match require_column(ctx.table, field, ctx.report) {
        Ok(column) => column,
        Err(skipped) => return Ok(skipped),
    };

    let values: &[Option<i64>] = match column.data() {
        ColumnData::Integer(values) => values.as_slice(),
        ColumnData::Unknown(_) => &[],
        _ => {
            return Err(ValidationError::ColumnTypeMismatch {
                rule: "no_fake_ids",
                column: field.to_string(),
                expected: "integer",
                found: column.column_type(),
            });
        }
    };

    let mut occurrences = 0usize;
    let mut found = BTreeSet::new();
    for id in values.iter().flatten().copied() {
        if ctx.reference_ids.contains(id) {
            occurrences += 1;
            found.insert(id);
        }
    }

    if found.is_empty() {
        ctx.report.add_sentence(
            format!("No known test identifiers were found in column '{field}'."),
            Style::Success,
        );
        return Ok(ValidationOutcome::Pass);
    }

    let found: Vec<String> = found.iter().map(ToString::to_string).collect();
    ctx.report.add_sentence(
        format!(
            "{occurrences} occurrences of known test identifiers were found in column '{field}' ({} distinct).",
            found.len()
        ),
        Style::Highlight,
    );
    ctx.report.add_sentence(
        format!("First {MAX_LISTED} identifiers:"),
        Style::Normal,
    );
    add_preview(ctx.report, &found, MAX_LISTED);
    tracing::info!(column = field, occurrences, distinct = found.len(), "known test identifiers");
    Ok(ValidationOutcome::Fail(FailDetails::Values(found)))
}

/// Summary statistics over the distinct identifiers of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdSummary {
    pub unique: usize,
    pub min: i64,
    pub max: i64,
    /// Distinct ids >= [`JURIDICAL_THRESHOLD`].
    pub juridical: usize,
    /// Distinct ids in `[BAND_START, BAND_END)`.
    pub in_band: usize,
}

impl IdSummary {
    /// Summarize the numeric identifiers of a column; `None` when it has none.
    pub fn from_column(column: &Column) -> Option<Self> {
        let ids: BTreeSet<i64> = column.iter().filter_map(numeric_id).collect();
        let min = *ids.first()?;
        let max = *ids.last()?;
        Some(Self {
            unique: ids.len(),
            min,
            max,
            juridical: ids.range(JURIDICAL_THRESHOLD..).count(),
            in_band: ids.range(BAND_START..BAND_END).count(),
        })
    }
}

/// Numeric identifier of a cell.
///
/// Text ids keep every ASCII digit they contain, so `12.345.678-9` reads as
/// `123456789`. Text without digits is not an identifier.
fn numeric_id(cell: CellValue<'_>) -> Option<i64> {
    match cell {
        CellValue::Integer(value) => Some(value),
        CellValue::Decimal(value) if value.fract() == 0.0 => Some(value as i64),
        CellValue::Text(value) => {
            let digits: String = value.chars().filter(char::is_ascii_digit).collect();
            digits.parse().ok()
        }
        _ => None,
    }
}

/// Informational description of an identifier column.
pub fn describe_ids(ctx: &mut CheckContext<'_>, field: &str) -> ValidationOutcome {
    ctx.report.add_heading(format!("Identifier description: {field}"));
    let column = match require_column(ctx.table, field, ctx.report) {
        Ok(column) => column,
        Err(skipped) => return skipped,
    };

    let Some(summary) = IdSummary::from_column(column) else {
        ctx.report.add_sentence(
            format!("Column '{field}' has no identifiers to describe."),
            Style::Normal,
        );
        return ValidationOutcome::Pass;
    };

    let rows = vec![
        vec![
            "Unique identifiers".to_string(),
            format_thousands(summary.unique as i64),
        ],
        vec!["Maximum".to_string(), format_thousands(summary.max)],
        vec!["Minimum".to_string(), format_thousands(summary.min)],
        vec![
            format!("Juridical (>= {})", format_thousands(JURIDICAL_THRESHOLD)),
            format_thousands(summary.juridical as i64),
        ],
        vec![
            format!(
                "Between {} and {}",
                format_thousands(BAND_START),
                format_thousands(BAND_END)
            ),
            format_thousands(summary.in_band as i64),
        ],
    ];
    ctx.report
        .add_table(rows, Some(vec!["Metric".to_string(), "Value".to_string()]));
    ValidationOutcome::Pass
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Fixture;
    use datacheck_model::Table;
    use datacheck_report::Section;

    #[test]
    fn fake_ids_are_sorted_and_distinct() {
        let table = Table::new(vec![Column::integer(
            "RUT",
            vec![Some(22222222), Some(5), Some(11111111), None, Some(22222222)],
        )])
        .unwrap();
        let mut fixture = Fixture::new(table).with_reference_ids(&[11111111, 22222222, 33333333]);
        assert_eq!(
            no_fake_ids(&mut fixture.ctx(), "RUT").unwrap(),
            ValidationOutcome::Fail(FailDetails::Values(vec![
                "11111111".to_string(),
                "22222222".to_string()
            ]))
        );
        assert!(fixture.report.mentions("3 occurrences of known test identifiers"));
    }

    #[test]
    fn clean_ids_pass() {
        let table = Table::new(vec![Column::integer("RUT", vec![Some(1), Some(2)])]).unwrap();
        let mut fixture = Fixture::new(table).with_reference_ids(&[3]);
        assert_eq!(no_fake_ids(&mut fixture.ctx(), "RUT").unwrap(), ValidationOutcome::Pass);
    }

    #[test]
    fn text_ids_are_a_precondition_violation() {
        let table = Table::new(vec![Column::text("RUT", vec![Some("12.345.678-9")])]).unwrap();
        let mut fixture = Fixture::new(table);
        assert!(matches!(
            no_fake_ids(&mut fixture.ctx(), "RUT"),
            Err(ValidationError::ColumnTypeMismatch { rule: "no_fake_ids", .. })
        ));
    }

    #[test]
    fn summary_counts_juridical_and_band() {
        let column = Column::integer(
            "RUT",
            vec![Some(10_000_000), Some(55_000_000), Some(35_000_000)],
        );
        let summary = IdSummary::from_column(&column).unwrap();
        assert_eq!(
            summary,
            IdSummary {
                unique: 3,
                min: 10_000_000,
                max: 55_000_000,
                juridical: 1,
                in_band: 1,
            }
        );
    }

    #[test]
    fn summary_counts_distinct_ids() {
        let column = Column::integer("RUT", vec![Some(60_000_000), Some(60_000_000), None]);
        let summary = IdSummary::from_column(&column).unwrap();
        assert_eq!(summary.unique, 1);
        assert_eq!(summary.juridical, 1);
    }

    #[test]
    fn text_ids_are_digit_extracted() {
        let column = Column::text("RUT", vec![Some("12.345.678-9"), Some("ABC-123")]);
        let summary = IdSummary::from_column(&column).unwrap();
        assert_eq!(
            summary,
            IdSummary {
                unique: 2,
                min: 123,
                max: 123_456_789,
                juridical: 1,
                in_band: 0,
            }
        );
    }

    #[test]
    fn text_without_digits_is_ignored() {
        let column = Column::text("RUT", vec![Some("3.456.789-K"), Some("sin rut"), None]);
        let summary = IdSummary::from_column(&column).unwrap();
        assert_eq!(summary.unique, 1);
        assert_eq!(summary.min, 3_456_789);
        assert_eq!(summary.in_band, 0);
    }

    #[test]
    fn describe_ids_renders_thousands() {
        let table = Table::new(vec![Column::integer(
            "RUT",
            vec![Some(10_000_000), Some(55_000_000), Some(35_000_000)],
        )])
        .unwrap();
        let mut fixture = Fixture::new(table);
        assert_eq!(describe_ids(&mut fixture.ctx(), "RUT"), ValidationOutcome::Pass);

        let rows = fixture
            .report
            .sections()
            .iter()
            .find_map(|section| match section {
                Section::Table { rows, .. } => Some(rows.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(rows[1], vec!["Maximum", "55,000,000"]);
        assert_eq!(rows[3], vec!["Juridical (>= 50,000,000)", "1"]);
        assert_eq!(rows[4], vec!["Between 30,000,000 and 40,000,000", "1"]);
    }
}
