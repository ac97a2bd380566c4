//! Row count comparison against a previously delivered file.

use datacheck_model::{SkipReason, ValidationOutcome, format_thousands};
use datacheck_report::{Report, Style};

use crate::collaborators::ChooserError;
use crate::context::CheckContext;

const PROMPT: &str = "Select the previous file to compare";

/// Difference between the current and the previous row count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowCountDrift {
    pub current: usize,
    pub previous: usize,
}

impl RowCountDrift {
    pub fn new(current: usize, previous: usize) -> Self {
        Self { current, previous }
    }

    /// Signed row difference, current minus previous.
    pub fn difference(&self) -> i64 {
        self.current as i64 - self.previous as i64
    }

    /// Signed percentage change; `None` when the previous file had no rows.
    pub fn percentage(&self) -> Option<f64> {
        (self.previous > 0).then(|| self.difference() as f64 / self.previous as f64 * 100.0)
    }
}

/// Informational comparison with a prior file picked through the chooser.
pub fn row_count_drift(ctx: &mut CheckContext<'_>) -> ValidationOutcome {
    ctx.report.add_heading("Row count comparison with previous file");

    let path = match ctx.chooser.choose_file(PROMPT) {
        Ok(path) => path,
        Err(ChooserError::NotSelected) => {
            return unavailable(ctx.report, "No previous file was selected.", "no file selected");
        }
    };

    let previous = match ctx.source.load(&path) {
        Ok(table) => table,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "previous file could not be loaded");
            let message = format!(
                "The previous file '{}' could not be loaded: {err}",
                path.display()
            );
            return unavailable(ctx.report, &message, "previous file could not be loaded");
        }
    };

    let drift = RowCountDrift::new(ctx.table.row_count(), previous.row_count());
    ctx.report.add_sentence(
        format!("Rows in current file: {}", format_thousands(drift.current as i64)),
        Style::Normal,
    );
    ctx.report.add_sentence(
        format!(
            "Rows in previous file ({}): {}",
            path.display(),
            format_thousands(drift.previous as i64)
        ),
        Style::Normal,
    );
    let percentage = drift
        .percentage()
        .map_or_else(|| "not available".to_string(), |value| format!("{value:+.2}%"));
    let difference = drift.difference();
    let sign = if difference > 0 { "+" } else { "" };
    ctx.report.add_sentence(
        format!(
            "Difference: {sign}{} rows ({percentage})",
            format_thousands(difference)
        ),
        Style::Normal,
    );
    tracing::info!(
        current = drift.current,
        previous = drift.previous,
        difference,
        "row count drift"
    );
    ValidationOutcome::Pass
}

fn unavailable(report: &mut Report, message: &str, reason: &str) -> ValidationOutcome {
    report.add_sentence(message, Style::Highlight);
    ValidationOutcome::Skipped(SkipReason::ComparisonUnavailable {
        reason: reason.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::collaborators::{FixedChooser, SourceError, TableSource};
    use crate::test_support::Fixture;
    use datacheck_model::{Column, Table};

    struct RowsSource(usize);

    impl TableSource for RowsSource {
        fn load(&self, _path: &Path) -> Result<Table, SourceError> {
            let values = (0..self.0).map(|n| Some(n as i64)).collect();
            Ok(Table::new(vec![Column::integer("RUT", values)])?)
        }
    }

    fn current(rows: usize) -> Table {
        let values = (0..rows).map(|n| Some(n as i64)).collect();
        Table::new(vec![Column::integer("RUT", values)]).unwrap()
    }

    #[test]
    fn drift_percentage() {
        let drift = RowCountDrift::new(110, 100);
        assert_eq!(drift.difference(), 10);
        assert_eq!(drift.percentage(), Some(10.0));
        assert_eq!(RowCountDrift::new(5, 0).percentage(), None);
    }

    #[test]
    fn nothing_selected_is_skipped() {
        let mut fixture = Fixture::new(current(3));
        let outcome = row_count_drift(&mut fixture.ctx());
        assert!(matches!(
            outcome,
            ValidationOutcome::Skipped(SkipReason::ComparisonUnavailable { .. })
        ));
        assert!(fixture.report.mentions("No previous file was selected."));
    }

    #[test]
    fn load_failure_is_skipped() {
        let mut fixture = Fixture::new(current(3))
            .with_collaborators(crate::collaborators::NoSource, FixedChooser::new("/data/prev.csv"));
        let outcome = row_count_drift(&mut fixture.ctx());
        assert!(outcome.is_skipped());
        assert!(fixture.report.mentions("could not be loaded"));
    }

    #[test]
    fn decrease_is_reported_with_sign() {
        let mut fixture = Fixture::new(current(90))
            .with_collaborators(RowsSource(100), FixedChooser::new("/data/prev.csv"));
        assert_eq!(row_count_drift(&mut fixture.ctx()), ValidationOutcome::Pass);
        assert!(fixture.report.mentions("Rows in current file: 90"));
        assert!(fixture.report.mentions("Difference: -10 rows (-10.00%)"));
    }

    #[test]
    fn empty_previous_has_no_percentage() {
        let mut fixture = Fixture::new(current(2))
            .with_collaborators(RowsSource(0), FixedChooser::new("/data/prev.csv"));
        assert_eq!(row_count_drift(&mut fixture.ctx()), ValidationOutcome::Pass);
        assert!(fixture.report.mentions("Difference: +2 rows (not available)"));
    }
}
