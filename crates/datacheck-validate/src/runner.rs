//! Validation runner.
//!
//! A runner owns one table, its reference ids and the report being built.
//! It is consumed by [`ValidationRunner::run`]; validating another file
//! means building another runner.

use datacheck_model::{ReferenceIds, RuleSet, SkipReason, Table, ValidationOutcome};
use datacheck_report::{Report, Style};
use tracing::{debug, info, info_span, warn};

use crate::checks::{invoke, table::describe_file};
use crate::collaborators::Collaborators;
use crate::context::{CheckContext, FileInfo};
use crate::error::Result;
use crate::parser::parse_rule_expression;
use crate::registry::Validator;

/// Title of every validation report.
pub const REPORT_TITLE: &str = "Validation report";

/// Lifecycle of a runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Report created, file description written.
    Initialized,
    /// Rules are being evaluated.
    Running,
    /// Every rule was evaluated.
    Completed,
}

/// Outcome of one declared rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleResult {
    pub field: String,
    /// Rule name as declared.
    pub rule: String,
    pub parameter: String,
    pub outcome: ValidationOutcome,
}

/// Per-rule results of a completed run, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub results: Vec<RuleResult>,
}

impl RunSummary {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_pass()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_fail()).count()
    }

    pub fn skipped(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_skipped()).count()
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }
}

/// Completed report plus the run summary.
#[derive(Debug)]
pub struct RunOutcome {
    pub report: Report,
    pub summary: RunSummary,
}

/// Drives rule evaluation for a single file.
pub struct ValidationRunner {
    table: Table,
    reference_ids: ReferenceIds,
    file: FileInfo,
    collaborators: Collaborators,
    report: Report,
    state: RunState,
}

impl ValidationRunner {
    /// Create the report and write its title and file description.
    pub fn new(
        table: Table,
        reference_ids: ReferenceIds,
        file: FileInfo,
        collaborators: Collaborators,
    ) -> Self {
        let mut runner = Self {
            table,
            reference_ids,
            file,
            collaborators,
            report: Report::new(),
            state: RunState::Initialized,
        };
        runner.report.add_title(REPORT_TITLE);
        describe_file(&mut runner.context());
        runner
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn file(&self) -> &FileInfo {
        &self.file
    }

    fn context(&mut self) -> CheckContext<'_> {
        CheckContext {
            table: &self.table,
            reference_ids: &self.reference_ids,
            file: &self.file,
            report: &mut self.report,
            source: self.collaborators.source.as_ref(),
            chooser: self.collaborators.chooser.as_ref(),
        }
    }

    /// Evaluate every rule in declaration order.
    ///
    /// Unknown rule names are reported and skipped. Declaration errors and
    /// precondition violations abort the run.
    pub fn run(mut self, rules: &RuleSet) -> Result<RunOutcome> {
        let span = info_span!("run", file = %self.file.file_name, rules = rules.len());
        let _guard = span.enter();

        self.state = RunState::Running;
        let mut summary = RunSummary::default();
        for rule in rules {
            let call = parse_rule_expression(&rule.expression)?;
            debug!(field = %rule.field, rule = %call.name, parameter = %call.parameter, "evaluating rule");

            let outcome = match Validator::from_name(&call.name) {
                Some(validator) => {
                    invoke(validator, &mut self.context(), &rule.field, &call.parameter)?
                }
                None => self.unknown_rule(&call.name),
            };

            match &outcome {
                ValidationOutcome::Pass => {}
                ValidationOutcome::Fail(details) => {
                    info!(field = %rule.field, rule = %call.name, %details, "finding");
                }
                ValidationOutcome::Skipped(reason) => {
                    warn!(field = %rule.field, rule = %call.name, %reason, "rule skipped");
                }
            }
            summary.results.push(RuleResult {
                field: rule.field.clone(),
                rule: call.name,
                parameter: call.parameter,
                outcome,
            });
        }

        self.state = RunState::Completed;
        info!(
            passed = summary.passed(),
            failed = summary.failed(),
            skipped = summary.skipped(),
            "run completed"
        );
        Ok(RunOutcome {
            report: self.report,
            summary,
        })
    }

    fn unknown_rule(&mut self, name: &str) -> ValidationOutcome {
        self.report.add_heading(format!("Validation {name}"));
        self.report
            .add_sentence("Validation function not found.", Style::Highlight);
        ValidationOutcome::Skipped(SkipReason::UnknownRule {
            name: name.to_string(),
        })
    }
}

impl std::fmt::Debug for ValidationRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationRunner")
            .field("file", &self.file.file_name)
            .field("rows", &self.table.row_count())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use datacheck_model::{Column, Rule};

    fn runner() -> ValidationRunner {
        let table = Table::new(vec![Column::integer("id", vec![Some(1), Some(1), Some(2)])]).unwrap();
        ValidationRunner::new(
            table,
            ReferenceIds::default(),
            FileInfo::new(Path::new("/data/ids.csv"), "7"),
            Collaborators::default(),
        )
    }

    #[test]
    fn new_runner_describes_the_file() {
        let runner = runner();
        assert_eq!(runner.state(), RunState::Initialized);
        assert!(runner.report().mentions(REPORT_TITLE));
        assert!(runner.report().mentions("ids.csv"));
    }

    #[test]
    fn results_follow_declaration_order() {
        let rules: RuleSet = [
            Rule::new("id", "no_repeated_values()"),
            Rule::new("", "no_duplicate_rows()"),
            Rule::new("id", "at_most(5)"),
        ]
        .into_iter()
        .collect();
        let outcome = runner().run(&rules).unwrap();
        let names: Vec<&str> = outcome.summary.results.iter().map(|r| r.rule.as_str()).collect();
        assert_eq!(names, ["no_repeated_values", "no_duplicate_rows", "at_most"]);
        assert_eq!(outcome.summary.failed(), 2);
        assert_eq!(outcome.summary.passed(), 1);
    }

    #[test]
    fn malformed_rule_aborts() {
        let rules: RuleSet = [Rule::new("id", "no_null_values")].into_iter().collect();
        assert!(runner().run(&rules).is_err());
    }
}
