//! Dataset validation engine.
//!
//! Rules are `(field, "name(parameter)")` pairs. The runner parses each
//! expression, looks the name up in the closed [`Validator`] registry and
//! invokes it against the table. Validators append sections to the run's
//! [`Report`](datacheck_report::Report) and return a
//! [`ValidationOutcome`](datacheck_model::ValidationOutcome).
//!
//! Problems with the data are outcomes. Problems with the rule declarations
//! themselves are [`ValidationError`]s and abort the run.

pub mod checks;
pub mod collaborators;
pub mod context;
pub mod error;
pub mod guard;
pub mod parser;
pub mod registry;
pub mod runner;

#[cfg(test)]
mod test_support;

pub use collaborators::{
    ChooserError, Collaborators, FileChooser, FixedChooser, NoChooser, NoSource, SourceError,
    TableSource,
};
pub use context::{CheckContext, FileInfo, NO_CABINET};
pub use error::{Result, ValidationError};
pub use parser::{RuleCall, parse_rule_expression};
pub use registry::{Scope, Validator};
pub use runner::{REPORT_TITLE, RuleResult, RunOutcome, RunState, RunSummary, ValidationRunner};
