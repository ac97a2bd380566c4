//! Data model for dataset validation.
//!
//! - [`Table`]: ordered, uniquely named, typed columns
//! - [`Rule`] / [`RuleSet`]: declared `(field, expression)` pairs
//! - [`ValidationOutcome`]: pass, fail with details, or skipped with a reason
//! - [`ReferenceIds`]: known-fake identifier set

pub mod column;
pub mod error;
pub mod outcome;
pub mod reference;
pub mod rule;
pub mod table;
pub mod value;

pub use column::{Column, ColumnData, ColumnType};
pub use error::{ModelError, Result};
pub use outcome::{FailDetails, SkipReason, ValidationOutcome};
pub use reference::ReferenceIds;
pub use rule::{Rule, RuleSet};
pub use table::Table;
pub use value::{
    CellKey, CellValue, TIMESTAMP_FORMAT, format_numeric, format_thousands, parse_timestamp,
};
