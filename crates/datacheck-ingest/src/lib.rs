//! Dataset ingestion.
//!
//! Loads the dataset under validation into a typed [`Table`], plus the two
//! small companion lists a run needs: the rule list and the known-fake
//! reference identifiers.
//!
//! Loading happens in three steps:
//! 1. Read and decode bytes (UTF-8, falling back to Windows-1252)
//! 2. Parse with the Polars CSV reader, every column as text
//! 3. Normalize headers, then run the typing pass ([`infer_column`])
//!
//! [`Table`]: datacheck_model::Table

pub mod csv;
pub mod error;
pub mod options;
pub mod rules;
pub mod typing;

pub use csv::{decode, load_table, normalize_header};
pub use error::{IngestError, Result};
pub use options::{DEFAULT_DELIMITER, Encoding, LoadOptions};
pub use rules::{load_reference_ids, load_rules};
pub use typing::infer_column;
