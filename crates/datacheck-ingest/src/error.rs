//! Error types for dataset ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading tables, rules or reference lists.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit.
    #[error("file {path} is too large ({size} bytes, limit {max_size})")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === Encoding Errors ===
    /// File is not valid in the requested encoding.
    #[error("file {path} is not valid {encoding}")]
    InvalidEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// File has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Two header names collapse to the same name after normalization.
    #[error("duplicate column '{column}' in {path} after header normalization")]
    DuplicateColumn { column: String, path: PathBuf },

    /// Required column not found.
    #[error("{path} must have at least {expected} columns, found {found}")]
    MissingColumns {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    /// Loaded columns could not form a table.
    #[error("invalid table in {path}: {source}")]
    Table {
        path: PathBuf,
        #[source]
        source: datacheck_model::ModelError,
    },
}

impl IngestError {
    pub(crate) fn csv_parse(path: &std::path::Path, err: impl std::fmt::Display) -> Self {
        Self::CsvParse {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/file.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /path/to/file.csv");
    }

    #[test]
    fn test_duplicate_column_display() {
        let err = IngestError::DuplicateColumn {
            column: "RUT".to_string(),
            path: PathBuf::from("data.csv"),
        };
        assert_eq!(
            err.to_string(),
            "duplicate column 'RUT' in data.csv after header normalization"
        );
    }
}
