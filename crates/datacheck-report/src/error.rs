//! Error types for report rendering and persistence.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while rendering or writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Output directory is missing or not a directory.
    #[error("output directory does not exist: {path}")]
    MissingDirectory { path: PathBuf },

    /// Writing the report file failed.
    #[error("failed to write report {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Low-level I/O failure while rendering.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// XML serialization failure.
    #[error("failed to render HTML: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
