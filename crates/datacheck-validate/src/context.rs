//! Per-run state shared with every validator call.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use datacheck_model::{ReferenceIds, Table};
use datacheck_report::Report;

use crate::collaborators::{FileChooser, TableSource};

/// Value shown when no cabinet id was supplied.
pub const NO_CABINET: &str = "N/A";

/// Metadata about the file under validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub path: PathBuf,
    /// File name with extension.
    pub file_name: String,
    /// File name without extension.
    pub stem: String,
    /// Operator-supplied cabinet id.
    pub cabinet: String,
    pub report_time: NaiveDateTime,
}

impl FileInfo {
    pub fn new(path: &Path, cabinet: impl Into<String>) -> Self {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let cabinet = cabinet.into();
        Self {
            path: path.to_path_buf(),
            file_name,
            stem,
            cabinet: if cabinet.trim().is_empty() {
                NO_CABINET.to_string()
            } else {
                cabinet
            },
            report_time: Local::now().naive_local(),
        }
    }

    #[must_use]
    pub fn with_report_time(mut self, report_time: NaiveDateTime) -> Self {
        self.report_time = report_time;
        self
    }
}

/// Everything a validator may read, plus the report it appends to.
pub struct CheckContext<'a> {
    pub table: &'a Table,
    pub reference_ids: &'a ReferenceIds,
    pub file: &'a FileInfo,
    pub report: &'a mut Report,
    pub source: &'a dyn TableSource,
    pub chooser: &'a dyn FileChooser,
}
