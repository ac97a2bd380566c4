//! Shared fixtures for unit tests.

use std::path::Path;

use chrono::NaiveDate;
use datacheck_model::{ReferenceIds, Table};
use datacheck_report::Report;

use crate::collaborators::{FileChooser, NoChooser, NoSource, TableSource};
use crate::context::{CheckContext, FileInfo};

pub(crate) struct Fixture {
    pub table: Table,
    pub reference_ids: ReferenceIds,
    pub file: FileInfo,
    pub report: Report,
    pub source: Box<dyn TableSource>,
    pub chooser: Box<dyn FileChooser>,
}

impl Fixture {
    pub fn new(table: Table) -> Self {
        let report_time = NaiveDate::from_ymd_opt(2024, 1, 31)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        Self {
            table,
            reference_ids: ReferenceIds::default(),
            file: FileInfo::new(Path::new("/data/input.csv"), "N/A").with_report_time(report_time),
            report: Report::new(),
            source: Box::new(NoSource),
            chooser: Box::new(NoChooser),
        }
    }

    pub fn with_path(mut self, path: &str) -> Self {
        let report_time = self.file.report_time;
        let cabinet = self.file.cabinet.clone();
        self.file = FileInfo::new(Path::new(path), cabinet).with_report_time(report_time);
        self
    }

    pub fn with_cabinet(mut self, cabinet: &str) -> Self {
        self.file.cabinet = cabinet.to_string();
        self
    }

    pub fn with_reference_ids(mut self, ids: &[i64]) -> Self {
        self.reference_ids = ReferenceIds::new(ids.iter().copied());
        self
    }

    pub fn with_collaborators(
        mut self,
        source: impl TableSource + 'static,
        chooser: impl FileChooser + 'static,
    ) -> Self {
        self.source = Box::new(source);
        self.chooser = Box::new(chooser);
        self
    }

    pub fn ctx(&mut self) -> CheckContext<'_> {
        CheckContext {
            table: &self.table,
            reference_ids: &self.reference_ids,
            file: &self.file,
            report: &mut self.report,
            source: self.source.as_ref(),
            chooser: self.chooser.as_ref(),
        }
    }
}
