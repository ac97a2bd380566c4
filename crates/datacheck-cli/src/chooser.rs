//! Native file dialogs and the ingest-backed table source.

use std::path::{Path, PathBuf};

use datacheck_ingest::{LoadOptions, load_table};
use datacheck_model::Table;
use datacheck_validate::{ChooserError, FileChooser, SourceError, TableSource};
use rfd::FileDialog;

/// Chooser backed by the platform's native dialogs.
#[derive(Debug, Clone, Default)]
pub struct DialogChooser {
    /// Folder the dialogs open in.
    start_dir: Option<PathBuf>,
}

impl DialogChooser {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_start_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.start_dir = Some(dir.into());
        self
    }

    fn dialog(&self, prompt: &str) -> FileDialog {
        let dialog = FileDialog::new().set_title(prompt);
        match &self.start_dir {
            Some(dir) => dialog.set_directory(dir),
            None => dialog,
        }
    }
}

impl FileChooser for DialogChooser {
    fn choose_file(&self, prompt: &str) -> Result<PathBuf, ChooserError> {
        let selected = self
            .dialog(prompt)
            .add_filter("CSV files", &["csv", "CSV"])
            .add_filter("All files", &["*"])
            .pick_file();
        tracing::debug!(prompt, selected = ?selected, "file dialog closed");
        selected.ok_or(ChooserError::NotSelected)
    }

    fn choose_folder(&self, prompt: &str) -> Result<PathBuf, ChooserError> {
        let selected = self.dialog(prompt).pick_folder();
        tracing::debug!(prompt, selected = ?selected, "folder dialog closed");
        selected.ok_or(ChooserError::NotSelected)
    }
}

/// Loads comparison tables with the same options as the main file.
#[derive(Debug, Clone, Copy, Default)]
pub struct IngestSource {
    options: LoadOptions,
}

impl IngestSource {
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }
}

impl TableSource for IngestSource {
    fn load(&self, path: &Path) -> Result<Table, SourceError> {
        Ok(load_table(path, &self.options)?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn ingest_source_loads_with_options() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "RUT,NOMBRE").unwrap();
        writeln!(file, "1,Ana").unwrap();
        let source = IngestSource::new(LoadOptions::default().with_delimiter(b','));
        let table = source.load(file.path()).unwrap();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.column_names(), vec!["RUT", "NOMBRE"]);
    }

    #[test]
    fn ingest_source_reports_missing_files() {
        let source = IngestSource::default();
        let err = source.load(Path::new("/nonexistent/previous.csv")).unwrap_err();
        assert!(err.to_string().contains("previous.csv"));
    }
}
