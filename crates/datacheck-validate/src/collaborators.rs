//! Interfaces to the loader and the interactive chooser.

use std::path::{Path, PathBuf};

use datacheck_model::Table;
use thiserror::Error;

/// Boxed loader error, kept opaque to the engine.
pub type SourceError = Box<dyn std::error::Error + Send + Sync>;

/// Loads additional tables during a run (e.g. a prior file to compare).
pub trait TableSource {
    fn load(&self, path: &Path) -> Result<Table, SourceError>;
}

/// Why the chooser returned no path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChooserError {
    /// Operator canceled or no chooser is available.
    #[error("nothing selected")]
    NotSelected,
}

/// Interactive file and folder selection.
pub trait FileChooser {
    fn choose_file(&self, prompt: &str) -> Result<PathBuf, ChooserError>;
    fn choose_folder(&self, prompt: &str) -> Result<PathBuf, ChooserError>;
}

/// Chooser for non-interactive runs: never selects anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoChooser;

impl FileChooser for NoChooser {
    fn choose_file(&self, _prompt: &str) -> Result<PathBuf, ChooserError> {
        Err(ChooserError::NotSelected)
    }

    fn choose_folder(&self, _prompt: &str) -> Result<PathBuf, ChooserError> {
        Err(ChooserError::NotSelected)
    }
}

/// Chooser that always answers with a preselected path.
#[derive(Debug, Clone)]
pub struct FixedChooser {
    path: PathBuf,
}

impl FixedChooser {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FileChooser for FixedChooser {
    fn choose_file(&self, prompt: &str) -> Result<PathBuf, ChooserError> {
        tracing::debug!(prompt, path = %self.path.display(), "using preselected file");
        Ok(self.path.clone())
    }

    fn choose_folder(&self, prompt: &str) -> Result<PathBuf, ChooserError> {
        tracing::debug!(prompt, path = %self.path.display(), "using preselected folder");
        Ok(self.path.clone())
    }
}

/// Source for runs that never load a second table.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSource;

impl TableSource for NoSource {
    fn load(&self, path: &Path) -> Result<Table, SourceError> {
        Err(format!("no table source configured for {}", path.display()).into())
    }
}

/// The runner's external collaborators.
pub struct Collaborators {
    pub source: Box<dyn TableSource>,
    pub chooser: Box<dyn FileChooser>,
}

impl Collaborators {
    pub fn new(source: impl TableSource + 'static, chooser: impl FileChooser + 'static) -> Self {
        Self {
            source: Box::new(source),
            chooser: Box::new(chooser),
        }
    }
}

impl Default for Collaborators {
    fn default() -> Self {
        Self::new(NoSource, NoChooser)
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}
