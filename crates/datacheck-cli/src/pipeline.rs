//! Validation pipeline: load inputs, run the rules, write the report.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use datacheck_ingest::{load_reference_ids, load_rules, load_table};
use datacheck_report::{DocumentInfo, ReportFormat, write_report};
use datacheck_validate::{Collaborators, FileInfo, REPORT_TITLE, RunSummary, ValidationRunner};

use crate::settings::Settings;

/// The three input files of a validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationInputs {
    pub data: PathBuf,
    pub rules: PathBuf,
    pub reference_ids: PathBuf,
}

/// Where and how the report is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Defaults to the data file's folder.
    pub dir: Option<PathBuf>,
    pub format: ReportFormat,
    pub prefix: String,
}

impl OutputConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            dir: None,
            format: settings.report_format,
            prefix: settings.report_prefix.clone(),
        }
    }
}

/// Result of a completed run.
#[derive(Debug)]
pub struct ValidationResult {
    pub file: FileInfo,
    pub rows: usize,
    pub columns: usize,
    pub summary: RunSummary,
    pub report_path: PathBuf,
}

/// Locate the reference ids file: next to the data file first, then the
/// working directory.
pub fn resolve_reference_ids(data: &Path, file_name: &str, cwd: &Path) -> PathBuf {
    let beside_data = data
        .parent()
        .map(|dir| dir.join(file_name))
        .filter(|candidate| candidate.is_file());
    beside_data.unwrap_or_else(|| cwd.join(file_name))
}

/// Report file name without extension, e.g. `validations_ANEXO_6_A_BTE_202401`.
pub fn report_stem(prefix: &str, data: &Path) -> String {
    let stem = data
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{prefix}_{stem}")
}

/// Folder the report is written to.
pub fn output_dir(config: &OutputConfig, data: &Path) -> PathBuf {
    config.dir.clone().unwrap_or_else(|| {
        data.parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
    })
}

/// Load every input, run the rules and persist the report.
pub fn run_validation(
    inputs: &ValidationInputs,
    cabinet: &str,
    settings: &Settings,
    output: &OutputConfig,
    collaborators: Collaborators,
) -> Result<ValidationResult> {
    let span = info_span!("validate", data = %inputs.data.display());
    let _guard = span.enter();

    let options = settings.load_options()?;
    let table = load_table(&inputs.data, &options).context("load data file")?;
    let rules = load_rules(&inputs.rules, &options).context("load rules file")?;
    let reference_ids =
        load_reference_ids(&inputs.reference_ids, &options).context("load reference ids file")?;
    info!(
        rows = table.row_count(),
        columns = table.column_count(),
        rules = rules.len(),
        reference_ids = reference_ids.len(),
        "inputs loaded"
    );

    let rows = table.row_count();
    let columns = table.column_count();
    let file = FileInfo::new(&inputs.data, cabinet);
    let runner = ValidationRunner::new(table, reference_ids, file.clone(), collaborators);
    let outcome = runner.run(&rules)?;

    let info = DocumentInfo::new(format!("{REPORT_TITLE}: {}", file.file_name))
        .with_created(file.report_time);
    let dir = output_dir(output, &inputs.data);
    let report_path = write_report(
        &outcome.report,
        &info,
        &dir,
        &report_stem(&output.prefix, &inputs.data),
        output.format,
    )
    .context("write report")?;

    Ok(ValidationResult {
        file,
        rows,
        columns,
        summary: outcome.summary,
        report_path,
    })
}
