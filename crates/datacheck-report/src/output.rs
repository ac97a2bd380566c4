//! Persisting rendered reports.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::document::{DocumentInfo, ReportFormat};
use crate::error::{ReportError, Result};
use crate::html::render_html;
use crate::report::Report;
use crate::text::render_text;

/// Write `report` to `<dir>/<stem>.<ext>` and return the written path.
pub fn write_report(
    report: &Report,
    info: &DocumentInfo,
    dir: &Path,
    stem: &str,
    format: ReportFormat,
) -> Result<PathBuf> {
    if !dir.is_dir() {
        return Err(ReportError::MissingDirectory {
            path: dir.to_path_buf(),
        });
    }
    let path = dir.join(format!("{stem}.{}", format.extension()));
    let write_err = |source| ReportError::Write {
        path: path.clone(),
        source,
    };

    let file = File::create(&path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    match format {
        ReportFormat::Html => render_html(report, info, &mut writer)?,
        ReportFormat::Text => writer
            .write_all(render_text(report).as_bytes())
            .map_err(write_err)?,
    }
    writer.flush().map_err(write_err)?;

    tracing::info!(path = %path.display(), sections = report.len(), "wrote report");
    Ok(path)
}
