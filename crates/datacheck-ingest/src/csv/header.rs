//! Header and cell normalization.

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{IngestError, Result};

/// Byte-order mark as it appears when UTF-8 input is decoded as Latin-1.
const MIS_DECODED_BOM: &str = "ï»¿";

/// Normalizes a header value: trims whitespace and strips byte-order-mark
/// artifacts, both the real BOM and its Latin-1 rendering.
pub fn normalize_header(value: &str) -> String {
    let mut current = value.trim();
    loop {
        let stripped = current
            .trim_start_matches('\u{feff}')
            .trim_start_matches(MIS_DECODED_BOM)
            .trim();
        if stripped == current {
            return stripped.to_string();
        }
        current = stripped;
    }
}

/// Rejects a raw header record whose names collide after normalization.
///
/// Runs on the header line itself: the Polars reader renames exact
/// duplicates (`RUT`, `RUT_duplicated_0`) before any frame exists.
pub fn check_header_names(path: &Path, text: &str, delimiter: u8) -> Result<()> {
    let mut reader = ::csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(text.as_bytes());
    let header = reader
        .headers()
        .map_err(|e| IngestError::csv_parse(path, e))?;

    let mut seen = BTreeSet::new();
    for raw in header {
        let name = normalize_header(raw);
        if name.is_empty() {
            continue;
        }
        if !seen.insert(name.clone()) {
            return Err(IngestError::DuplicateColumn {
                column: name,
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}

/// Normalizes a data cell; empty cells become `None`, anything else is kept
/// as written.
pub fn normalize_cell(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Normalizes a field of a rule list or reference list: trimmed, blank
/// fields become `None`.
pub fn normalize_field(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
