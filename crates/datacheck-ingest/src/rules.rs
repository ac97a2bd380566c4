//! Rule-list and reference-id loading.
//!
//! Both files are small delimited lists with a header row, read with the
//! `csv` crate after the same decoding step as the dataset.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use datacheck_model::{ReferenceIds, Rule, RuleSet};

use crate::csv::{normalize_field, read_text};
use crate::error::{IngestError, Result};
use crate::options::LoadOptions;

/// Load the ordered rule list: first column is the field, second the
/// rule expression. Rows with a blank expression are skipped.
pub fn load_rules(path: &Path, options: &LoadOptions) -> Result<RuleSet> {
    let (header, rows) = read_records(path, options)?;
    if header.len() < 2 {
        return Err(IngestError::MissingColumns {
            path: path.to_path_buf(),
            expected: 2,
            found: header.len(),
        });
    }

    let mut rules = Vec::with_capacity(rows.len());
    for (idx, record) in rows.iter().enumerate() {
        let field = normalize_field(record.get(0)).unwrap_or_default();
        let Some(expression) = normalize_field(record.get(1)) else {
            tracing::warn!(line = idx + 2, field = %field, "skipping rule without expression");
            continue;
        };
        rules.push(Rule::new(field, expression));
    }

    tracing::info!(path = %path.display(), rules = rules.len(), "loaded rule list");
    Ok(rules.into_iter().collect())
}

/// Load the known-fake identifier set from the first column.
pub fn load_reference_ids(path: &Path, options: &LoadOptions) -> Result<ReferenceIds> {
    let (_, rows) = read_records(path, options)?;

    let mut ids = Vec::with_capacity(rows.len());
    for (idx, record) in rows.iter().enumerate() {
        let Some(raw) = normalize_field(record.get(0)) else {
            continue;
        };
        match raw.parse::<i64>() {
            Ok(id) => ids.push(id),
            Err(_) => {
                tracing::warn!(line = idx + 2, value = %raw, "skipping non-integer reference id");
            }
        }
    }

    let ids = ReferenceIds::new(ids);
    tracing::info!(path = %path.display(), ids = ids.len(), "loaded reference ids");
    Ok(ids)
}

fn read_records(path: &Path, options: &LoadOptions) -> Result<(StringRecord, Vec<StringRecord>)> {
    let text = read_text(path, options.encoding)?;
    if text.trim().is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .flexible(true)
        .from_reader(text.as_bytes());
    let header = reader
        .headers()
        .map_err(|e| IngestError::csv_parse(path, e))?
        .clone();
    let rows = reader
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| IngestError::csv_parse(path, e))?;
    Ok((header, rows))
}
