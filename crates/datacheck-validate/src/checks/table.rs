//! Table-level checks: file description, file name, duplicate and empty rows.

use std::collections::HashSet;

use regex::Regex;

use datacheck_model::{FailDetails, ValidationOutcome};
use datacheck_report::Style;

use super::{MAX_LISTED, add_preview, clean_parameter, invalid_parameter, row_labels};
use crate::context::CheckContext;

/// Placeholder tokens accepted in file name patterns.
const PLACEHOLDERS: &[(&str, &str)] = &[
    ("AAAA", r"\d{4}"),
    ("aaaa", r"\d{4}"),
    ("MM", r"\d{2}"),
    ("mm", r"\d{2}"),
    ("DD", r"\d{2}"),
    ("dd", r"\d{2}"),
];

/// Informational summary of the loaded file.
pub fn describe_file(ctx: &mut CheckContext<'_>) -> ValidationOutcome {
    let report = &mut *ctx.report;
    report.add_heading("File description");
    report.add_sentence(format!("File name: {}", ctx.file.file_name), Style::Normal);
    report.add_sentence(
        format!(
            "Report date: {}",
            ctx.file.report_time.format("%Y-%m-%d %H:%M:%S")
        ),
        Style::Normal,
    );
    report.add_sentence(format!("Cabinet: {}", ctx.file.cabinet), Style::Normal);
    report.add_sentence(format!("Rows: {}", ctx.table.row_count()), Style::Normal);
    report.add_sentence(format!("Columns: {}", ctx.table.column_count()), Style::Normal);
    report.add_sentence("Column list:", Style::Normal);
    report.add_list(ctx.table.column_names());
    ValidationOutcome::Pass
}

/// Build the anchored regex for a file name pattern.
pub fn pattern_regex(pattern: &str) -> Result<Regex, regex::Error> {
    let mut expression = String::from("^");
    let mut rest = pattern;
    'outer: while let Some(ch) = rest.chars().next() {
        for (token, replacement) in PLACEHOLDERS {
            if let Some(tail) = rest.strip_prefix(token) {
                expression.push_str(replacement);
                rest = tail;
                continue 'outer;
            }
        }
        let mut buf = [0u8; 4];
        expression.push_str(&regex::escape(ch.encode_utf8(&mut buf)));
        rest = &rest[ch.len_utf8()..];
    }
    expression.push('$');
    Regex::new(&expression)
}

/// The file name (without extension) matches a placeholder pattern.
pub fn filename_pattern(ctx: &mut CheckContext<'_>, parameter: &str) -> ValidationOutcome {
    ctx.report.add_heading("File name validation");
    let pattern = clean_parameter(parameter);
    if pattern.is_empty() {
        return invalid_parameter(ctx.report, parameter, "the file name pattern is empty");
    }
    let regex = match pattern_regex(pattern) {
        Ok(regex) => regex,
        Err(err) => return invalid_parameter(ctx.report, parameter, err.to_string()),
    };

    let stem = &ctx.file.stem;
    if regex.is_match(stem) {
        ctx.report.add_sentence(
            format!("The file name [{stem}] matches the expected pattern [{pattern}]."),
            Style::Success,
        );
        ctx.report.add_spacer();
        ValidationOutcome::Pass
    } else {
        ctx.report.add_sentence(
            format!("The file name [{stem}] does not match the expected pattern [{pattern}]."),
            Style::Highlight,
        );
        ctx.report.add_spacer();
        tracing::info!(stem = %stem, pattern, "file name mismatch");
        ValidationOutcome::Fail(FailDetails::Rejected)
    }
}

/// 1-based numbers of rows equal to an earlier row.
pub fn duplicate_rows(table: &datacheck_model::Table) -> Vec<usize> {
    let mut seen = HashSet::with_capacity(table.row_count());
    (0..table.row_count())
        .filter(|&row| !seen.insert(table.row_key(row)))
        .map(|row| row + 1)
        .collect()
}

/// No row is a full copy of an earlier row.
pub fn no_duplicate_rows(ctx: &mut CheckContext<'_>) -> ValidationOutcome {
    ctx.report.add_heading("Duplicate rows");
    let duplicates = duplicate_rows(ctx.table);
    if duplicates.is_empty() {
        ctx.report
            .add_sentence("No duplicate rows were found.", Style::Success);
        return ValidationOutcome::Pass;
    }

    ctx.report.add_sentence(
        format!(
            "{} duplicate rows were found (repeats of an earlier row).",
            duplicates.len()
        ),
        Style::Highlight,
    );
    add_preview(ctx.report, &row_labels(&duplicates), MAX_LISTED);
    tracing::info!(count = duplicates.len(), "duplicate rows");
    ValidationOutcome::Fail(FailDetails::Rows(duplicates))
}

/// No row is null in every column. An empty file fails outright.
pub fn no_empty_rows(ctx: &mut CheckContext<'_>) -> ValidationOutcome {
    ctx.report.add_heading("Empty rows");
    if ctx.table.is_empty() {
        ctx.report.add_sentence("The file is empty.", Style::Highlight);
        tracing::info!("file is empty");
        return ValidationOutcome::Fail(FailDetails::Rejected);
    }

    let empty: Vec<usize> = (0..ctx.table.row_count())
        .filter(|&row| ctx.table.is_row_null(row))
        .map(|row| row + 1)
        .collect();
    if empty.is_empty() {
        ctx.report
            .add_sentence("No empty rows were found.", Style::Success);
        return ValidationOutcome::Pass;
    }

    ctx.report.add_sentence(
        format!("{} empty rows were found.", empty.len()),
        Style::Highlight,
    );
    add_preview(ctx.report, &row_labels(&empty), MAX_LISTED);
    tracing::info!(count = empty.len(), "empty rows");
    ValidationOutcome::Fail(FailDetails::Rows(empty))
}
