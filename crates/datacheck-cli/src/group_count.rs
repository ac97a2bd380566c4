//! Group size report over fixed-width `.txt` exports.
//!
//! Every line of at least [`MIN_LINE_LEN`] characters belongs to the group
//! named by its first [`GROUP_ID_LEN`] characters. Groups with fewer than
//! [`REVIEW_BELOW`] members are flagged for review.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use datacheck_model::format_thousands;
use datacheck_report::{Report, Separator, Style};

pub const MIN_LINE_LEN: usize = 24;
pub const GROUP_ID_LEN: usize = 13;
/// Groups smaller than this need review.
pub const REVIEW_BELOW: usize = 11;
/// Groups smaller than this (but not under review) are low.
pub const LOW_BELOW: usize = 50;

/// Size class of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupStatus {
    Review,
    Low,
    Normal,
}

impl GroupStatus {
    pub fn of(count: usize) -> Self {
        if count < REVIEW_BELOW {
            Self::Review
        } else if count < LOW_BELOW {
            Self::Low
        } else {
            Self::Normal
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Review => "Review",
            Self::Low => "Low",
            Self::Normal => "Normal",
        }
    }
}

/// Group counts of one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupCounts {
    /// `(group id, lines)`, ascending by count then id.
    pub groups: Vec<(String, usize)>,
    /// Lines that were counted.
    pub counted: usize,
    /// Lines shorter than [`MIN_LINE_LEN`].
    pub ignored: usize,
}

impl GroupCounts {
    pub fn from_text(text: &str) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut result = Self::default();
        for line in text.lines() {
            if line.chars().count() < MIN_LINE_LEN {
                debug!(line, "ignoring short line");
                result.ignored += 1;
                continue;
            }
            let id: String = line.chars().take(GROUP_ID_LEN).collect();
            *counts.entry(id).or_default() += 1;
            result.counted += 1;
        }
        result.groups = counts.into_iter().collect();
        result
            .groups
            .sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        result
    }

    /// Groups that need review.
    pub fn flagged(&self) -> usize {
        self.groups
            .iter()
            .filter(|(_, count)| GroupStatus::of(*count) == GroupStatus::Review)
            .count()
    }
}

/// Counts of one scanned file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCounts {
    pub name: String,
    pub counts: GroupCounts,
}

/// Count groups in every `.txt` file of `dir`, sorted by file name.
pub fn scan_folder(dir: &Path) -> Result<Vec<FileCounts>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("read folder {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    paths.sort();

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(file = %name, error = %err, "skipping unreadable file");
                continue;
            }
        };
        let counts = GroupCounts::from_text(&String::from_utf8_lossy(&bytes));
        info!(file = %name, groups = counts.groups.len(), lines = counts.counted, "counted groups");
        files.push(FileCounts { name, counts });
    }
    Ok(files)
}

/// Build the group count report.
pub fn build_report(files: &[FileCounts], generated: NaiveDateTime) -> Report {
    let mut report = Report::new();
    report.add_title("Group count report");

    let flagged: Vec<&str> = files
        .iter()
        .filter(|file| file.counts.flagged() > 0)
        .map(|file| file.name.as_str())
        .collect();
    if flagged.is_empty() {
        report.add_sentence(
            format!("No file has groups with fewer than {REVIEW_BELOW} members."),
            Style::Success,
        );
    } else {
        report.add_sentence(
            format!("Some files have groups with fewer than {REVIEW_BELOW} members."),
            Style::Highlight,
        );
        report.add_sentence(
            format!("Files with groups of fewer than {REVIEW_BELOW} members:"),
            Style::Highlight,
        );
        report.add_list(flagged);
    }
    report.add_separator(Separator::Modern);

    for (index, file) in files.iter().enumerate() {
        if index > 0 {
            report.add_separator(Separator::Simple);
        }
        add_file_section(&mut report, file);
    }

    report.add_separator(Separator::Thick);
    report.add_sentence(
        format!("Report generated on {}", generated.format("%d/%m/%Y at %H:%M:%S")),
        Style::Normal,
    );
    report
}

fn add_file_section(report: &mut Report, file: &FileCounts) {
    report.add_heading(format!("File: {}", file.name));
    report.add_sentence(
        format!(
            "Lines processed: {}",
            format_thousands(file.counts.counted as i64)
        ),
        Style::Normal,
    );
    if file.counts.groups.is_empty() {
        report.add_sentence("No valid lines were found in this file.", Style::Highlight);
        return;
    }

    let rows = file
        .counts
        .groups
        .iter()
        .map(|(id, count)| {
            vec![
                id.clone(),
                format_thousands(*count as i64),
                GroupStatus::of(*count).label().to_string(),
            ]
        })
        .collect();
    report.add_table(
        rows,
        Some(vec![
            "Group id".to_string(),
            "Lines".to_string(),
            "Status".to_string(),
        ]),
    );
    report.add_sentence(
        format!("Distinct groups: {}", file.counts.groups.len()),
        Style::Normal,
    );
    let flagged = file.counts.flagged();
    if flagged > 0 {
        report.add_sentence(
            format!("Groups with fewer than {REVIEW_BELOW} members: {flagged}"),
            Style::Highlight,
        );
    } else {
        report.add_sentence(
            format!("Every group has at least {REVIEW_BELOW} members."),
            Style::Success,
        );
    }
}

/// Report file name without extension for the given day.
pub fn report_stem(generated: NaiveDateTime) -> String {
    format!("group_counts_{}", generated.format("%Y%m%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str) -> String {
        format!("{id:<13}{}", "x".repeat(11))
    }

    #[test]
    fn counts_lines_per_group() {
        let text = [line("A"), line("B"), line("A"), "short".to_string()].join("\n");
        let counts = GroupCounts::from_text(&text);
        assert_eq!(counts.counted, 3);
        assert_eq!(counts.ignored, 1);
        assert_eq!(
            counts.groups,
            vec![
                ("B            ".to_string(), 1),
                ("A            ".to_string(), 2)
            ]
        );
        assert_eq!(counts.flagged(), 2);
    }

    #[test]
    fn status_thresholds() {
        assert_eq!(GroupStatus::of(10), GroupStatus::Review);
        assert_eq!(GroupStatus::of(11), GroupStatus::Low);
        assert_eq!(GroupStatus::of(49), GroupStatus::Low);
        assert_eq!(GroupStatus::of(50), GroupStatus::Normal);
    }

    #[test]
    fn stem_is_dated() {
        let generated = chrono::NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        assert_eq!(report_stem(generated), "group_counts_20240305");
    }
}
