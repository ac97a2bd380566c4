//! Plain-text rendering.

use std::fmt::Write;

use crate::report::{Report, Section, Separator, Style};

const LINE_WIDTH: usize = 72;

/// Render `report` as plain text.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    for section in report.sections() {
        match section {
            Section::Title(text) => {
                let width = text.chars().count();
                let _ = writeln!(out, "{text}");
                let _ = writeln!(out, "{}", "=".repeat(width));
            }
            Section::Heading(text) => {
                let width = text.chars().count();
                let _ = writeln!(out, "{text}");
                let _ = writeln!(out, "{}", "-".repeat(width));
            }
            Section::Sentence { text, style } => {
                let _ = writeln!(out, "{}{text}", marker(*style));
            }
            Section::Emphasized { text, style } => {
                let _ = writeln!(out, "{}**{text}**", marker(*style));
            }
            Section::List(items) => {
                for item in items {
                    let _ = writeln!(out, "  - {item}");
                }
            }
            Section::Table { headers, rows } => write_table(&mut out, headers.as_deref(), rows),
            Section::Separator(kind) => {
                let _ = writeln!(out, "{}", separator_line(*kind));
            }
            Section::Spacer => out.push('\n'),
        }
    }
    out
}

fn marker(style: Style) -> &'static str {
    match style {
        Style::Normal => "",
        Style::Success => "[ok] ",
        Style::Highlight => "[!] ",
    }
}

fn separator_line(kind: Separator) -> String {
    match kind {
        Separator::Modern => format!("{:^LINE_WIDTH$}", "~".repeat(LINE_WIDTH * 4 / 5)),
        Separator::Simple => "-".repeat(LINE_WIDTH),
        Separator::Thick => "=".repeat(LINE_WIDTH),
    }
}

fn write_table(out: &mut String, headers: Option<&[String]>, rows: &[Vec<String>]) {
    let columns = headers
        .map_or(0, <[String]>::len)
        .max(rows.iter().map(Vec::len).max().unwrap_or(0));
    let mut widths = vec![0usize; columns];
    for row in headers.into_iter().chain(rows.iter().map(Vec::as_slice)) {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(cell.chars().count());
        }
    }

    if let Some(headers) = headers {
        write_row(out, headers, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        let _ = writeln!(out, "{}", rule.join("-+-"));
    }
    for row in rows {
        write_row(out, row, &widths);
    }
}

fn write_row(out: &mut String, row: &[String], widths: &[usize]) {
    let cells: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(idx, width)| {
            let cell = row.get(idx).map_or("", String::as_str);
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    let _ = writeln!(out, "{}", cells.join(" | ").trim_end());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_sections_in_order() {
        let mut report = Report::new();
        report.add_title("Validation report");
        report.add_heading("Null values in RUT");
        report.add_sentence("2 null values", Style::Highlight);
        report.add_list(["row 3", "row 7"]);
        report.add_table(
            vec![
                vec!["RUT".to_string(), "integer".to_string()],
                vec!["COMUNA".to_string(), "text".to_string()],
            ],
            Some(vec!["Column".to_string(), "Type".to_string()]),
        );
        report.add_separator(Separator::Simple);

        insta::assert_snapshot!(render_text(&report), @r"
        Validation report
        =================

        Null values in RUT
        ------------------
        [!] 2 null values
          - row 3
          - row 7

        Column | Type
        -------+--------
        RUT    | integer
        COMUNA | text

        ------------------------------------------------------------------------
        ");
    }

    #[test]
    fn emphasized_text_is_marked() {
        let mut report = Report::new();
        report.add_emphasized("0 repeated values", Style::Success);
        assert_eq!(render_text(&report), "[ok] **0 repeated values**\n");
    }

    #[test]
    fn modern_separator_is_centered() {
        let line = separator_line(Separator::Modern);
        assert_eq!(line.chars().count(), LINE_WIDTH);
        assert!(line.trim().chars().all(|c| c == '~'));
    }
}
