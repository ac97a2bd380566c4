//! Integration tests for the group count report.

use std::fs;

use chrono::NaiveDate;
use datacheck_cli::group_count::{build_report, scan_folder};
use datacheck_report::render_text;

fn line(id: &str) -> String {
    format!("{id}{}", "x".repeat(11))
}

#[test]
fn scans_only_txt_files_in_name_order() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.txt"), line("G000000000002") + "\n").unwrap();
    fs::write(dir.path().join("a.txt"), line("G000000000001") + "\n").unwrap();
    fs::write(dir.path().join("notes.csv"), "ignored\n").unwrap();

    let files = scan_folder(dir.path()).unwrap();
    let names: Vec<&str> = files.iter().map(|file| file.name.as_str()).collect();
    assert_eq!(names, ["a.txt", "b.txt"]);
}

#[test]
fn missing_folder_is_an_error() {
    assert!(scan_folder(std::path::Path::new("/nonexistent/exports")).is_err());
}

#[test]
fn report_text() {
    let dir = tempfile::tempdir().unwrap();
    let text = [line("G000000000001"), line("G000000000001"), "short".to_string()].join("\n");
    fs::write(dir.path().join("a.txt"), text).unwrap();

    let files = scan_folder(dir.path()).unwrap();
    let generated = NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let report = build_report(&files, generated);
    let text = render_text(&report);
    let rendered = text.lines().map(str::trim_end).collect::<Vec<_>>().join("\n");

    insta::assert_snapshot!(rendered, @r"
    Group count report
    ==================

    [!] Some files have groups with fewer than 11 members.
    [!] Files with groups of fewer than 11 members:
      - a.txt

           ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
    File: a.txt
    -----------
    Lines processed: 2
    Group id      | Lines | Status
    --------------+-------+-------
    G000000000001 | 2     | Review

    Distinct groups: 1
    [!] Groups with fewer than 11 members: 1
    ========================================================================
    Report generated on 05/03/2024 at 09:00:00
    ");
}
