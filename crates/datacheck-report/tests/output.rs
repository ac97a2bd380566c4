//! Integration tests for report persistence.

use std::fs;

use datacheck_report::{
    DocumentInfo, Report, ReportError, ReportFormat, Separator, Style, write_report,
};
use tempfile::TempDir;

fn sample_report() -> Report {
    let mut report = Report::new();
    report.add_title("Validation report");
    report.add_heading("Duplicate rows");
    report.add_sentence("No duplicate rows found", Style::Success);
    report.add_separator(Separator::Modern);
    report
}

#[test]
fn writes_html_next_to_stem() {
    let dir = TempDir::new().unwrap();
    let info = DocumentInfo::new("Validation report");

    let path = write_report(
        &sample_report(),
        &info,
        dir.path(),
        "validations_ANEXO_6_A_BTE_202401",
        ReportFormat::Html,
    )
    .unwrap();

    assert_eq!(path, dir.path().join("validations_ANEXO_6_A_BTE_202401.html"));
    let html = fs::read_to_string(&path).unwrap();
    assert!(html.contains("<title>Validation report</title>"));
    assert!(html.contains(r#"<p class="success">No duplicate rows found</p>"#));
}

#[test]
fn writes_plain_text() {
    let dir = TempDir::new().unwrap();

    let path = write_report(
        &sample_report(),
        &DocumentInfo::default(),
        dir.path(),
        "validations_data",
        ReportFormat::Text,
    )
    .unwrap();

    assert_eq!(path.extension().unwrap(), "txt");
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("Validation report\n"));
    assert!(text.contains("[ok] No duplicate rows found"));
}

#[test]
fn missing_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = write_report(
        &sample_report(),
        &DocumentInfo::default(),
        &dir.path().join("absent"),
        "validations_data",
        ReportFormat::Html,
    );
    assert!(matches!(result, Err(ReportError::MissingDirectory { .. })));
}
