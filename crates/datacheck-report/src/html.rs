//! HTML rendering.
//!
//! Produces a single self-contained XHTML document with embedded styles.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::document::DocumentInfo;
use crate::error::Result;
use crate::report::{Report, Section, Separator, Style};

const STYLESHEET: &str = "
body { font-family: Helvetica, Arial, sans-serif; color: #2C3E50; max-width: 60em; margin: 2em auto; line-height: 1.4; }
h1 { font-size: 24pt; text-align: center; border: 2px solid #3498DB; padding: 10px; }
h2 { font-size: 16pt; color: #34495E; margin-top: 18pt; }
p { font-size: 11pt; margin: 0 0 6pt 0; text-align: justify; }
p.success, p.highlight, strong { font-size: 12pt; font-weight: bold; }
.success { color: #27AE60; }
.highlight { color: #E74C3C; }
table { border-collapse: collapse; margin: 0 auto 12pt auto; }
th { background: #34495E; color: whitesmoke; padding: 12px 8px; font-size: 12pt; }
td { border: 1px solid #BDC3C7; padding: 6px 8px; text-align: center; font-size: 10pt; }
tr:nth-child(odd) td { background: #ECF0F1; }
tr:nth-child(even) td { background: #F8F9FA; }
hr.modern { width: 80%; border: 0; border-top: 2px solid #3498DB; margin: 15pt auto; }
hr.thick { border: 0; border-top: 3px solid #2C3E50; margin: 10pt 0; }
hr.simple { border: 0; border-top: 1px solid #BDC3C7; margin: 8pt 0; }
div.spacer { height: 12pt; }
";

/// Write `report` as an HTML document.
pub fn render_html<W: Write>(report: &Report, info: &DocumentInfo, out: W) -> Result<()> {
    let mut xml = Writer::new_with_indent(out, b' ', 2);

    xml.write_event(Event::DocType(BytesText::from_escaped("html")))?;
    let mut html = BytesStart::new("html");
    html.push_attribute(("xmlns", "http://www.w3.org/1999/xhtml"));
    html.push_attribute(("lang", "en"));
    xml.write_event(Event::Start(html))?;

    write_head(&mut xml, info)?;

    xml.write_event(Event::Start(BytesStart::new("body")))?;
    for section in report.sections() {
        write_section(&mut xml, section)?;
    }
    xml.write_event(Event::End(BytesEnd::new("body")))?;
    xml.write_event(Event::End(BytesEnd::new("html")))?;
    Ok(())
}

/// Render to an in-memory string.
pub fn render_html_string(report: &Report, info: &DocumentInfo) -> Result<String> {
    let mut buffer = Vec::new();
    render_html(report, info, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn write_head<W: Write>(xml: &mut Writer<W>, info: &DocumentInfo) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("head")))?;

    let mut charset = BytesStart::new("meta");
    charset.push_attribute(("charset", "utf-8"));
    xml.write_event(Event::Empty(charset))?;

    let created = info.created.format("%Y-%m-%dT%H:%M:%S").to_string();
    for (name, content) in [
        ("author", info.author.as_str()),
        ("description", info.subject.as_str()),
        ("dcterms.created", created.as_str()),
    ] {
        let mut meta = BytesStart::new("meta");
        meta.push_attribute(("name", name));
        meta.push_attribute(("content", content));
        xml.write_event(Event::Empty(meta))?;
    }

    write_text_element(xml, BytesStart::new("title"), &info.title)?;
    write_text_element(xml, BytesStart::new("style"), STYLESHEET)?;
    xml.write_event(Event::End(BytesEnd::new("head")))?;
    Ok(())
}

fn write_section<W: Write>(xml: &mut Writer<W>, section: &Section) -> Result<()> {
    match section {
        Section::Title(text) => write_text_element(xml, BytesStart::new("h1"), text),
        Section::Heading(text) => write_text_element(xml, BytesStart::new("h2"), text),
        Section::Sentence { text, style } => {
            write_text_element(xml, with_style(BytesStart::new("p"), *style), text)
        }
        Section::Emphasized { text, style } => {
            xml.write_event(Event::Start(BytesStart::new("p")))?;
            write_text_element(xml, with_style(BytesStart::new("strong"), *style), text)?;
            xml.write_event(Event::End(BytesEnd::new("p")))?;
            Ok(())
        }
        Section::List(items) => {
            xml.write_event(Event::Start(BytesStart::new("ul")))?;
            for item in items {
                write_text_element(xml, BytesStart::new("li"), item)?;
            }
            xml.write_event(Event::End(BytesEnd::new("ul")))?;
            Ok(())
        }
        Section::Table { headers, rows } => write_table(xml, headers.as_deref(), rows),
        Section::Separator(kind) => write_separator(xml, *kind),
        Section::Spacer => {
            let mut spacer = BytesStart::new("div");
            spacer.push_attribute(("class", "spacer"));
            xml.write_event(Event::Start(spacer))?;
            xml.write_event(Event::End(BytesEnd::new("div")))?;
            Ok(())
        }
    }
}

fn write_table<W: Write>(
    xml: &mut Writer<W>,
    headers: Option<&[String]>,
    rows: &[Vec<String>],
) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("table")))?;
    if let Some(headers) = headers {
        xml.write_event(Event::Start(BytesStart::new("thead")))?;
        xml.write_event(Event::Start(BytesStart::new("tr")))?;
        for header in headers {
            write_text_element(xml, BytesStart::new("th"), header)?;
        }
        xml.write_event(Event::End(BytesEnd::new("tr")))?;
        xml.write_event(Event::End(BytesEnd::new("thead")))?;
    }
    xml.write_event(Event::Start(BytesStart::new("tbody")))?;
    for row in rows {
        xml.write_event(Event::Start(BytesStart::new("tr")))?;
        for cell in row {
            write_text_element(xml, BytesStart::new("td"), cell)?;
        }
        xml.write_event(Event::End(BytesEnd::new("tr")))?;
    }
    xml.write_event(Event::End(BytesEnd::new("tbody")))?;
    xml.write_event(Event::End(BytesEnd::new("table")))?;
    Ok(())
}

fn write_separator<W: Write>(xml: &mut Writer<W>, kind: Separator) -> Result<()> {
    let mut rule = BytesStart::new("hr");
    rule.push_attribute(("class", kind.class()));
    xml.write_event(Event::Empty(rule))?;
    Ok(())
}

fn with_style(mut start: BytesStart<'static>, style: Style) -> BytesStart<'static> {
    if style != Style::Normal {
        start.push_attribute(("class", style.class()));
    }
    start
}

fn write_text_element<W: Write>(xml: &mut Writer<W>, start: BytesStart<'_>, text: &str) -> Result<()> {
    let end = start.to_end().into_owned();
    xml.write_event(Event::Start(start))?;
    xml.write_event(Event::Text(BytesText::new(text)))?;
    xml.write_event(Event::End(end))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn info() -> DocumentInfo {
        let created = NaiveDate::from_ymd_opt(2024, 1, 31)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        DocumentInfo::new("Validation report").with_created(created)
    }

    #[test]
    fn renders_styled_sentences() {
        let mut report = Report::new();
        report.add_title("Validation report");
        report.add_sentence("3 null values found", Style::Highlight);
        report.add_sentence("No duplicate rows", Style::Success);

        let html = render_html_string(&report, &info()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>Validation report</h1>"));
        assert!(html.contains(r#"<p class="highlight">3 null values found</p>"#));
        assert!(html.contains(r#"<p class="success">No duplicate rows</p>"#));
        assert!(html.contains(r#"content="2024-01-31T09:30:00""#));
    }

    #[test]
    fn escapes_cell_text() {
        let mut report = Report::new();
        report.add_table(
            vec![vec!["<script>".to_string(), "a & b".to_string()]],
            Some(vec!["Value".to_string(), "Note".to_string()]),
        );

        let html = render_html_string(&report, &info()).unwrap();

        assert!(html.contains("<th>Value</th>"));
        assert!(html.contains("<td>&lt;script&gt;</td>"));
        assert!(html.contains("<td>a &amp; b</td>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn separators_carry_their_kind() {
        let mut report = Report::new();
        report.add_separator(Separator::Thick);
        let html = render_html_string(&report, &info()).unwrap();
        assert!(html.contains(r#"<hr class="thick"/>"#));
    }
}
