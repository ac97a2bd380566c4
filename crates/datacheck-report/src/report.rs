//! Append-only report builder.

/// Placeholder texts for empty input.
pub const UNTITLED: &str = "Untitled";
pub const NO_HEADING: &str = "No heading";
pub const NO_MESSAGE: &str = "No message";
pub const NO_LIST: &str = "No items";
pub const NO_TABLE_DATA: &str = "No data to show in the table";

/// Visual weight of a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Normal,
    /// Positive result.
    Success,
    /// Finding or failure.
    Highlight,
}

impl Style {
    pub const fn class(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Success => "success",
            Self::Highlight => "highlight",
        }
    }
}

/// Horizontal rule variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    #[default]
    Modern,
    Simple,
    Thick,
}

impl Separator {
    pub const fn class(&self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Simple => "simple",
            Self::Thick => "thick",
        }
    }
}

/// One block of report content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Title(String),
    Heading(String),
    Sentence { text: String, style: Style },
    Emphasized { text: String, style: Style },
    List(Vec<String>),
    Table {
        headers: Option<Vec<String>>,
        rows: Vec<Vec<String>>,
    },
    Separator(Separator),
    Spacer,
}

/// Ordered sections, appended by validators and rendered once at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    sections: Vec<Section>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn add_title(&mut self, title: impl Into<String>) {
        let title = non_blank(title.into(), UNTITLED);
        self.sections.push(Section::Title(title));
        self.sections.push(Section::Spacer);
    }

    pub fn add_heading(&mut self, heading: impl Into<String>) {
        let heading = non_blank(heading.into(), NO_HEADING);
        self.sections.push(Section::Heading(heading));
    }

    pub fn add_sentence(&mut self, text: impl Into<String>, style: Style) {
        let text = text.into();
        if text.trim().is_empty() {
            self.sections.push(Section::Sentence {
                text: NO_MESSAGE.to_string(),
                style: Style::Normal,
            });
            return;
        }
        self.sections.push(Section::Sentence { text, style });
    }

    /// Bold, standalone line.
    pub fn add_emphasized(&mut self, text: impl Into<String>, style: Style) {
        let text = non_blank(text.into(), NO_MESSAGE);
        self.sections.push(Section::Emphasized { text, style });
    }

    pub fn add_list<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        if items.is_empty() {
            self.add_sentence(NO_LIST, Style::Normal);
            return;
        }
        self.sections.push(Section::List(items));
        self.sections.push(Section::Spacer);
    }

    pub fn add_table(&mut self, rows: Vec<Vec<String>>, headers: Option<Vec<String>>) {
        if rows.is_empty() {
            self.add_sentence(NO_TABLE_DATA, Style::Normal);
            return;
        }
        self.sections.push(Section::Table { headers, rows });
        self.sections.push(Section::Spacer);
    }

    pub fn add_separator(&mut self, separator: Separator) {
        self.sections.push(Section::Separator(separator));
    }

    pub fn add_spacer(&mut self) {
        self.sections.push(Section::Spacer);
    }

    /// All sentence-like texts, in order. Mostly useful for assertions.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().filter_map(|section| match section {
            Section::Title(text) | Section::Heading(text) => Some(text.as_str()),
            Section::Sentence { text, .. } | Section::Emphasized { text, .. } => {
                Some(text.as_str())
            }
            _ => None,
        })
    }

    /// True when any sentence-like text contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.texts().any(|text| text.contains(needle))
    }
}

fn non_blank(text: String, placeholder: &str) -> String {
    if text.trim().is_empty() {
        placeholder.to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs_use_placeholders() {
        let mut report = Report::new();
        report.add_title("");
        report.add_heading("  ");
        report.add_sentence("", Style::Highlight);
        report.add_list(Vec::<String>::new());
        report.add_table(Vec::new(), None);

        let texts: Vec<&str> = report.texts().collect();
        assert_eq!(
            texts,
            vec![UNTITLED, NO_HEADING, NO_MESSAGE, NO_LIST, NO_TABLE_DATA]
        );
    }

    #[test]
    fn sections_keep_append_order() {
        let mut report = Report::new();
        report.add_heading("Nulls");
        report.add_sentence("0 null values", Style::Success);
        report.add_separator(Separator::Simple);

        assert_eq!(
            report.sections(),
            &[
                Section::Heading("Nulls".to_string()),
                Section::Sentence {
                    text: "0 null values".to_string(),
                    style: Style::Success,
                },
                Section::Separator(Separator::Simple),
            ]
        );
        assert!(report.mentions("null values"));
    }

    #[test]
    fn lists_accept_any_string_iterator() {
        let mut report = Report::new();
        report.add_list(["RUT", "MONTO"]);
        assert_eq!(
            report.sections()[0],
            Section::List(vec!["RUT".to_string(), "MONTO".to_string()])
        );
    }
}
