//! Document metadata and output formats.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Metadata embedded in the rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    pub title: String,
    pub author: String,
    pub subject: String,
    pub created: NaiveDateTime,
}

impl DocumentInfo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_created(mut self, created: NaiveDateTime) -> Self {
        self.created = created;
        self
    }
}

impl Default for DocumentInfo {
    fn default() -> Self {
        Self {
            title: "Generated report".to_string(),
            author: "Dataset validator".to_string(),
            subject: "Automatically generated report".to_string(),
            created: Local::now().naive_local(),
        }
    }
}

/// On-disk report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Html,
    Text,
}

impl ReportFormat {
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Text => "txt",
        }
    }
}
