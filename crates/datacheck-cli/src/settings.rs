//! TOML settings file.
//!
//! Every field has a default, so an empty file (or no file) is valid.
//! Command-line flags override what the file says.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use datacheck_ingest::{DEFAULT_DELIMITER, Encoding, LoadOptions};
use datacheck_report::ReportFormat;
use serde::Deserialize;

/// Reference ids file looked up next to the data file in interactive mode.
pub const DEFAULT_REFERENCE_IDS_FILE: &str = "RUTDEPRUEBAS.CSV";

/// Prefix of the written report's file name.
pub const DEFAULT_REPORT_PREFIX: &str = "validations";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Field delimiter of the data, rules and reference ids files.
    pub delimiter: char,
    pub encoding: Encoding,
    pub reference_ids_file: String,
    pub report_format: ReportFormat,
    pub report_prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delimiter: char::from(DEFAULT_DELIMITER),
            encoding: Encoding::Auto,
            reference_ids_file: DEFAULT_REFERENCE_IDS_FILE.to_string(),
            report_format: ReportFormat::Html,
            report_prefix: DEFAULT_REPORT_PREFIX.to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let settings: Self = toml::from_str(text).context("parse settings")?;
        settings.load_options()?;
        Ok(settings)
    }

    /// Read settings from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read settings file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("settings file {}", path.display()))
    }

    /// Read settings from `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Loader options derived from the delimiter and encoding.
    pub fn load_options(&self) -> Result<LoadOptions> {
        let Ok(delimiter) = u8::try_from(self.delimiter) else {
            bail!("delimiter '{}' is not a single-byte character", self.delimiter);
        };
        if !delimiter.is_ascii() {
            bail!("delimiter '{}' is not an ASCII character", self.delimiter);
        }
        Ok(LoadOptions::default()
            .with_delimiter(delimiter)
            .with_encoding(self.encoding))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.load_options().unwrap(), LoadOptions::default());
    }

    #[test]
    fn fields_override_defaults() {
        let settings = Settings::from_toml(
            r#"
            delimiter = ","
            encoding = "latin1"
            report_format = "text"
            report_prefix = "checks"
            "#,
        )
        .unwrap();
        assert_eq!(settings.report_format, ReportFormat::Text);
        assert_eq!(settings.report_prefix, "checks");
        assert_eq!(settings.reference_ids_file, DEFAULT_REFERENCE_IDS_FILE);
        let options = settings.load_options().unwrap();
        assert_eq!(options.delimiter, b',');
        assert_eq!(options.encoding, Encoding::Latin1);
    }

    #[test]
    fn rejects_unknown_keys_and_wide_delimiters() {
        assert!(Settings::from_toml("colour = \"red\"").is_err());
        assert!(Settings::from_toml("delimiter = \"¦\"").is_err());
    }
}
