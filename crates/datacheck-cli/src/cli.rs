//! CLI argument definitions for the dataset validator.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use datacheck_cli::args::LogArgs;
use datacheck_report::ReportFormat;

#[derive(Parser)]
#[command(
    name = "datacheck",
    version,
    about = "Validate a delimited data file against a list of declarative rules",
    long_about = "Validate a delimited data file against a list of declarative rules.\n\n\
                  Pass DATA, RULES and REFERENCE_IDS, or no paths at all to pick the\n\
                  data and rules files through dialogs. The report is written next to\n\
                  the data file unless --output-dir is given."
)]
pub struct Cli {
    /// DATA RULES REFERENCE_IDS, or nothing for interactive selection.
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Cabinet id shown in the report header (prompted when omitted).
    #[arg(long = "cabinet", value_name = "ID")]
    pub cabinet: Option<String>,

    /// TOML settings file.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report format (defaults to the settings file, then html).
    #[arg(long = "format", value_enum)]
    pub format: Option<ReportFormatArg>,

    /// Folder for the report (default: the data file's folder).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Previous file for the row count comparison; skips the dialog.
    #[arg(long = "compare", value_name = "PATH")]
    pub compare: Option<PathBuf>,

    /// List the available validation rules and exit.
    #[arg(long = "list-rules")]
    pub list_rules: bool,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Html,
    Text,
}

impl From<ReportFormatArg> for ReportFormat {
    fn from(value: ReportFormatArg) -> Self {
        match value {
            ReportFormatArg::Html => Self::Html,
            ReportFormatArg::Text => Self::Text,
        }
    }
}

/// How the input paths were supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// All three paths on the command line.
    Explicit,
    /// No paths; ask through dialogs.
    Interactive,
}

impl Cli {
    /// Input mode for the given positional count; `None` for any other count.
    pub fn input_mode(&self) -> Option<InputMode> {
        match self.paths.len() {
            3 => Some(InputMode::Explicit),
            0 => Some(InputMode::Interactive),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("datacheck").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_paths_is_interactive() {
        assert_eq!(parse(&[]).input_mode(), Some(InputMode::Interactive));
    }

    #[test]
    fn three_paths_are_explicit() {
        let cli = parse(&["data.csv", "rules.csv", "RUTDEPRUEBAS.CSV"]);
        assert_eq!(cli.input_mode(), Some(InputMode::Explicit));
        assert_eq!(cli.paths[2], PathBuf::from("RUTDEPRUEBAS.CSV"));
    }

    #[test]
    fn other_path_counts_are_rejected() {
        assert_eq!(parse(&["data.csv"]).input_mode(), None);
        assert_eq!(parse(&["data.csv", "rules.csv"]).input_mode(), None);
        assert_eq!(parse(&["a", "b", "c", "d"]).input_mode(), None);
    }

    #[test]
    fn flags_do_not_count_as_paths() {
        let cli = parse(&["--cabinet", "G-7", "--format", "text", "a", "b", "c"]);
        assert_eq!(cli.input_mode(), Some(InputMode::Explicit));
        assert_eq!(cli.cabinet.as_deref(), Some("G-7"));
    }
}
