//! Group size report over the `.txt` exports of a folder.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::Parser;

use datacheck_cli::args::LogArgs;
use datacheck_cli::group_count::{build_report, report_stem, scan_folder};
use datacheck_cli::logging::init_logging;
use datacheck_report::{DocumentInfo, ReportFormat, write_report};

#[derive(Parser)]
#[command(
    name = "group-count",
    version,
    about = "Count lines per group id in every .txt file of a folder"
)]
struct Cli {
    /// Folder to scan (default: the working directory).
    #[arg(value_name = "FOLDER")]
    folder: Option<PathBuf>,

    /// Folder for the report (default: the scanned folder).
    #[arg(long = "output-dir", value_name = "DIR")]
    output_dir: Option<PathBuf>,

    #[command(flatten)]
    log: LogArgs,
}

fn main() {
    let cli = Cli::parse();
    cli.log.color.write_global();
    if let Err(error) = init_logging(&cli.log.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    if let Err(error) = run(&cli) {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let folder = match &cli.folder {
        Some(folder) => folder.clone(),
        None => std::env::current_dir().context("resolve working directory")?,
    };
    let files = scan_folder(&folder)?;
    if files.is_empty() {
        bail!("no .txt files found in {}", folder.display());
    }
    println!("Processed {} file(s) in {}", files.len(), folder.display());

    let generated = Local::now().naive_local();
    let report = build_report(&files, generated);
    let info = DocumentInfo::new(format!("Group count - {}", generated.format("%Y%m%d")))
        .with_created(generated);
    let dir = cli.output_dir.as_ref().unwrap_or(&folder);
    let path = write_report(&report, &info, dir, &report_stem(generated), ReportFormat::Html)
        .context("write report")?;
    println!("Report: {}", path.display());
    Ok(())
}
