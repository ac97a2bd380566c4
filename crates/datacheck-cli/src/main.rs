//! Dataset validator CLI.

use clap::{CommandFactory, Parser};
use datacheck_cli::logging::init_logging;

mod cli;
mod commands;
mod summary;

use crate::cli::Cli;
use crate::commands::{run_list_rules, run_validate};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.log.color.write_global();
    if let Err(error) = init_logging(&cli.log.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    if cli.list_rules {
        run_list_rules();
        return;
    }

    let Some(mode) = cli.input_mode() else {
        eprintln!(
            "error: expected 3 paths (DATA RULES REFERENCE_IDS) or none, got {}",
            cli.paths.len()
        );
        eprintln!("{}", Cli::command().render_usage());
        std::process::exit(2);
    };

    let exit_code = match run_validate(&cli, mode) {
        Ok(result) => {
            print_summary(&result);
            0
        }
        Err(error) => {
            tracing::error!(error = %error, "validation aborted");
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}
