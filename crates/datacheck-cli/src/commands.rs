use std::env;
use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result, anyhow};
use comfy_table::Table;
use tracing::{debug, info};

use datacheck_cli::chooser::{DialogChooser, IngestSource};
use datacheck_cli::pipeline::{
    OutputConfig, ValidationInputs, ValidationResult, resolve_reference_ids, run_validation,
};
use datacheck_cli::settings::Settings;
use datacheck_validate::{
    Collaborators, FileChooser, FixedChooser, NO_CABINET, NoChooser, Scope, Validator,
};

use crate::cli::{Cli, InputMode};
use crate::summary::apply_table_style;

pub fn run_list_rules() {
    let mut table = Table::new();
    table.set_header(vec!["Rule", "Legacy name", "Scope", "Status", "Description"]);
    apply_table_style(&mut table);
    for validator in Validator::all() {
        let scope = match validator.scope() {
            Scope::Table => "table",
            Scope::Column => "column",
        };
        let status = if validator.is_implemented() {
            "available"
        } else {
            "not implemented"
        };
        table.add_row(vec![
            validator.name(),
            validator.legacy_name(),
            scope,
            status,
            validator.description(),
        ]);
    }
    println!("{table}");
}

pub fn run_validate(cli: &Cli, mode: InputMode) -> Result<ValidationResult> {
    let settings = Settings::load_or_default(cli.config.as_deref())?;
    let interactive = io::stdin().is_terminal();

    let inputs = match mode {
        InputMode::Explicit => ValidationInputs {
            data: cli.paths[0].clone(),
            rules: cli.paths[1].clone(),
            reference_ids: cli.paths[2].clone(),
        },
        InputMode::Interactive => choose_inputs(&DialogChooser::new(), &settings)?,
    };
    debug!(?inputs, "resolved inputs");

    let cabinet = match &cli.cabinet {
        Some(cabinet) => cabinet.clone(),
        None if interactive => prompt_cabinet()?,
        None => NO_CABINET.to_string(),
    };

    let options = settings.load_options()?;
    let source = IngestSource::new(options);
    let collaborators = match &cli.compare {
        Some(previous) => Collaborators::new(source, FixedChooser::new(previous)),
        None if interactive => Collaborators::new(source, start_in_data_dir(&inputs)),
        None => Collaborators::new(source, NoChooser),
    };

    let mut output = OutputConfig::from_settings(&settings);
    output.dir.clone_from(&cli.output_dir);
    if let Some(format) = cli.format {
        output.format = format.into();
    }

    let result = run_validation(&inputs, &cabinet, &settings, &output, collaborators)?;
    info!(report = %result.report_path.display(), "validation finished");
    Ok(result)
}

fn choose_inputs(chooser: &dyn FileChooser, settings: &Settings) -> Result<ValidationInputs> {
    let data = chooser
        .choose_file("Select the data file to validate")
        .map_err(|_| anyhow!("no data file selected"))?;
    let rules = chooser
        .choose_file("Select the rules file")
        .map_err(|_| anyhow!("no rules file selected"))?;
    let cwd = env::current_dir().context("resolve working directory")?;
    let reference_ids = resolve_reference_ids(&data, &settings.reference_ids_file, &cwd);
    Ok(ValidationInputs {
        data,
        rules,
        reference_ids,
    })
}

fn start_in_data_dir(inputs: &ValidationInputs) -> DialogChooser {
    match inputs.data.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => DialogChooser::new().with_start_dir(dir),
        _ => DialogChooser::new(),
    }
}

fn prompt_cabinet() -> Result<String> {
    print!("Enter the cabinet number: ");
    io::stdout().flush().context("flush prompt")?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read cabinet number")?;
    let cabinet = line.trim();
    Ok(if cabinet.is_empty() {
        NO_CABINET.to_string()
    } else {
        cabinet.to_string()
    })
}
