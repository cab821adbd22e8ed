use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use wxbench::data::loader;
use wxbench::validate::validate;
use wxbench::ConfigError;

/// Load an evaluation config, check it and print what it will run.
#[derive(Debug, Parser)]
#[command(name = "wxbench", version, about)]
struct Cli {
    /// Config file (.json, .yaml or .yml)
    config: PathBuf,

    /// Skip consistency checks
    #[arg(long)]
    no_validate: bool,

    /// Print the normalised config as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = loader::load_file(&cli.config)?;

    if !cli.no_validate {
        if let Err(problems) = validate(&config) {
            eprint!("{}", problem_report(&cli.config, &problems));
            return Ok(ExitCode::FAILURE);
        }
        info!("{} is consistent", cli.config.display());
    }

    if cli.json {
        let text = serde_json::to_string_pretty(&config).context("serializing JSON")?;
        println!("{text}");
    } else {
        println!("variables: {}", config.required_variables().join(", "));
        for line in config.summary() {
            println!("{line}");
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// One line per problem, then a count.
fn problem_report(path: &Path, problems: &[ConfigError]) -> String {
    let mut out = String::new();
    for p in problems {
        out.push_str(&format!("invalid: {p}\n"));
    }
    out.push_str(&format!("{} problem(s) in {}\n", problems.len(), path.display()));
    out
}
