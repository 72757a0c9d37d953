//! # Presupuesto CLI
//!
//! Reads a carpentry budget and prints its totals, including the final total
//! spelled out in Spanish ("Total en Letras").
//!
//! ## Usage
//! ```bash
//! # From a file
//! cargo run -p presupuesto-cli -- --input budget.json
//!
//! # From stdin, overriding labor, as JSON
//! cat budget.json | cargo run -p presupuesto-cli -- --labor 30 --json
//! ```
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  env ──► CliConfig ──► tracing                                          │
//! │                                                                         │
//! │  file / stdin ──► BudgetDocument ──► Budget ──► BudgetSummary           │
//! │                                                      │                  │
//! │                                       text report ◄──┴──► JSON          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod args;
mod config;
mod document;
mod error;
mod report;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::args::{Args, USAGE};
use crate::config::CliConfig;
use crate::document::BudgetDocument;
use crate::error::CliError;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::load()?;

    // stdout carries the report; logs go to stderr.
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let text = read_input(args.input.as_deref(), io::stdin().lock())?;
    print!("{}", run(&args, &config, &text)?);

    Ok(())
}

/// Turns a budget document into the report requested by `args`: the text
/// layout, or pretty JSON of the summary with `--json`.
fn run(args: &Args, config: &CliConfig, text: &str) -> Result<String, CliError> {
    let budget = BudgetDocument::parse(text)?
        .into_budget(args.labor_percentage, config.default_labor_percentage)?;
    info!(
        client = %budget.client_name(),
        lines = budget.len(),
        labor_bps = budget.labor_rate().bps(),
        "Budget loaded"
    );

    let summary = budget.summary()?;
    if !summary.words_in_range {
        warn!(final_total = %summary.final_total, "Final total is too large to spell");
    }
    info!(final_total = %summary.final_total, "Totals computed");

    if args.json {
        let mut json = serde_json::to_string_pretty(&summary)?;
        json.push('\n');
        Ok(json)
    } else {
        Ok(report::render_text(&summary))
    }
}

/// Reads the document from `path`, or from `stdin` when no path was given.
fn read_input(path: Option<&Path>, mut stdin: impl Read) -> Result<String, CliError> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut text = String::new();
            stdin.read_to_string(&mut text).map_err(CliError::Stdin)?;
            Ok(text)
        }
    }
}
