//! Command-line argument parsing.

use std::path::PathBuf;

use crate::error::CliError;

pub const USAGE: &str = "\
Presupuesto - carpentry budget totals

Usage: presupuesto [OPTIONS]

Options:
  -i, --input <PATH>     Budget JSON document (default: read standard input)
  -l, --labor <PERCENT>  Labor percentage, overrides the document
      --json             Print the summary as JSON instead of text
  -h, --help             Show this help message

Environment:
  PRESUPUESTO_DEFAULT_LABOR_PERCENTAGE  Labor percentage when none is given (default: 0)
  PRESUPUESTO_LOG                       Log filter (default: info)";

/// Parsed command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    pub input: Option<PathBuf>,
    pub labor_percentage: Option<f64>,
    pub json: bool,
    pub help: bool,
}

impl Args {
    /// Parses arguments, excluding the program name.
    pub fn parse<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Args::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--input" | "-i" => {
                    let path = args
                        .next()
                        .ok_or_else(|| CliError::Usage(format!("{arg} needs a path")))?;
                    parsed.input = Some(PathBuf::from(path));
                }
                "--labor" | "-l" => {
                    let value = args
                        .next()
                        .ok_or_else(|| CliError::Usage(format!("{arg} needs a percentage")))?;
                    let pct = value.trim().parse::<f64>().map_err(|_| {
                        CliError::Usage(format!("{arg} expects a number, got '{value}'"))
                    })?;
                    parsed.labor_percentage = Some(pct);
                }
                "--json" => parsed.json = true,
                "--help" | "-h" => parsed.help = true,
                other => return Err(CliError::Usage(format!("unknown argument '{other}'"))),
            }
        }

        Ok(parsed)
    }
}
