//! CLI command definitions for numcontract
//!
//! Clap-based commands for running conformance checks and listing the
//! contract table.

use clap::{Parser, Subcommand, ValueEnum};
use numcontract_core::{CheckCategory, CheckSelection, CheckerConfig, ConformanceEngine};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

use crate::error::CliError;
use crate::output::{CheckOutput, ContractListing, OutputFormat};
use crate::ExitCode;

/// Numeric type contract conformance checker
///
/// Verifies that this program's primitive numeric types have the declared
/// signedness, size and range, and that arithmetic at their edges behaves
/// as declared.
#[derive(Parser, Debug)]
#[command(name = "numcontract")]
#[command(about = "Check primitive numeric types against declared contracts", long_about = None)]
#[command(version)]
pub struct NumcontractCli {
    /// Output verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log line format
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: NumcontractCommands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum NumcontractCommands {
    /// Run conformance checks
    ///
    /// Runs the built-in suite, with contracts from the configuration file
    /// merged in. Exits 1 if any violation is found.
    Check {
        /// Configuration file (.toml, .yaml, .yml or .json)
        #[arg(short, long, env = "NUMCONTRACT_CONFIG")]
        config: Option<PathBuf>,

        /// Output format for results
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Only run checks in these categories
        #[arg(long, value_enum, conflicts_with = "skip")]
        only: Vec<CategoryArg>,

        /// Skip checks in these categories
        #[arg(long, value_enum)]
        skip: Vec<CategoryArg>,
    },

    /// List the contract table
    ///
    /// Shows every contract of the suite and the runtime type its name
    /// resolves to.
    List {
        /// Configuration file (.toml, .yaml, .yml or .json)
        #[arg(short, long, env = "NUMCONTRACT_CONFIG")]
        config: Option<PathBuf>,

        /// Output format for the listing
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

/// Log line formats
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Check categories as accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum CategoryArg {
    Contract,
    Representation,
    Arithmetic,
    Literal,
}

impl From<CategoryArg> for CheckCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Contract => CheckCategory::Contract,
            CategoryArg::Representation => CheckCategory::Representation,
            CategoryArg::Arithmetic => CheckCategory::Arithmetic,
            CategoryArg::Literal => CheckCategory::Literal,
        }
    }
}

/// Apply `--only` / `--skip` on top of the configured selection
pub fn resolve_selection(
    configured: CheckSelection,
    only: &[CategoryArg],
    skip: &[CategoryArg],
) -> Result<CheckSelection, CliError> {
    if !only.is_empty() && !skip.is_empty() {
        return Err(CliError::InvalidInput(
            "--only and --skip cannot be combined".to_string(),
        ));
    }

    if !only.is_empty() {
        let categories: Vec<CheckCategory> = only.iter().copied().map(Into::into).collect();
        return Ok(CheckSelection::only(&categories));
    }

    let enabled: Vec<CheckCategory> = CheckCategory::ALL
        .into_iter()
        .filter(|category| configured.is_enabled(*category))
        .filter(|category| !skip.iter().any(|s| CheckCategory::from(*s) == *category))
        .collect();
    Ok(CheckSelection::only(&enabled))
}

fn load_config(config: Option<&PathBuf>) -> Result<CheckerConfig, CliError> {
    match config {
        Some(path) => Ok(CheckerConfig::load(path)?),
        None => {
            debug!("No configuration file, using built-in suite");
            Ok(CheckerConfig::default())
        }
    }
}

/// Execute the check command
pub fn execute_check(
    config: Option<PathBuf>,
    format: OutputFormat,
    only: &[CategoryArg],
    skip: &[CategoryArg],
    out: &mut dyn Write,
) -> Result<ExitCode, CliError> {
    let config = load_config(config.as_ref())?;
    let selection = resolve_selection(config.checks, only, skip)?;
    let suite = config.suite();

    let engine = ConformanceEngine::new().with_selection(selection);
    let report = engine.run(&suite)?;

    CheckOutput::from_report(&report).render(format, out)?;
    Ok(ExitCode::from_report(&report))
}

/// Execute the list command
pub fn execute_list(
    config: Option<PathBuf>,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<ExitCode, CliError> {
    let suite = load_config(config.as_ref())?.suite();

    let engine = ConformanceEngine::new();
    let listing = ContractListing::new(&suite, engine.validator().registry());
    listing.render(format, out)?;
    Ok(ExitCode::Success)
}
