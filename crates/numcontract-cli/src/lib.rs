//! numcontract CLI
//!
//! Command-line front end for `numcontract-core`: runs the conformance
//! checks, renders the report, and maps the outcome to an exit code.

pub mod commands;
pub mod error;
pub mod output;

pub use commands::{NumcontractCli, NumcontractCommands};
pub use error::CliError;
pub use output::{CheckOutput, OutputFormat};

use numcontract_core::ConformanceReport;
use std::io::Write;

/// Exit codes for CLI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// All checks passed
    Success = 0,
    /// At least one violation was found
    ViolationsFound = 1,
    /// Invalid input or arguments
    InvalidInput = 3,
    /// File not found or inaccessible
    FileError = 4,
    /// Unknown type, malformed contract or invalid edge case
    ConfigurationError = 5,
    /// Internal error
    InternalError = 10,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl ExitCode {
    /// Determine exit code from a conformance report
    pub fn from_report(report: &ConformanceReport) -> Self {
        if report.passed {
            ExitCode::Success
        } else {
            ExitCode::ViolationsFound
        }
    }
}

/// Run the CLI, writing results to `out`
pub fn run(cli: NumcontractCli, out: &mut dyn Write) -> Result<ExitCode, CliError> {
    match cli.command {
        NumcontractCommands::Check {
            config,
            format,
            only,
            skip,
        } => commands::execute_check(config, format, &only, &skip, out),
        NumcontractCommands::List { config, format } => {
            commands::execute_list(config, format, out)
        }
    }
}

/// Run the CLI against stdout and return the exit code
///
/// With `--quiet`, results are discarded and only the exit code and errors
/// remain.
///
/// ```rust,no_run
/// use clap::Parser;
/// use numcontract_cli::{run_cli, NumcontractCli};
///
/// let cli = NumcontractCli::parse();
/// let exit_code = run_cli(cli);
/// std::process::exit(exit_code.into());
/// ```
pub fn run_cli(cli: NumcontractCli) -> ExitCode {
    let result = if cli.quiet {
        run(cli, &mut std::io::sink())
    } else {
        run(cli, &mut std::io::stdout().lock())
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use numcontract_core::{CheckSuite, ConformanceEngine, TypeContract};

    #[test]
    fn test_exit_code_conversion() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::ViolationsFound), 1);
        assert_eq!(i32::from(ExitCode::InvalidInput), 3);
        assert_eq!(i32::from(ExitCode::FileError), 4);
        assert_eq!(i32::from(ExitCode::ConfigurationError), 5);
        assert_eq!(i32::from(ExitCode::InternalError), 10);
    }

    #[test]
    fn test_exit_code_from_report() {
        let engine = ConformanceEngine::new();
        let report = engine.run(&CheckSuite::builtin()).unwrap();
        assert_eq!(ExitCode::from_report(&report), ExitCode::Success);

        let mut suite = CheckSuite::builtin();
        suite.merge_contracts([TypeContract::integer("int", false, 4, 0, 4_294_967_295)]);
        let report = engine.run(&suite).unwrap();
        assert_eq!(ExitCode::from_report(&report), ExitCode::ViolationsFound);
    }

    #[test]
    fn test_run_writes_to_output() {
        let cli = NumcontractCli::try_parse_from(["numcontract", "list", "--format", "json"]).unwrap();
        let mut out = Vec::new();
        let code = run(cli, &mut out).unwrap();
        assert_eq!(code, ExitCode::Success);
        assert!(!out.is_empty());
    }

    #[test]
    fn test_run_cli_maps_errors() {
        let cli = NumcontractCli::try_parse_from([
            "numcontract",
            "--quiet",
            "check",
            "--config",
            "/nonexistent/numcontract.yaml",
        ])
        .unwrap();
        assert_eq!(run_cli(cli), ExitCode::FileError);
    }
}
