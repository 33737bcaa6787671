//! numcontract
//!
//! Checks this program's primitive numeric types against declared contracts.
//!
//! # Usage
//!
//! ```bash
//! # Run every check against the built-in suite
//! numcontract check
//!
//! # Add or override contracts from a file, report as JSON
//! numcontract check --config contracts.toml --format json
//!
//! # Only arithmetic edge cases
//! numcontract check --only arithmetic
//!
//! # Show the contract table and the runtime type behind each name
//! numcontract list
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success - all checks passed
//! - 1: At least one violation
//! - 3: Invalid input or arguments
//! - 4: File not found or inaccessible
//! - 5: Configuration error (unknown type, malformed contract, invalid case)
//! - 10: Internal error

use clap::Parser;
use numcontract_cli::commands::LogFormat;
use numcontract_cli::{run_cli, NumcontractCli};
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = NumcontractCli::parse();
    init_tracing(&cli);

    let exit_code = run_cli(cli);
    std::process::exit(exit_code.into());
}

fn init_tracing(cli: &NumcontractCli) {
    let level = if cli.quiet {
        Level::ERROR
    } else {
        match cli.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    // RUST_LOG takes precedence over -v
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match cli.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}
