//! Configuration picked up from `NUMCONTRACT_CONFIG`
//!
//! Kept in its own test binary: the variable is process-wide and would leak
//! into the other CLI tests.

use clap::Parser;
use numcontract_cli::commands::{LogFormat, NumcontractCommands};
use numcontract_cli::{run, run_cli, ExitCode, NumcontractCli};
use std::io::Write;

#[test]
fn test_config_from_env_with_quiet_json_logging() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(
        br#"
            [[contracts]]
            name = "ushort"
            kind = "integer"
            signed = true
            size_bytes = 2
            min = "-32768"
            max = "32767"
        "#,
    )
    .unwrap();
    std::env::set_var("NUMCONTRACT_CONFIG", file.path());

    let args = ["numcontract", "--quiet", "--log-format", "json", "check", "--format", "json"];

    let cli = NumcontractCli::try_parse_from(args).unwrap();
    assert!(cli.quiet);
    assert_eq!(cli.log_format, LogFormat::Json);
    match &cli.command {
        NumcontractCommands::Check { config, .. } => {
            assert_eq!(config.as_deref(), Some(file.path()));
        }
        other => panic!("unexpected command: {:?}", other),
    }

    // --quiet discards the report but keeps the exit code
    assert_eq!(run_cli(cli), ExitCode::ViolationsFound);

    let cli = NumcontractCli::try_parse_from(args).unwrap();
    let mut out = Vec::new();
    assert_eq!(run(cli, &mut out).unwrap(), ExitCode::ViolationsFound);

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let violations = value["violations"].as_array().unwrap();
    assert!(violations
        .iter()
        .all(|v| v["name"] == serde_json::json!("ushort")));
    assert_eq!(violations[0]["field"], serde_json::json!("signed"));

    // An explicit --config wins over the environment
    let cli = NumcontractCli::try_parse_from([
        "numcontract",
        "check",
        "--config",
        "/nonexistent/numcontract.toml",
    ])
    .unwrap();
    assert_eq!(run_cli(cli), ExitCode::FileError);

    std::env::remove_var("NUMCONTRACT_CONFIG");
}
