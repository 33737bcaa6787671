//! End-to-end tests for the numcontract CLI

use clap::Parser;
use numcontract_cli::{run, ExitCode, NumcontractCli};
use std::io::Write;

fn config_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn run_args(args: &[&str]) -> (Result<ExitCode, numcontract_cli::CliError>, String) {
    colored::control::set_override(false);
    let cli = NumcontractCli::try_parse_from(args).unwrap();
    let mut out = Vec::new();
    let result = run(cli, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_check_builtin_suite_passes() {
    let (result, output) = run_args(&["numcontract", "check"]);
    assert_eq!(result.unwrap(), ExitCode::Success);
    assert!(output.contains("All 4 checks passed"));
}

#[test]
fn test_wrong_contract_reports_violations() {
    let file = config_file(
        ".toml",
        r#"
            [[contracts]]
            name = "short"
            kind = "integer"
            signed = true
            size_bytes = 4
            min = "-2147483648"
            max = "2147483647"
        "#,
    );
    let path = file.path().to_str().unwrap();

    let (result, output) = run_args(&["numcontract", "check", "--config", path, "--format", "json"]);
    assert_eq!(result.unwrap(), ExitCode::ViolationsFound);

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    let fields: Vec<&str> = value["violations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["size_bytes", "min", "max"]);
}

#[test]
fn test_unknown_type_is_configuration_error() {
    let file = config_file(
        ".yaml",
        "contracts:\n  - name: quad\n    kind: integer\n    size_bytes: 8\n    min: \"-9223372036854775808\"\n    max: \"9223372036854775807\"\n",
    );
    let path = file.path().to_str().unwrap();

    let (result, output) = run_args(&["numcontract", "check", "--config", path]);
    let err = result.unwrap_err();
    assert_eq!(err.exit_code(), ExitCode::ConfigurationError);
    assert!(output.is_empty());
}

#[test]
fn test_unsupported_config_extension() {
    let file = config_file(".ini", "checks = none");
    let path = file.path().to_str().unwrap();

    let (result, _) = run_args(&["numcontract", "check", "--config", path]);
    assert_eq!(result.unwrap_err().exit_code(), ExitCode::InvalidInput);
}

#[test]
fn test_config_disables_categories() {
    let file = config_file(".json", r#"{"checks": {"arithmetic": false, "literals": false}}"#);
    let path = file.path().to_str().unwrap();

    let (result, output) = run_args(&["numcontract", "check", "--config", path, "--format", "yaml"]);
    assert_eq!(result.unwrap(), ExitCode::Success);

    let value: serde_yaml::Value = serde_yaml::from_str(&output).unwrap();
    assert_eq!(value["checks_run"].as_u64(), Some(2));
}

#[test]
fn test_list_shows_runtime_types() {
    let (result, output) = run_args(&["numcontract", "list"]);
    assert_eq!(result.unwrap(), ExitCode::Success);
    assert!(output.contains("decimal"));
    assert!(output.contains("79228162514264337593543950335"));
}
