//! Output formatting for the numcontract CLI
//!
//! Reports and listings render as JSON, YAML, or a human-readable table
//! with colored pass/fail markers.

use clap::ValueEnum;
use colored::Colorize;
use numcontract_core::{CheckCategory, CheckSuite, ConformanceReport, TypeRegistry, Violation};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::CliError;

/// Output format options for CLI results
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default)]
pub enum OutputFormat {
    /// Human-readable table format with colors
    #[default]
    Table,
    /// JSON format for machine processing
    Json,
    /// YAML format
    Yaml,
}

/// Rendered form of a conformance report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutput {
    pub passed: bool,
    pub violation_count: usize,
    pub checks_run: usize,
    pub checks_failed: usize,
    pub subjects_checked: usize,
    pub summary: String,
    pub categories: Vec<CategoryOutput>,
    pub violations: Vec<ViolationOutput>,
    pub duration_ms: u64,
    pub generated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryOutput {
    pub category: CheckCategory,
    pub checks_run: usize,
    pub subjects_checked: usize,
    pub violation_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViolationOutput {
    pub check: String,
    pub category: CheckCategory,
    pub name: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

impl CheckOutput {
    /// Create output from a conformance report
    pub fn from_report(report: &ConformanceReport) -> Self {
        let violation_count = report.violations.len();
        let summary = if report.passed {
            format!(
                "All {} checks passed ({} items)",
                report.checks_run, report.subjects_checked
            )
        } else {
            format!(
                "{} violation(s) in {} of {} checks",
                violation_count, report.checks_failed, report.checks_run
            )
        };

        let categories = report
            .category_summary
            .iter()
            .map(|(category, summary)| CategoryOutput {
                category: *category,
                checks_run: summary.checks_run,
                subjects_checked: summary.subjects_checked,
                violation_count: summary.violation_count,
            })
            .collect();

        Self {
            passed: report.passed,
            violation_count,
            checks_run: report.checks_run,
            checks_failed: report.checks_failed,
            subjects_checked: report.subjects_checked,
            summary,
            categories,
            violations: report.violations.iter().map(ViolationOutput::from_violation).collect(),
            duration_ms: report.duration_ms,
            generated_at: report.generated_at.to_rfc3339(),
        }
    }

    /// Render output in the specified format
    pub fn render(&self, format: OutputFormat, out: &mut dyn Write) -> Result<(), CliError> {
        match format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(self)?)?,
            OutputFormat::Yaml => write!(out, "{}", serde_yaml::to_string(self)?)?,
            OutputFormat::Table => self.render_table(out)?,
        }
        Ok(())
    }

    fn render_table(&self, out: &mut dyn Write) -> Result<(), CliError> {
        writeln!(out)?;
        writeln!(out, "{}", "Conformance Results".cyan().bold())?;
        writeln!(out, "{}", "=".repeat(60))?;
        writeln!(out)?;

        let status = if self.passed { "+".green() } else { "x".red() };
        writeln!(out, "{} {}", status, self.summary)?;
        writeln!(out)?;

        writeln!(out, "{}", "Categories:".cyan().bold())?;
        for category in &self.categories {
            let marker = if category.violation_count == 0 {
                "+".green()
            } else {
                "x".red()
            };
            writeln!(
                out,
                "  {} {:<16} {:>4} items  {:>4} violations",
                marker,
                category.category.to_string(),
                category.subjects_checked,
                category.violation_count
            )?;
        }

        if !self.violations.is_empty() {
            writeln!(out)?;
            writeln!(out, "{}", "Violations:".cyan().bold())?;
            writeln!(out, "{}", "-".repeat(60))?;
            for (index, violation) in self.violations.iter().enumerate() {
                violation.render_table_row(out, index + 1)?;
            }
        }

        writeln!(out)?;
        writeln!(out, "Completed in {}", format_duration(self.duration_ms).dimmed())?;
        out.flush()?;
        Ok(())
    }
}

impl ViolationOutput {
    pub fn from_violation(violation: &Violation) -> Self {
        Self {
            check: violation.check_id.clone(),
            category: violation.category,
            name: violation.name.clone(),
            field: violation.field.clone(),
            expected: violation.expected.clone(),
            actual: violation.actual.clone(),
        }
    }

    fn render_table_row(&self, out: &mut dyn Write, index: usize) -> Result<(), CliError> {
        writeln!(out)?;
        writeln!(
            out,
            "{} {}. [{}] {} of '{}'",
            "x".red(),
            index,
            self.check.dimmed(),
            self.field.bold(),
            self.name
        )?;
        writeln!(out, "  {} {}", "Expected:".dimmed(), self.expected.green())?;
        writeln!(out, "  {} {}", "Actual:  ".dimmed(), self.actual.red())?;
        Ok(())
    }
}

/// One row of the contract listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractRow {
    pub name: String,
    /// Runtime type the name resolves to, if any
    pub runtime_type: Option<String>,
    pub kind: String,
    pub signed: bool,
    pub size_bytes: usize,
    pub min: String,
    pub max: String,
}

/// The contracts of a suite alongside the runtime types they resolve to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractListing {
    pub contracts: Vec<ContractRow>,
}

impl ContractListing {
    pub fn new(suite: &CheckSuite, registry: &TypeRegistry) -> Self {
        let contracts = suite
            .contracts
            .iter()
            .map(|contract| ContractRow {
                name: contract.name.clone(),
                runtime_type: registry.resolve(&contract.name).ok().map(|d| d.name.clone()),
                kind: contract.kind.to_string(),
                signed: contract.signed,
                size_bytes: contract.size_bytes,
                min: contract.min.to_string(),
                max: contract.max.to_string(),
            })
            .collect();
        Self { contracts }
    }

    pub fn render(&self, format: OutputFormat, out: &mut dyn Write) -> Result<(), CliError> {
        match format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(self)?)?,
            OutputFormat::Yaml => write!(out, "{}", serde_yaml::to_string(self)?)?,
            OutputFormat::Table => {
                writeln!(
                    out,
                    "{:<10} {:<8} {:<13} {:<7} {:>5}  {:>32}  {:>32}",
                    "NAME", "RUNTIME", "KIND", "SIGNED", "SIZE", "MIN", "MAX"
                )?;
                for row in &self.contracts {
                    let runtime = row.runtime_type.as_deref().unwrap_or("?");
                    writeln!(
                        out,
                        "{:<10} {:<8} {:<13} {:<7} {:>5}  {:>32}  {:>32}",
                        row.name, runtime, row.kind, row.signed, row.size_bytes, row.min, row.max
                    )?;
                }
                out.flush()?;
            }
        }
        Ok(())
    }
}

/// Format a duration in human-readable format
fn format_duration(ms: u64) -> String {
    if ms >= 60000 {
        let minutes = ms / 60000;
        let seconds = (ms % 60000) / 1000;
        format!("{}m {}s", minutes, seconds)
    } else if ms >= 1000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        format!("{}ms", ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numcontract_core::{ConformanceEngine, TypeContract};

    fn render_to_string(output: &CheckOutput, format: OutputFormat) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        output.render(format, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn failing_report() -> ConformanceReport {
        let mut suite = CheckSuite::builtin();
        suite.contracts.push(TypeContract::integer("u8", true, 1, -128, 127));
        ConformanceEngine::new().run(&suite).unwrap()
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(500), "500ms");
        assert_eq!(format_duration(1500), "1.50s");
        assert_eq!(format_duration(65000), "1m 5s");
    }

    #[test]
    fn test_passing_summary() {
        let report = ConformanceEngine::new().run(&CheckSuite::builtin()).unwrap();
        let output = CheckOutput::from_report(&report);
        assert!(output.passed);
        assert_eq!(output.violation_count, 0);
        assert!(output.summary.starts_with("All 4 checks passed"));

        let table = render_to_string(&output, OutputFormat::Table);
        assert!(table.contains("Conformance Results"));
        assert!(!table.contains("Violations:"));
    }

    #[test]
    fn test_failing_table_lists_violations() {
        let output = CheckOutput::from_report(&failing_report());
        assert!(!output.passed);
        assert_eq!(output.summary, "3 violation(s) in 1 of 4 checks");

        let table = render_to_string(&output, OutputFormat::Table);
        assert!(table.contains("Violations:"));
        assert!(table.contains("1. [contract-table] signed of 'u8'"));
        assert!(table.contains("Expected: true"));
        assert!(table.contains("Actual:   false"));
    }

    #[test]
    fn test_json_output() {
        let output = CheckOutput::from_report(&failing_report());
        let json = render_to_string(&output, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["passed"], serde_json::json!(false));
        assert_eq!(value["violations"][0]["category"], serde_json::json!("contract"));
        assert_eq!(value["violations"][0]["field"], serde_json::json!("signed"));
    }

    #[test]
    fn test_contract_listing() {
        let mut suite = CheckSuite::builtin();
        suite.contracts.push(TypeContract::integer("word", false, 2, 0, 65535));
        let listing = ContractListing::new(&suite, &TypeRegistry::runtime());

        let int = listing.contracts.iter().find(|r| r.name == "int").unwrap();
        assert_eq!(int.runtime_type.as_deref(), Some("i32"));
        assert_eq!(listing.contracts.last().unwrap().runtime_type, None);

        let mut buf = Vec::new();
        listing.render(OutputFormat::Table, &mut buf).unwrap();
        let table = String::from_utf8(buf).unwrap();
        assert!(table.starts_with("NAME"));
        assert!(table.contains("18446744073709551615"));
    }
}
