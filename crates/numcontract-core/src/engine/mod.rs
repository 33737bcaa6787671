//! Conformance engine
//!
//! Runs registered checks over a [`CheckSuite`] and aggregates their
//! violations into a [`ConformanceReport`]. Checks are independent: a check
//! that reports violations never prevents the others from running.

pub mod checks;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::config::{CheckSelection, CheckSuite};
use crate::error::Result;
use crate::validator::TypeContractValidator;
use checks::{BoxedCheck, Check, CheckCategory, CheckContext, Violation};

/// Outcome of a conformance run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// Whether no check reported a violation
    pub passed: bool,
    /// All violations, in check registration order
    pub violations: Vec<Violation>,
    /// Number of checks run
    pub checks_run: usize,
    /// Number of checks without violations
    pub checks_passed: usize,
    /// Number of checks with violations
    pub checks_failed: usize,
    /// Number of suite items examined across all checks
    pub subjects_checked: usize,
    /// Breakdown by category
    pub category_summary: BTreeMap<CheckCategory, CategorySummary>,
    /// Run duration in milliseconds
    pub duration_ms: u64,
    /// When the run finished
    pub generated_at: DateTime<Utc>,
}

impl ConformanceReport {
    /// Violations of one category
    pub fn violations_in(&self, category: CheckCategory) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(move |v| v.category == category)
    }
}

/// Summary for a single check category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub checks_run: usize,
    pub checks_passed: usize,
    pub subjects_checked: usize,
    pub violation_count: usize,
}

/// Runs conformance checks
pub struct ConformanceEngine {
    checks: Vec<Arc<dyn Check>>,
    validator: TypeContractValidator,
    selection: CheckSelection,
}

impl Default for ConformanceEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ConformanceEngine {
    /// Engine with the default checks against this program's runtime types
    pub fn new() -> Self {
        let mut engine = Self::empty();
        engine.register_default_checks();
        engine
    }

    /// Engine with no checks registered
    pub fn empty() -> Self {
        Self {
            checks: Vec::new(),
            validator: TypeContractValidator::new(),
            selection: CheckSelection::default(),
        }
    }

    fn register_default_checks(&mut self) {
        self.register(Arc::new(checks::contracts::ContractTableCheck::new()));
        self.register(Arc::new(checks::identity::IntegerIdentityCheck::new()));
        self.register(Arc::new(checks::arithmetic::ArithmeticCheck::new()));
        self.register(Arc::new(checks::literals::LiteralCheck::new()));
    }

    /// Register a check
    pub fn register(&mut self, check: Arc<dyn Check>) {
        self.checks.push(check);
    }

    /// Register a boxed check
    pub fn register_boxed(&mut self, check: BoxedCheck) {
        self.checks.push(Arc::from(check));
    }

    /// Use a custom validator (and with it, a custom type registry)
    pub fn with_validator(mut self, validator: TypeContractValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Only run checks in the selected categories
    pub fn with_selection(mut self, selection: CheckSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn checks(&self) -> &[Arc<dyn Check>] {
        &self.checks
    }

    pub fn validator(&self) -> &TypeContractValidator {
        &self.validator
    }

    /// Run every enabled check over the suite.
    ///
    /// Returns an error only for configuration problems; violations are in
    /// the report.
    pub fn run(&self, suite: &CheckSuite) -> Result<ConformanceReport> {
        let start = Instant::now();
        let context = CheckContext::new(suite, &self.validator);
        let mut builder = ReportBuilder::default();

        for check in &self.checks {
            let category = check.category();
            if !self.selection.is_enabled(category) {
                debug!(check = check.id(), %category, "Check disabled");
                continue;
            }

            let subjects = check.subject_count(&context);
            let violations = check.evaluate(&context)?;
            if violations.is_empty() {
                debug!(check = check.id(), subjects, "Check passed");
            } else {
                warn!(
                    check = check.id(),
                    subjects,
                    violations = violations.len(),
                    "Check reported violations"
                );
            }
            builder.add_check_result(category, subjects, violations);
        }

        let report = builder.finalize(start.elapsed());
        info!(
            passed = report.passed,
            checks = report.checks_run,
            violations = report.violations.len(),
            duration_ms = report.duration_ms,
            "Conformance run complete"
        );
        Ok(report)
    }
}

#[derive(Default)]
struct ReportBuilder {
    violations: Vec<Violation>,
    checks_run: usize,
    checks_passed: usize,
    checks_failed: usize,
    subjects_checked: usize,
    category_summary: BTreeMap<CheckCategory, CategorySummary>,
}

impl ReportBuilder {
    fn add_check_result(&mut self, category: CheckCategory, subjects: usize, violations: Vec<Violation>) {
        self.checks_run += 1;
        self.subjects_checked += subjects;

        let summary = self.category_summary.entry(category).or_default();
        summary.checks_run += 1;
        summary.subjects_checked += subjects;

        if violations.is_empty() {
            self.checks_passed += 1;
            summary.checks_passed += 1;
        } else {
            self.checks_failed += 1;
            summary.violation_count += violations.len();
            self.violations.extend(violations);
        }
    }

    fn finalize(self, duration: Duration) -> ConformanceReport {
        ConformanceReport {
            passed: self.violations.is_empty(),
            violations: self.violations,
            checks_run: self.checks_run,
            checks_passed: self.checks_passed,
            checks_failed: self.checks_failed,
            subjects_checked: self.subjects_checked,
            category_summary: self.category_summary,
            duration_ms: duration.as_millis() as u64,
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::TypeContract;
    use crate::error::CheckError;

    struct AlwaysFails;

    impl Check for AlwaysFails {
        fn id(&self) -> &str {
            "always-fails"
        }
        fn name(&self) -> &str {
            "Always fails"
        }
        fn description(&self) -> &str {
            "Reports one violation"
        }
        fn category(&self) -> CheckCategory {
            CheckCategory::Literal
        }
        fn evaluate(&self, _context: &CheckContext<'_>) -> Result<Vec<Violation>> {
            Ok(vec![Violation::new(
                "always-fails",
                CheckCategory::Literal,
                "x",
                "value",
                1,
                2,
            )])
        }
    }

    #[test]
    fn test_empty_engine() {
        let engine = ConformanceEngine::empty();
        assert!(engine.checks().is_empty());
        let report = engine.run(&CheckSuite::builtin()).unwrap();
        assert!(report.passed);
        assert_eq!(report.checks_run, 0);
    }

    #[test]
    fn test_default_engine_passes_builtin_suite() {
        let engine = ConformanceEngine::new();
        assert_eq!(engine.checks().len(), 4);

        let report = engine.run(&CheckSuite::builtin()).unwrap();
        assert!(report.passed, "{:?}", report.violations);
        assert_eq!(report.checks_run, 4);
        assert_eq!(report.checks_passed, 4);
        assert_eq!(report.category_summary.len(), 4);
    }

    #[test]
    fn test_failing_check_does_not_stop_others() {
        let mut engine = ConformanceEngine::empty();
        engine.register_boxed(Box::new(AlwaysFails));
        engine.register(Arc::new(checks::contracts::ContractTableCheck::new()));

        let report = engine.run(&CheckSuite::builtin()).unwrap();
        assert!(!report.passed);
        assert_eq!(report.checks_run, 2);
        assert_eq!(report.checks_failed, 1);
        assert_eq!(report.checks_passed, 1);
        assert_eq!(report.violations_in(CheckCategory::Literal).count(), 1);
        assert_eq!(
            report.category_summary[&CheckCategory::Contract].violation_count,
            0
        );
    }

    #[test]
    fn test_selection_skips_categories() {
        let engine = ConformanceEngine::new()
            .with_selection(CheckSelection::only(&[CheckCategory::Arithmetic]));
        let report = engine.run(&CheckSuite::builtin()).unwrap();
        assert_eq!(report.checks_run, 1);
        assert!(report.category_summary.contains_key(&CheckCategory::Arithmetic));
        assert!(!report.category_summary.contains_key(&CheckCategory::Contract));
    }

    #[test]
    fn test_unknown_type_aborts_run() {
        let mut suite = CheckSuite::builtin();
        suite
            .contracts
            .push(TypeContract::integer("nibble", false, 1, 0, 255));

        let err = ConformanceEngine::new().run(&suite).unwrap_err();
        assert!(matches!(err, CheckError::UnknownType(_)));
    }

    #[test]
    fn test_report_counts_subjects() {
        let suite = CheckSuite::builtin();
        let report = ConformanceEngine::new().run(&suite).unwrap();
        let integer_runtime_types = 8;
        assert_eq!(
            report.subjects_checked,
            suite.contracts.len() + integer_runtime_types + suite.edge_cases.len() + suite.literals.len()
        );
    }
}
