//! Numeric literal check

use tracing::trace;

use super::{Check, CheckCategory, CheckContext, Violation};
use crate::error::Result;

pub const LITERAL_CHECK_ID: &str = "numeric-literals";

/// Parses every literal case and compares it with its declared value.
///
/// A literal that fails to parse is a violation, not an error: the parser is
/// the thing under test.
pub struct LiteralCheck;

impl LiteralCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LiteralCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for LiteralCheck {
    fn id(&self) -> &str {
        LITERAL_CHECK_ID
    }

    fn name(&self) -> &str {
        "Numeric literals"
    }

    fn description(&self) -> &str {
        "Checks digit separators, radix prefixes and signs in integer literals"
    }

    fn category(&self) -> CheckCategory {
        CheckCategory::Literal
    }

    fn subject_count(&self, context: &CheckContext<'_>) -> usize {
        context.suite.literals.len()
    }

    fn evaluate(&self, context: &CheckContext<'_>) -> Result<Vec<Violation>> {
        let mut violations = Vec::new();
        for case in &context.suite.literals {
            let actual = match case.evaluate() {
                Ok(value) if value == case.expected => continue,
                Ok(value) => value.to_string(),
                Err(e) => format!("unparseable ({})", e),
            };
            trace!(literal = %case.literal, %actual, "Literal mismatch");
            violations.push(Violation::new(
                LITERAL_CHECK_ID,
                CheckCategory::Literal,
                &case.literal,
                "value",
                case.expected,
                actual,
            ));
        }
        Ok(violations)
    }
}
