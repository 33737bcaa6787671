//! Arithmetic edge case check

use super::{Check, CheckCategory, CheckContext, Violation};
use crate::error::Result;
use crate::validator::ARITHMETIC_CHECK_ID;

/// Evaluates every edge case in the suite and compares its outcome
pub struct ArithmeticCheck;

impl ArithmeticCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ArithmeticCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for ArithmeticCheck {
    fn id(&self) -> &str {
        ARITHMETIC_CHECK_ID
    }

    fn name(&self) -> &str {
        "Arithmetic edge cases"
    }

    fn description(&self) -> &str {
        "Checks overflow, wraparound, division by zero, NaN and exact decimal outcomes"
    }

    fn category(&self) -> CheckCategory {
        CheckCategory::Arithmetic
    }

    fn subject_count(&self, context: &CheckContext<'_>) -> usize {
        context.suite.edge_cases.len()
    }

    fn evaluate(&self, context: &CheckContext<'_>) -> Result<Vec<Violation>> {
        context.validator.check_edge_cases(&context.suite.edge_cases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::{ArithOp, ArithmeticEdgeCase, Expression, FloatType};
    use crate::config::CheckSuite;
    use crate::number::Number;
    use crate::validator::TypeContractValidator;

    #[test]
    fn test_builtin_edge_cases_hold() {
        let suite = CheckSuite::builtin();
        let validator = TypeContractValidator::new();
        let context = CheckContext::new(&suite, &validator);
        let violations = ArithmeticCheck::new().evaluate(&context).unwrap();
        assert!(violations.is_empty(), "{:?}", violations);
    }

    #[test]
    fn test_wrong_expectation_is_reported() {
        let suite = CheckSuite {
            edge_cases: vec![ArithmeticEdgeCase::yields(
                "binary 0.1 + 0.2 is 0.3",
                Expression::float(FloatType::F64, ArithOp::Add, 0.1, 0.2),
                Number::Float(0.3),
            )],
            ..CheckSuite::default()
        };
        let validator = TypeContractValidator::new();
        let context = CheckContext::new(&suite, &validator);

        let violations = ArithmeticCheck::new().evaluate(&context).unwrap();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].expected, "0.3");
        assert_eq!(violations[0].actual, "0.30000000000000004");
    }
}
