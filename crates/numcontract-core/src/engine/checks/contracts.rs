//! Contract table check

use super::{Check, CheckCategory, CheckContext, Violation};
use crate::error::Result;
use crate::validator::CONTRACT_CHECK_ID;

/// Compares every contract in the suite with the runtime's type
pub struct ContractTableCheck;

impl ContractTableCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ContractTableCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for ContractTableCheck {
    fn id(&self) -> &str {
        CONTRACT_CHECK_ID
    }

    fn name(&self) -> &str {
        "Contract table"
    }

    fn description(&self) -> &str {
        "Validates kind, signedness, size and range of every declared numeric type"
    }

    fn category(&self) -> CheckCategory {
        CheckCategory::Contract
    }

    fn subject_count(&self, context: &CheckContext<'_>) -> usize {
        context.suite.contracts.len()
    }

    fn evaluate(&self, context: &CheckContext<'_>) -> Result<Vec<Violation>> {
        context.validator.validate(&context.suite.contracts)
    }
}
