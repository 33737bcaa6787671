//! Integer representation identities
//!
//! Independently of what any contract declares, a signed integer type must be
//! two's complement (`min == -max - 1`) and an unsigned one must start at
//! zero. The check covers every integer type a contract in the suite names.

use std::collections::BTreeSet;
use tracing::debug;

use super::{Check, CheckCategory, CheckContext, Violation};
use crate::error::Result;
use crate::introspect::TypeDescriptor;
use crate::number::{Number, NumericKind};

pub const IDENTITY_CHECK_ID: &str = "integer-identity";

pub struct IntegerIdentityCheck;

impl IntegerIdentityCheck {
    pub fn new() -> Self {
        Self
    }

    /// Violations of the representation identities for one descriptor
    pub fn check_descriptor(descriptor: &TypeDescriptor) -> Vec<Violation> {
        let mut violations = Vec::new();
        let (Number::Int(min), Number::Int(max)) = (descriptor.min, descriptor.max) else {
            return violations;
        };

        if descriptor.signed {
            let expected = max.checked_neg().and_then(|n| n.checked_sub(1));
            if expected != Some(min) {
                let expected = match expected {
                    Some(v) => format!("-max - 1 ({})", v),
                    None => "-max - 1".to_string(),
                };
                violations.push(Violation::new(
                    IDENTITY_CHECK_ID,
                    CheckCategory::Representation,
                    &descriptor.name,
                    "min",
                    expected,
                    min,
                ));
            }
        } else if min != 0 {
            violations.push(Violation::new(
                IDENTITY_CHECK_ID,
                CheckCategory::Representation,
                &descriptor.name,
                "min",
                0,
                min,
            ));
        }

        violations
    }
}

impl Default for IntegerIdentityCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for IntegerIdentityCheck {
    fn id(&self) -> &str {
        IDENTITY_CHECK_ID
    }

    fn name(&self) -> &str {
        "Integer identities"
    }

    fn description(&self) -> &str {
        "Signed integers satisfy min == -max - 1; unsigned integers have min == 0"
    }

    fn category(&self) -> CheckCategory {
        CheckCategory::Representation
    }

    fn subject_count(&self, context: &CheckContext<'_>) -> usize {
        let registry = context.validator.registry();
        let names: BTreeSet<&str> = integer_contract_names(context)
            .filter_map(|name| registry.resolve(name).ok())
            .filter(|descriptor| descriptor.kind == NumericKind::Integer)
            .map(|descriptor| descriptor.name.as_str())
            .collect();
        names.len()
    }

    fn evaluate(&self, context: &CheckContext<'_>) -> Result<Vec<Violation>> {
        let registry = context.validator.registry();

        // Aliases collapse onto one runtime type; check each type once
        let mut seen = BTreeSet::new();
        let mut violations = Vec::new();
        for name in integer_contract_names(context) {
            let descriptor = registry.resolve(name)?;
            if descriptor.kind != NumericKind::Integer || !seen.insert(descriptor.name.clone()) {
                continue;
            }
            let found = Self::check_descriptor(descriptor);
            debug!(runtime_type = %descriptor.name, violations = found.len(), "Checked integer identities");
            violations.extend(found);
        }
        Ok(violations)
    }
}

fn integer_contract_names<'a>(context: &'a CheckContext<'_>) -> impl Iterator<Item = &'a str> {
    context
        .suite
        .contracts
        .iter()
        .filter(|c| c.kind == NumericKind::Integer)
        .map(|c| c.name.as_str())
}
