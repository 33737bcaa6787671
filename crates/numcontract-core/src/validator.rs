//! Contract and edge case validation against the running program

use tracing::{debug, trace};

use crate::arith::ArithmeticEdgeCase;
use crate::contract::TypeContract;
use crate::engine::checks::{CheckCategory, Violation};
use crate::error::Result;
use crate::introspect::{TypeDescriptor, TypeRegistry};

/// Check id used for contract table violations
pub const CONTRACT_CHECK_ID: &str = "contract-table";

/// Check id used for arithmetic edge case violations
pub const ARITHMETIC_CHECK_ID: &str = "arithmetic-edge-cases";

/// Compares declared contracts and edge cases with observed behavior.
///
/// Mismatches are collected, never raised: every contract and every case is
/// evaluated even when earlier ones fail. The only errors are configuration
/// errors (a type name that cannot be introspected, a malformed contract, an
/// edge case whose operands do not fit its type), and those are reported
/// before any comparison is made.
#[derive(Debug, Clone, Default)]
pub struct TypeContractValidator {
    registry: TypeRegistry,
}

impl TypeContractValidator {
    /// Validator for this program's runtime types
    pub fn new() -> Self {
        Self {
            registry: TypeRegistry::runtime(),
        }
    }

    /// Validator over a custom registry
    pub fn with_registry(registry: TypeRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Validate every contract, returning all mismatches
    pub fn validate(&self, contracts: &[TypeContract]) -> Result<Vec<Violation>> {
        let resolved = contracts
            .iter()
            .map(|contract| {
                contract.check_invariants()?;
                Ok((contract, self.registry.resolve(&contract.name)?))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut violations = Vec::new();
        for (contract, actual) in resolved {
            let found = compare_contract(contract, actual);
            debug!(
                contract = %contract.name,
                runtime_type = %actual.name,
                violations = found.len(),
                "Validated contract"
            );
            violations.extend(found);
        }
        Ok(violations)
    }

    /// Evaluate every edge case, returning all whose outcome is not as declared
    pub fn check_edge_cases(&self, cases: &[ArithmeticEdgeCase]) -> Result<Vec<Violation>> {
        let outcomes = cases
            .iter()
            .map(|case| Ok((case, case.evaluate()?)))
            .collect::<Result<Vec<_>>>()?;

        let mut violations = Vec::new();
        for (case, actual) in outcomes {
            let met = case.expectation.is_met_by(&actual);
            trace!(case = %case.description, expression = %case.expression, %actual, met, "Evaluated edge case");
            if !met {
                violations.push(Violation::new(
                    ARITHMETIC_CHECK_ID,
                    CheckCategory::Arithmetic,
                    &case.description,
                    "outcome",
                    case.expectation,
                    actual,
                ));
            }
        }
        Ok(violations)
    }
}

fn compare_contract(contract: &TypeContract, actual: &TypeDescriptor) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut mismatch = |field: &str, expected: String, found: String| {
        violations.push(Violation::new(
            CONTRACT_CHECK_ID,
            CheckCategory::Contract,
            &contract.name,
            field,
            expected,
            found,
        ));
    };

    if contract.kind != actual.kind {
        mismatch("kind", contract.kind.to_string(), actual.kind.to_string());
    }
    if contract.signed != actual.signed {
        mismatch("signed", contract.signed.to_string(), actual.signed.to_string());
    }
    if contract.size_bytes != actual.size_bytes {
        mismatch(
            "size_bytes",
            contract.size_bytes.to_string(),
            actual.size_bytes.to_string(),
        );
    }
    if contract.min != actual.min {
        mismatch("min", contract.min.to_string(), actual.min.to_string());
    }
    if contract.max != actual.max {
        mismatch("max", contract.max.to_string(), actual.max.to_string());
    }

    violations
}
