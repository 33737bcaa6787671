//! Check framework
//!
//! A [`Check`] looks at one aspect of the runtime (declared contracts,
//! representation identities, arithmetic edge cases, literal parsing) and
//! reports every mismatch it finds as a [`Violation`].

pub mod arithmetic;
pub mod contracts;
pub mod identity;
pub mod literals;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::CheckSuite;
use crate::error::Result;
use crate::validator::TypeContractValidator;

/// Categories of conformance checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckCategory {
    /// Declared kind, signedness, size and range of named types
    Contract,
    /// Identities every integer representation must satisfy
    Representation,
    /// Declared outcomes of arithmetic edge cases
    Arithmetic,
    /// Numeric literal forms
    Literal,
}

impl CheckCategory {
    pub const ALL: [CheckCategory; 4] = [
        CheckCategory::Contract,
        CheckCategory::Representation,
        CheckCategory::Arithmetic,
        CheckCategory::Literal,
    ];
}

impl fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckCategory::Contract => write!(f, "contract"),
            CheckCategory::Representation => write!(f, "representation"),
            CheckCategory::Arithmetic => write!(f, "arithmetic"),
            CheckCategory::Literal => write!(f, "literal"),
        }
    }
}

/// A single detected mismatch between expected and actual behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Identifier of the check that found the mismatch
    pub check_id: String,
    /// Category of that check
    pub category: CheckCategory,
    /// Type name, case description or literal the mismatch is about
    pub name: String,
    /// Which property mismatched (e.g. "max", "outcome")
    pub field: String,
    /// Declared value
    pub expected: String,
    /// Observed value
    pub actual: String,
}

impl Violation {
    pub fn new(
        check_id: impl Into<String>,
        category: CheckCategory,
        name: impl Into<String>,
        field: impl Into<String>,
        expected: impl fmt::Display,
        actual: impl fmt::Display,
    ) -> Self {
        Self {
            check_id: check_id.into(),
            category,
            name: name.into(),
            field: field.into(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// One-line description of the mismatch
    pub fn message(&self) -> String {
        format!(
            "{} of '{}': expected {}, got {}",
            self.field, self.name, self.expected, self.actual
        )
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.category, self.check_id, self.message())
    }
}

/// Everything a check may look at
pub struct CheckContext<'a> {
    pub suite: &'a CheckSuite,
    pub validator: &'a TypeContractValidator,
}

impl<'a> CheckContext<'a> {
    pub fn new(suite: &'a CheckSuite, validator: &'a TypeContractValidator) -> Self {
        Self { suite, validator }
    }
}

/// A unit of conformance checking.
///
/// `evaluate` returns every violation it finds. An `Err` means the check
/// could not run at all (unknown type, malformed input) and is reported
/// separately from violations.
pub trait Check: Send + Sync {
    /// Unique identifier for this check
    fn id(&self) -> &str;

    /// Human-readable name
    fn name(&self) -> &str;

    /// What the check verifies
    fn description(&self) -> &str;

    fn category(&self) -> CheckCategory;

    /// Number of suite items this check will look at
    fn subject_count(&self, _context: &CheckContext<'_>) -> usize {
        0
    }

    fn evaluate(&self, context: &CheckContext<'_>) -> Result<Vec<Violation>>;
}

/// A boxed check for dynamic dispatch
pub type BoxedCheck = Box<dyn Check>;
