//! numcontract core
//!
//! Checks that the running program's primitive numeric types obey a declared
//! contract, and that arithmetic at the edges of those types behaves as
//! declared.
//!
//! ## Architecture
//!
//! 1. **Contracts** (`contract`): declared kind, signedness, size and range
//!    of a named numeric type.
//!
//! 2. **Introspection** (`introspect`): the runtime's actual representation
//!    of each type, read from `size_of`, `MIN` and `MAX`.
//!
//! 3. **Arithmetic** (`arith`): edge case expressions evaluated natively in
//!    their declared type, with overflow, wraparound, division by zero and
//!    NaN reported as distinct failure kinds.
//!
//! 4. **Validator** (`validator`): compares contracts and edge cases with
//!    observed behavior, collecting every mismatch as a [`Violation`].
//!
//! 5. **Engine** (`engine`): runs registered checks over a [`CheckSuite`]
//!    and builds a [`ConformanceReport`].
//!
//! 6. **Config** (`config`): the built-in suite plus file-based overrides.
//!
//! ## Example
//!
//! ```rust
//! use numcontract_core::{TypeContract, TypeContractValidator};
//!
//! let validator = TypeContractValidator::new();
//! let int = TypeContract::integer("int", true, 4, -2_147_483_648, 2_147_483_647);
//! let violations = validator.validate(&[int]).unwrap();
//! assert!(violations.is_empty());
//! ```

pub mod arith;
pub mod builtin;
pub mod config;
pub mod contract;
pub mod engine;
pub mod error;
pub mod introspect;
pub mod literal;
pub mod number;
pub mod validator;

pub use arith::{
    ArithOp, ArithmeticEdgeCase, Expectation, Expression, FailureKind, FloatType, IntType,
    Outcome, OverflowMode,
};
pub use config::{CheckSelection, CheckSuite, CheckerConfig, ConfigFormat};
pub use contract::{ContractEntry, TypeContract};
pub use engine::checks::{Check, CheckCategory, CheckContext, Violation};
pub use engine::{CategorySummary, ConformanceEngine, ConformanceReport};
pub use error::{CheckError, Result};
pub use introspect::{TypeDescriptor, TypeRegistry};
pub use literal::{parse_int_literal, LiteralCase};
pub use number::{Number, NumericKind};
pub use validator::TypeContractValidator;

/// Crate version (from Cargo.toml)
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
