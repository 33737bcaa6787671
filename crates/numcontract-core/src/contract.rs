//! Declared numeric type contracts
//!
//! A [`TypeContract`] states what a named primitive type is expected to look
//! like: its kind, signedness, storage size and value range. Contracts are
//! static configuration; they are built once and never mutated.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::error::{CheckError, Result};
use crate::number::{Number, NumericKind};

/// Largest integer width a contract may declare
pub const MAX_INTEGER_BYTES: usize = 8;

/// Expected shape of a primitive numeric type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ContractEntry", into = "ContractEntry")]
pub struct TypeContract {
    pub name: String,
    pub kind: NumericKind,
    pub signed: bool,
    pub size_bytes: usize,
    pub min: Number,
    pub max: Number,
}

impl TypeContract {
    /// Create a contract of any kind
    pub fn new(
        name: impl Into<String>,
        kind: NumericKind,
        signed: bool,
        size_bytes: usize,
        min: Number,
        max: Number,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            signed,
            size_bytes,
            min,
            max,
        }
    }

    /// Create an integer contract
    pub fn integer(name: impl Into<String>, signed: bool, size_bytes: usize, min: i128, max: i128) -> Self {
        Self::new(
            name,
            NumericKind::Integer,
            signed,
            size_bytes,
            Number::Int(min),
            Number::Int(max),
        )
    }

    /// Create a binary floating point contract
    pub fn binary_float(name: impl Into<String>, size_bytes: usize, min: f64, max: f64) -> Self {
        Self::new(
            name,
            NumericKind::BinaryFloat,
            true,
            size_bytes,
            Number::Float(min),
            Number::Float(max),
        )
    }

    /// Create an exact decimal contract
    pub fn decimal(
        name: impl Into<String>,
        size_bytes: usize,
        min: rust_decimal::Decimal,
        max: rust_decimal::Decimal,
    ) -> Self {
        Self::new(
            name,
            NumericKind::Decimal,
            true,
            size_bytes,
            Number::Decimal(min),
            Number::Decimal(max),
        )
    }

    /// The `[min, max]` range an integer of this width and signedness must have
    pub fn implied_integer_range(signed: bool, size_bytes: usize) -> Option<(i128, i128)> {
        if size_bytes == 0 || size_bytes > MAX_INTEGER_BYTES {
            return None;
        }
        let bits = (size_bytes * 8) as u32;
        if signed {
            let half = 1i128 << (bits - 1);
            Some((-half, half - 1))
        } else {
            Some((0, (1i128 << bits) - 1))
        }
    }

    /// Check the contract's own invariants.
    ///
    /// A contract that fails here is a configuration error, not a violation.
    pub fn check_invariants(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CheckError::invalid_contract(&self.name, "name is empty"));
        }
        if self.size_bytes == 0 {
            return Err(CheckError::invalid_contract(&self.name, "size_bytes must be positive"));
        }
        for (label, bound) in [("min", &self.min), ("max", &self.max)] {
            if bound.kind() != self.kind {
                return Err(CheckError::invalid_contract(
                    &self.name,
                    format!("{} is a {} value but the contract is {}", label, bound.kind(), self.kind),
                ));
            }
            if bound.is_nan() {
                return Err(CheckError::invalid_contract(&self.name, format!("{} is NaN", label)));
            }
        }
        if self.min.partial_cmp(&self.max) == Some(Ordering::Greater) {
            return Err(CheckError::invalid_contract(
                &self.name,
                format!("min {} is greater than max {}", self.min, self.max),
            ));
        }

        if self.kind == NumericKind::Integer {
            let (min, max) = Self::implied_integer_range(self.signed, self.size_bytes)
                .ok_or_else(|| {
                    CheckError::invalid_contract(
                        &self.name,
                        format!(
                            "integer contracts support 1 to {} bytes, got {}",
                            MAX_INTEGER_BYTES, self.size_bytes
                        ),
                    )
                })?;
            if self.min != Number::Int(min) || self.max != Number::Int(max) {
                return Err(CheckError::invalid_contract(
                    &self.name,
                    format!(
                        "range [{}, {}] does not match a {} {}-byte integer [{}, {}]",
                        self.min,
                        self.max,
                        if self.signed { "signed" } else { "unsigned" },
                        self.size_bytes,
                        min,
                        max
                    ),
                ));
            }
        }

        Ok(())
    }
}

/// File representation of a contract.
///
/// Bounds are written as strings because TOML integers stop at `i64` and
/// `u64::MAX` would not fit; they are parsed according to `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractEntry {
    pub name: String,
    pub kind: NumericKind,
    #[serde(default = "default_signed")]
    pub signed: bool,
    pub size_bytes: usize,
    pub min: String,
    pub max: String,
}

fn default_signed() -> bool {
    true
}

impl TryFrom<ContractEntry> for TypeContract {
    type Error = CheckError;

    fn try_from(entry: ContractEntry) -> Result<Self> {
        let contract = TypeContract::new(
            entry.name,
            entry.kind,
            entry.signed,
            entry.size_bytes,
            Number::parse(entry.kind, &entry.min)?,
            Number::parse(entry.kind, &entry.max)?,
        );
        contract.check_invariants()?;
        Ok(contract)
    }
}

impl From<TypeContract> for ContractEntry {
    fn from(contract: TypeContract) -> Self {
        Self {
            name: contract.name,
            kind: contract.kind,
            signed: contract.signed,
            size_bytes: contract.size_bytes,
            min: contract.min.to_string(),
            max: contract.max.to_string(),
        }
    }
}
