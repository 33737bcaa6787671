//! Numeric values shared by contracts, runtime descriptors and edge cases

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::error::{CheckError, Result};
use crate::literal::parse_int_literal;

/// Family a numeric type belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericKind {
    /// Two's complement or unsigned binary integers
    Integer,
    /// IEEE 754 binary floating point
    BinaryFloat,
    /// Exact base-10 decimal
    Decimal,
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericKind::Integer => write!(f, "integer"),
            NumericKind::BinaryFloat => write!(f, "binary_float"),
            NumericKind::Decimal => write!(f, "decimal"),
        }
    }
}

/// A value of any supported numeric kind.
///
/// Integers are widened to `i128`, which holds the full range of every
/// primitive up to 64 bits. Float equality is bit-exact, so `0.0` and `-0.0`
/// differ and infinities compare by sign; two NaNs are considered equal.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i128),
    Float(f64),
    Decimal(Decimal),
}

impl Number {
    /// The kind of this value
    pub fn kind(&self) -> NumericKind {
        match self {
            Number::Int(_) => NumericKind::Integer,
            Number::Float(_) => NumericKind::BinaryFloat,
            Number::Decimal(_) => NumericKind::Decimal,
        }
    }

    /// Parse text as a value of the given kind.
    ///
    /// Integers accept the literal forms of [`parse_int_literal`]; floats accept
    /// anything `f64::from_str` does (including `inf` and `-inf`) with `_`
    /// separators removed.
    pub fn parse(kind: NumericKind, text: &str) -> Result<Self> {
        let text = text.trim();
        match kind {
            NumericKind::Integer => parse_int_literal(text).map(Number::Int),
            NumericKind::BinaryFloat => text
                .replace('_', "")
                .parse::<f64>()
                .map(Number::Float)
                .map_err(|e| CheckError::parse_error(format!("'{}' is not a float: {}", text, e))),
            NumericKind::Decimal => text
                .parse::<Decimal>()
                .map(Number::Decimal)
                .map_err(|e| {
                    CheckError::parse_error(format!("'{}' is not a decimal: {}", text, e))
                }),
        }
    }

    /// Whether this is a floating point NaN
    pub fn is_nan(&self) -> bool {
        matches!(self, Number::Float(f) if f.is_nan())
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => {
                a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
            }
            (Number::Decimal(a), Number::Decimal(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialOrd for Number {
    /// Values of different kinds are unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(b)),
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(b),
            (Number::Decimal(a), Number::Decimal(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            // Debug keeps exponent notation and the sign of zero
            Number::Float(v) => write!(f, "{:?}", v),
            Number::Decimal(v) => write!(f, "{}", v),
        }
    }
}
