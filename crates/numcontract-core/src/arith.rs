//! Arithmetic edge cases
//!
//! An [`ArithmeticEdgeCase`] pairs an [`Expression`] with the [`Outcome`] it
//! is declared to have. Expressions are evaluated with the runtime's own
//! primitive operations in the declared type, so the observed outcome is the
//! runtime's, not a model of it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Rem, Sub};

use crate::error::{CheckError, Result};
use crate::number::Number;

/// Ways an evaluation can fail to produce a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    /// Result left the range of a signed integer type
    Overflow,
    /// Result left the range of an unsigned integer type
    Wraparound,
    /// Integer or decimal division by zero
    DivideByZero,
    /// Floating point result is not a number
    NaN,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Overflow => write!(f, "Overflow"),
            FailureKind::Wraparound => write!(f, "Wraparound"),
            FailureKind::DivideByZero => write!(f, "DivideByZero"),
            FailureKind::NaN => write!(f, "NaN"),
        }
    }
}

/// Result of evaluating an expression
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Value(Number),
    Failure(FailureKind),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value(n) => write!(f, "{}", n),
            Outcome::Failure(kind) => write!(f, "fails with {}", kind),
        }
    }
}

/// Primitive integer types an expression can be evaluated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntType {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
}

impl IntType {
    pub fn name(&self) -> &'static str {
        match self {
            IntType::I8 => "i8",
            IntType::I16 => "i16",
            IntType::I32 => "i32",
            IntType::I64 => "i64",
            IntType::U8 => "u8",
            IntType::U16 => "u16",
            IntType::U32 => "u32",
            IntType::U64 => "u64",
        }
    }

    pub fn is_signed(&self) -> bool {
        matches!(self, IntType::I8 | IntType::I16 | IntType::I32 | IntType::I64)
    }

    /// Failure reported when a checked operation leaves this type's range
    pub fn range_failure(&self) -> FailureKind {
        if self.is_signed() {
            FailureKind::Overflow
        } else {
            FailureKind::Wraparound
        }
    }
}

/// Binary floating point types an expression can be evaluated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloatType {
    F32,
    F64,
}

impl FloatType {
    pub fn name(&self) -> &'static str {
        match self {
            FloatType::F32 => "f32",
            FloatType::F64 => "f64",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl ArithOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
            ArithOp::Rem => "%",
        }
    }
}

/// Integer overflow handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowMode {
    /// Leaving the type's range is a failure
    Checked,
    /// Results wrap modulo 2^bits
    Wrapping,
}

/// Evaluate an integer expression natively in `$t`.
///
/// Division and remainder by zero are reported before either the checked or
/// wrapping operation runs, since the wrapping forms panic on a zero divisor.
macro_rules! eval_int {
    ($t:ty, $ty:expr, $op:expr, $lhs:expr, $rhs:expr, $mode:expr, $expr:expr) => {{
        let a = <$t>::try_from($lhs).map_err(|_| operand_out_of_range($expr, $lhs, $ty))?;
        let b = <$t>::try_from($rhs).map_err(|_| operand_out_of_range($expr, $rhs, $ty))?;

        let (checked, wrapped) = match $op {
            ArithOp::Add => (a.checked_add(b), a.wrapping_add(b)),
            ArithOp::Sub => (a.checked_sub(b), a.wrapping_sub(b)),
            ArithOp::Mul => (a.checked_mul(b), a.wrapping_mul(b)),
            ArithOp::Div if b == 0 => return Ok(Outcome::Failure(FailureKind::DivideByZero)),
            ArithOp::Div => (a.checked_div(b), a.wrapping_div(b)),
            ArithOp::Rem if b == 0 => return Ok(Outcome::Failure(FailureKind::DivideByZero)),
            ArithOp::Rem => (a.checked_rem(b), a.wrapping_rem(b)),
        };

        let outcome = match $mode {
            OverflowMode::Checked => match checked {
                Some(v) => Outcome::Value(Number::Int(i128::from(v))),
                None => Outcome::Failure($ty.range_failure()),
            },
            OverflowMode::Wrapping => Outcome::Value(Number::Int(i128::from(wrapped))),
        };
        Ok(outcome)
    }};
}

/// An arithmetic expression over two operands in a fixed type
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Integer {
        ty: IntType,
        op: ArithOp,
        lhs: i128,
        rhs: i128,
        mode: OverflowMode,
    },
    Float {
        ty: FloatType,
        op: ArithOp,
        lhs: f64,
        rhs: f64,
    },
    Decimal {
        op: ArithOp,
        lhs: Decimal,
        rhs: Decimal,
    },
}

impl Expression {
    /// Integer expression where leaving the range fails
    pub fn checked(ty: IntType, op: ArithOp, lhs: i128, rhs: i128) -> Self {
        Expression::Integer {
            ty,
            op,
            lhs,
            rhs,
            mode: OverflowMode::Checked,
        }
    }

    /// Integer expression where results wrap
    pub fn wrapping(ty: IntType, op: ArithOp, lhs: i128, rhs: i128) -> Self {
        Expression::Integer {
            ty,
            op,
            lhs,
            rhs,
            mode: OverflowMode::Wrapping,
        }
    }

    pub fn float(ty: FloatType, op: ArithOp, lhs: f64, rhs: f64) -> Self {
        Expression::Float { ty, op, lhs, rhs }
    }

    pub fn decimal(op: ArithOp, lhs: Decimal, rhs: Decimal) -> Self {
        Expression::Decimal { op, lhs, rhs }
    }

    /// Evaluate the expression.
    ///
    /// Returns an error only when the expression cannot be formed, i.e. an
    /// operand does not fit the declared type.
    pub fn evaluate(&self) -> Result<Outcome> {
        match *self {
            Expression::Integer {
                ty,
                op,
                lhs,
                rhs,
                mode,
            } => match ty {
                IntType::I8 => eval_int!(i8, ty, op, lhs, rhs, mode, self),
                IntType::I16 => eval_int!(i16, ty, op, lhs, rhs, mode, self),
                IntType::I32 => eval_int!(i32, ty, op, lhs, rhs, mode, self),
                IntType::I64 => eval_int!(i64, ty, op, lhs, rhs, mode, self),
                IntType::U8 => eval_int!(u8, ty, op, lhs, rhs, mode, self),
                IntType::U16 => eval_int!(u16, ty, op, lhs, rhs, mode, self),
                IntType::U32 => eval_int!(u32, ty, op, lhs, rhs, mode, self),
                IntType::U64 => eval_int!(u64, ty, op, lhs, rhs, mode, self),
            },
            Expression::Float { ty, op, lhs, rhs } => {
                let result = match ty {
                    // Narrowing rounds to nearest, which is what an f32 literal does
                    FloatType::F32 => {
                        let a = narrow_f32(self, lhs)?;
                        let b = narrow_f32(self, rhs)?;
                        f64::from(apply_float(op, a, b))
                    }
                    FloatType::F64 => apply_float(op, lhs, rhs),
                };
                if result.is_nan() {
                    Ok(Outcome::Failure(FailureKind::NaN))
                } else {
                    Ok(Outcome::Value(Number::Float(result)))
                }
            }
            Expression::Decimal { op, lhs, rhs } => Ok(eval_decimal(op, lhs, rhs)),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Integer {
                ty,
                op,
                lhs,
                rhs,
                mode,
            } => {
                let mode = match mode {
                    OverflowMode::Checked => "checked",
                    OverflowMode::Wrapping => "wrapping",
                };
                write!(f, "{} {} {} {} ({})", ty.name(), lhs, op.symbol(), rhs, mode)
            }
            Expression::Float { ty, op, lhs, rhs } => {
                write!(f, "{} {:?} {} {:?}", ty.name(), lhs, op.symbol(), rhs)
            }
            Expression::Decimal { op, lhs, rhs } => {
                write!(f, "decimal {} {} {}", lhs, op.symbol(), rhs)
            }
        }
    }
}


fn operand_out_of_range(expr: &Expression, operand: i128, ty: IntType) -> CheckError {
    CheckError::invalid_case(
        expr.to_string(),
        format!("operand {} does not fit in {}", operand, ty.name()),
    )
}

/// Narrow an operand to `f32`; a finite operand beyond `f32` range is an invalid case
fn narrow_f32(expr: &Expression, operand: f64) -> Result<f32> {
    let narrowed = operand as f32;
    if operand.is_finite() && narrowed.is_infinite() {
        return Err(CheckError::invalid_case(
            expr.to_string(),
            format!("operand {:?} does not fit in f32", operand),
        ));
    }
    Ok(narrowed)
}

fn apply_float<T>(op: ArithOp, a: T, b: T) -> T
where
    T: Add<Output = T> + Sub<Output = T> + Mul<Output = T> + Div<Output = T> + Rem<Output = T>,
{
    match op {
        ArithOp::Add => a + b,
        ArithOp::Sub => a - b,
        ArithOp::Mul => a * b,
        ArithOp::Div => a / b,
        ArithOp::Rem => a % b,
    }
}

fn eval_decimal(op: ArithOp, a: Decimal, b: Decimal) -> Outcome {
    let result = match op {
        ArithOp::Add => a.checked_add(b),
        ArithOp::Sub => a.checked_sub(b),
        ArithOp::Mul => a.checked_mul(b),
        ArithOp::Div | ArithOp::Rem if b.is_zero() => {
            return Outcome::Failure(FailureKind::DivideByZero)
        }
        ArithOp::Div => a.checked_div(b),
        ArithOp::Rem => a.checked_rem(b),
    };
    match result {
        Some(v) => Outcome::Value(Number::Decimal(v)),
        None => Outcome::Failure(FailureKind::Overflow),
    }
}

/// What an edge case's outcome must (or must not) be
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expectation {
    Equals(Outcome),
    NotEquals(Outcome),
}

impl Expectation {
    pub fn is_met_by(&self, actual: &Outcome) -> bool {
        match self {
            Expectation::Equals(expected) => expected == actual,
            Expectation::NotEquals(expected) => expected != actual,
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::Equals(outcome) => write!(f, "{}", outcome),
            Expectation::NotEquals(outcome) => write!(f, "anything but {}", outcome),
        }
    }
}

/// A described expression and its declared outcome
#[derive(Debug, Clone, PartialEq)]
pub struct ArithmeticEdgeCase {
    pub description: String,
    pub expression: Expression,
    pub expectation: Expectation,
}

impl ArithmeticEdgeCase {
    pub fn new(description: impl Into<String>, expression: Expression, expectation: Expectation) -> Self {
        Self {
            description: description.into(),
            expression,
            expectation,
        }
    }

    /// Case expecting a specific value
    pub fn yields(description: impl Into<String>, expression: Expression, value: Number) -> Self {
        Self::new(description, expression, Expectation::Equals(Outcome::Value(value)))
    }

    /// Case expecting a specific failure
    pub fn fails(description: impl Into<String>, expression: Expression, kind: FailureKind) -> Self {
        Self::new(description, expression, Expectation::Equals(Outcome::Failure(kind)))
    }

    /// Case expecting anything except the given value
    pub fn never_yields(description: impl Into<String>, expression: Expression, value: Number) -> Self {
        Self::new(description, expression, Expectation::NotEquals(Outcome::Value(value)))
    }

    /// Evaluate the expression, relabelling formation errors with this case
    pub fn evaluate(&self) -> Result<Outcome> {
        self.expression.evaluate().map_err(|e| match e {
            CheckError::InvalidCase { reason, .. } => {
                CheckError::invalid_case(&self.description, reason)
            }
            other => other,
        })
    }
}
