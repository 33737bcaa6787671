//! The embedded check tables

use rust_decimal::Decimal;

use crate::arith::{ArithOp, ArithmeticEdgeCase, Expression, FailureKind, FloatType, IntType};
use crate::contract::TypeContract;
use crate::literal::LiteralCase;
use crate::number::Number;

const DECIMAL_MAX_MANTISSA: i128 = 79_228_162_514_264_337_593_543_950_335;

/// Declared contracts for the common primitive numeric types
pub fn contracts() -> Vec<TypeContract> {
    vec![
        // Signed integers
        TypeContract::integer("sbyte", true, 1, -128, 127),
        TypeContract::integer("short", true, 2, -32_768, 32_767),
        TypeContract::integer("int", true, 4, -2_147_483_648, 2_147_483_647),
        TypeContract::integer("long", true, 8, -9_223_372_036_854_775_808, 9_223_372_036_854_775_807),
        // Unsigned integers
        TypeContract::integer("byte", false, 1, 0, 255),
        TypeContract::integer("ushort", false, 2, 0, 65_535),
        TypeContract::integer("uint", false, 4, 0, 4_294_967_295),
        TypeContract::integer("ulong", false, 8, 0, 18_446_744_073_709_551_615),
        // Binary floating point
        TypeContract::binary_float("float", 4, -3.4028234663852886e38, 3.4028234663852886e38),
        TypeContract::binary_float("double", 8, -1.7976931348623157e308, 1.7976931348623157e308),
        // Exact decimal
        TypeContract::decimal(
            "decimal",
            16,
            Decimal::from_i128_with_scale(-DECIMAL_MAX_MANTISSA, 0),
            Decimal::from_i128_with_scale(DECIMAL_MAX_MANTISSA, 0),
        ),
    ]
}

/// Declared outcomes for arithmetic at the edges of each type
pub fn edge_cases() -> Vec<ArithmeticEdgeCase> {
    let int_max = i128::from(i32::MAX);
    let int_min = i128::from(i32::MIN);
    let long_max = i128::from(i64::MAX);
    let uint_max = i128::from(u32::MAX);
    let f64_div = |lhs, rhs| Expression::float(FloatType::F64, ArithOp::Div, lhs, rhs);

    vec![
        // Integer overflow
        ArithmeticEdgeCase::fails(
            "int max * int max (checked)",
            Expression::checked(IntType::I32, ArithOp::Mul, int_max, int_max),
            FailureKind::Overflow,
        ),
        ArithmeticEdgeCase::fails(
            "long max * long max (checked)",
            Expression::checked(IntType::I64, ArithOp::Mul, long_max, long_max),
            FailureKind::Overflow,
        ),
        ArithmeticEdgeCase::fails(
            "int min / -1 (checked)",
            Expression::checked(IntType::I32, ArithOp::Div, int_min, -1),
            FailureKind::Overflow,
        ),
        ArithmeticEdgeCase::fails(
            "uint max * 2 (checked)",
            Expression::checked(IntType::U32, ArithOp::Mul, uint_max, 2),
            FailureKind::Wraparound,
        ),
        ArithmeticEdgeCase::fails(
            "ulong 0 - 1 (checked)",
            Expression::checked(IntType::U64, ArithOp::Sub, 0, 1),
            FailureKind::Wraparound,
        ),
        ArithmeticEdgeCase::yields(
            "int max + 1 (wrapping)",
            Expression::wrapping(IntType::I32, ArithOp::Add, int_max, 1),
            Number::Int(int_min),
        ),
        ArithmeticEdgeCase::yields(
            "uint max + 1 (wrapping)",
            Expression::wrapping(IntType::U32, ArithOp::Add, uint_max, 1),
            Number::Int(0),
        ),
        ArithmeticEdgeCase::fails(
            "int 1 / 0",
            Expression::checked(IntType::I32, ArithOp::Div, 1, 0),
            FailureKind::DivideByZero,
        ),
        // Binary floating point division by zero
        ArithmeticEdgeCase::yields("double 1 / 0", f64_div(1.0, 0.0), Number::Float(f64::INFINITY)),
        ArithmeticEdgeCase::yields(
            "double -1 / 0",
            f64_div(-1.0, 0.0),
            Number::Float(f64::NEG_INFINITY),
        ),
        ArithmeticEdgeCase::yields(
            "double 1 / -0",
            f64_div(1.0, -0.0),
            Number::Float(f64::NEG_INFINITY),
        ),
        ArithmeticEdgeCase::yields("double -1 / -0", f64_div(-1.0, -0.0), Number::Float(f64::INFINITY)),
        ArithmeticEdgeCase::fails("double 0 / 0", f64_div(0.0, 0.0), FailureKind::NaN),
        ArithmeticEdgeCase::fails("double -0 / -0", f64_div(-0.0, -0.0), FailureKind::NaN),
        ArithmeticEdgeCase::fails(
            "double inf / inf",
            f64_div(f64::INFINITY, f64::INFINITY),
            FailureKind::NaN,
        ),
        ArithmeticEdgeCase::yields(
            "float max * 2",
            Expression::float(FloatType::F32, ArithOp::Mul, f64::from(f32::MAX), 2.0),
            Number::Float(f64::INFINITY),
        ),
        // Rounding
        ArithmeticEdgeCase::never_yields(
            "double 0.1 + 0.2",
            Expression::float(FloatType::F64, ArithOp::Add, 0.1, 0.2),
            Number::Float(0.3),
        ),
        ArithmeticEdgeCase::yields(
            "decimal 0.1 + 0.2",
            Expression::decimal(ArithOp::Add, Decimal::new(1, 1), Decimal::new(2, 1)),
            Number::Decimal(Decimal::new(3, 1)),
        ),
        // Exact decimal failures
        ArithmeticEdgeCase::fails(
            "decimal 1 / 0",
            Expression::decimal(ArithOp::Div, Decimal::ONE, Decimal::ZERO),
            FailureKind::DivideByZero,
        ),
        ArithmeticEdgeCase::fails(
            "decimal max + 1",
            Expression::decimal(ArithOp::Add, Decimal::MAX, Decimal::ONE),
            FailureKind::Overflow,
        ),
    ]
}

/// Literal forms and the values they denote
pub fn literals() -> Vec<LiteralCase> {
    vec![
        LiteralCase::new("123_456_789", 123_456_789),
        LiteralCase::new("65_535", 65_535),
        LiteralCase::new("0xffff", 65_535),
        LiteralCase::new("0b1010", 10),
        LiteralCase::new("100", 100),
        LiteralCase::new("-2147483648", -2_147_483_648),
    ]
}
