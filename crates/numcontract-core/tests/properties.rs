//! Property tests for numeric evaluation and literal parsing

use numcontract_core::{
    parse_int_literal, ArithOp, Expression, FailureKind, FloatType, IntType, Number, Outcome,
    TypeContract,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

proptest! {
    #[test]
    fn prop_checked_i32_mul_matches_native(a: i32, b: i32) {
        let outcome = Expression::checked(IntType::I32, ArithOp::Mul, a.into(), b.into())
            .evaluate()
            .unwrap();
        match a.checked_mul(b) {
            Some(v) => prop_assert_eq!(outcome, Outcome::Value(Number::Int(v.into()))),
            None => prop_assert_eq!(outcome, Outcome::Failure(FailureKind::Overflow)),
        }
    }

    #[test]
    fn prop_checked_u16_add_is_wraparound_or_exact(a: u16, b: u16) {
        let outcome = Expression::checked(IntType::U16, ArithOp::Add, a.into(), b.into())
            .evaluate()
            .unwrap();
        let sum = u32::from(a) + u32::from(b);
        if sum > u32::from(u16::MAX) {
            prop_assert_eq!(outcome, Outcome::Failure(FailureKind::Wraparound));
        } else {
            prop_assert_eq!(outcome, Outcome::Value(Number::Int(sum.into())));
        }
    }

    #[test]
    fn prop_wrapping_never_fails(a: i64, b: i64) {
        for op in [ArithOp::Add, ArithOp::Sub, ArithOp::Mul] {
            let outcome = Expression::wrapping(IntType::I64, op, a.into(), b.into())
                .evaluate()
                .unwrap();
            prop_assert!(matches!(outcome, Outcome::Value(Number::Int(_))));
        }
    }

    #[test]
    fn prop_division_by_signed_zero_gives_signed_infinity(x in prop::num::f64::NORMAL) {
        let pos = Expression::float(FloatType::F64, ArithOp::Div, x, 0.0).evaluate().unwrap();
        let neg = Expression::float(FloatType::F64, ArithOp::Div, x, -0.0).evaluate().unwrap();
        let sign = x.signum();
        prop_assert_eq!(pos, Outcome::Value(Number::Float(sign * f64::INFINITY)));
        prop_assert_eq!(neg, Outcome::Value(Number::Float(-sign * f64::INFINITY)));
    }

    #[test]
    fn prop_decimal_addition_is_exact(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000, scale in 0u32..10) {
        let lhs = Decimal::new(a, scale);
        let rhs = Decimal::new(b, scale);
        let outcome = Expression::decimal(ArithOp::Add, lhs, rhs).evaluate().unwrap();
        prop_assert_eq!(outcome, Outcome::Value(Number::Decimal(Decimal::new(a + b, scale))));
    }

    #[test]
    fn prop_decimal_literal_roundtrip(n: i64) {
        prop_assert_eq!(parse_int_literal(&n.to_string()).unwrap(), i128::from(n));
    }

    #[test]
    fn prop_hex_and_binary_literals(n: u64) {
        prop_assert_eq!(parse_int_literal(&format!("{:#x}", n)).unwrap(), i128::from(n));
        prop_assert_eq!(parse_int_literal(&format!("{:#b}", n)).unwrap(), i128::from(n));
    }

    #[test]
    fn prop_digit_separators_are_ignored(n in 0u64..u64::MAX, split in 1usize..19) {
        let digits = n.to_string();
        let split = split.min(digits.len());
        let with_separator = if split < digits.len() {
            format!("{}_{}", &digits[..split], &digits[split..])
        } else {
            digits.clone()
        };
        prop_assert_eq!(parse_int_literal(&with_separator).unwrap(), i128::from(n));
    }

    #[test]
    fn prop_implied_integer_ranges(size in 1usize..=8) {
        let (smin, smax) = TypeContract::implied_integer_range(true, size).unwrap();
        let (umin, umax) = TypeContract::implied_integer_range(false, size).unwrap();
        prop_assert_eq!(smin, -smax - 1);
        prop_assert_eq!(umin, 0);
        prop_assert_eq!(umax, 2 * smax + 1);
        prop_assert!(TypeContract::integer("x", true, size, smin, smax).check_invariants().is_ok());
    }
}
