//! Integer literal parsing
//!
//! Accepts the literal forms most languages share: an optional sign, an
//! optional radix prefix (`0x`, `0o`, `0b`) and `_` digit separators.

use serde::{Deserialize, Serialize};

use crate::error::{CheckError, Result};

/// Parse an integer literal such as `123_456_789`, `0xffff` or `-0b1010`.
pub fn parse_int_literal(text: &str) -> Result<i128> {
    let text = text.trim();
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (radix, digits) = split_radix(unsigned);

    let well_formed = digits.chars().all(|c| c == '_' || c.is_digit(radix));
    if !well_formed
        || !digits.chars().any(|c| c != '_')
        || digits.ends_with('_')
        || (radix == 10 && digits.starts_with('_'))
    {
        return Err(CheckError::parse_error(format!(
            "'{}' is not a valid integer literal",
            text
        )));
    }

    let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    let magnitude = u128::from_str_radix(&cleaned, radix).map_err(|e| {
        CheckError::parse_error(format!("'{}' is not a valid integer literal: {}", text, e))
    })?;

    let value = if negative {
        if magnitude == i128::MIN.unsigned_abs() {
            Some(i128::MIN)
        } else {
            i128::try_from(magnitude).ok().map(|m| -m)
        }
    } else {
        i128::try_from(magnitude).ok()
    };

    value.ok_or_else(|| CheckError::parse_error(format!("'{}' is out of range", text)))
}

fn split_radix(text: &str) -> (u32, &str) {
    let lower = text.get(..2).map(str::to_ascii_lowercase);
    match lower.as_deref() {
        Some("0x") => (16, &text[2..]),
        Some("0o") => (8, &text[2..]),
        Some("0b") => (2, &text[2..]),
        _ => (10, text),
    }
}

/// A literal together with the value it must denote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteralCase {
    /// Literal source text
    pub literal: String,
    /// Value the literal must parse to
    pub expected: i128,
}

impl LiteralCase {
    pub fn new(literal: impl Into<String>, expected: i128) -> Self {
        Self {
            literal: literal.into(),
            expected,
        }
    }

    /// Parse the literal
    pub fn evaluate(&self) -> Result<i128> {
        parse_int_literal(&self.literal)
    }
}
