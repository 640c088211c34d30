//! Input-boundary number parsing
//!
//! The engines only accept already-parsed `Decimal` values. Form and HTTP
//! callers turn user text into numbers here, either leniently (anything that
//! is not a number becomes zero) or strictly.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Parses the longest leading numeric prefix of `text`, or returns zero.
///
/// Leading whitespace and a single sign are accepted, followed by digits
/// with at most one `.` separator. Anything after the prefix is ignored.
///
/// ```rust
/// use core_kernel::input::coerce_number;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(coerce_number("12.5"), dec!(12.5));
/// assert_eq!(coerce_number("12abc"), dec!(12));
/// assert_eq!(coerce_number("abc"), dec!(0));
/// ```
pub fn coerce_number(text: &str) -> Decimal {
    leading_number(text)
        .and_then(|number| Decimal::from_str(&number).ok())
        .unwrap_or(Decimal::ZERO)
}

/// Extracts the numeric prefix of `text` in a form `Decimal::from_str` accepts,
/// or `None` when there are no digits.
fn leading_number(text: &str) -> Option<String> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let mut seen_digit = false;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    if !seen_digit {
        return None;
    }

    let prefix = trimmed[..end].trim_end_matches('.');
    let (sign, digits) = match prefix.strip_prefix(['+', '-']) {
        Some(rest) => (&prefix[..1], rest),
        None => ("", prefix),
    };
    let sign = sign.trim_start_matches('+');
    if digits.starts_with('.') {
        Some(format!("{}0{}", sign, digits))
    } else {
        Some(format!("{}{}", sign, digits))
    }
}

/// Parses `text` as a decimal number, rejecting anything else.
pub fn parse_validated_number(text: &str) -> Result<Decimal, CoreError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation("value is required"));
    }
    Decimal::from_str(trimmed)
        .map_err(|_| CoreError::validation(format!("'{}' is not a number", trimmed)))
}

/// A decimal that deserializes from either a JSON number or a string.
///
/// Strings go through [`coerce_number`], so non-numeric text becomes zero at
/// the boundary instead of failing the whole request. Numbers too large for a
/// `Decimal` are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LenientDecimal(pub Decimal);

impl LenientDecimal {
    pub fn value(self) -> Decimal {
        self.0
    }
}

impl From<LenientDecimal> for Decimal {
    fn from(value: LenientDecimal) -> Self {
        value.0
    }
}

impl From<Decimal> for LenientDecimal {
    fn from(value: Decimal) -> Self {
        LenientDecimal(value)
    }
}

struct LenientDecimalVisitor;

impl<'de> Visitor<'de> for LenientDecimalVisitor {
    type Value = LenientDecimal;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number or a numeric string")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(LenientDecimal(Decimal::from(value)))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(LenientDecimal(Decimal::from(value)))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        // Shortest text form first so 0.1 stays 0.1; tiny values fall back to
        // the binary conversion.
        Decimal::from_str(&value.to_string())
            .ok()
            .or_else(|| Decimal::from_f64(value))
            .map(LenientDecimal)
            .ok_or_else(|| E::custom(format!("{} is out of range for an amount", value)))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        match leading_number(value) {
            None => Ok(LenientDecimal(Decimal::ZERO)),
            Some(number) => Decimal::from_str(&number)
                .map(LenientDecimal)
                .map_err(|_| E::custom(format!("{} is out of range for an amount", number))),
        }
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(LenientDecimal(Decimal::ZERO))
    }
}

impl<'de> Deserialize<'de> for LenientDecimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LenientDecimalVisitor)
    }
}
