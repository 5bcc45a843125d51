//! Numeric coercion through a closed conversion table.
//!
//! | from \ to | float | decimal | rational |
//! |-----------|-------|---------|----------|
//! | int       | cast  | exact   | exact    |
//! | float     |   -   | via shortest text rendering | exact binary value |
//! | text      |   -   | parsed  |    -     |
//!
//! Decimal conversions never round: input needing more precision than a
//! [`Decimal`] holds is rejected.
//!
//! A value already of the target kind passes through unchanged. Every other
//! pair is rejected with a coercion failure.

use super::Transform;
use crate::core::{Scalar, ScalarKind, StageResult, DEFAULT_SUCCESS_MESSAGE};
use crate::errors::FailureKind;
use num_rational::Rational64;
use rust_decimal::Decimal;

/// Converts the value to a target kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoerceTo {
    target: ScalarKind,
}

impl CoerceTo {
    /// Creates a coercion to `target`.
    #[must_use]
    pub const fn new(target: ScalarKind) -> Self {
        Self { target }
    }

    /// Returns the target kind.
    #[must_use]
    pub const fn target(&self) -> ScalarKind {
        self.target
    }
}

impl Transform<Scalar> for CoerceTo {
    fn transform(&self, value: Scalar) -> StageResult<Scalar> {
        match coerce(value, self.target) {
            Ok(coerced) => StageResult::ok(coerced, DEFAULT_SUCCESS_MESSAGE),
            Err(details) => StageResult::exception(FailureKind::CoercionFailure, details),
        }
    }
}

/// Applies the coercion table to a single value.
///
/// # Errors
///
/// Returns a human-readable message when the pair is not in the table or
/// the conversion itself fails.
pub fn coerce(value: Scalar, target: ScalarKind) -> Result<Scalar, String> {
    if value.kind() == target {
        return Ok(value);
    }
    match (value, target) {
        #[allow(clippy::cast_precision_loss)]
        (Scalar::Int(i), ScalarKind::Float) => Ok(Scalar::Float(i as f64)),
        (Scalar::Int(i), ScalarKind::Decimal) => Ok(Scalar::Decimal(Decimal::from(i))),
        (Scalar::Float(x), ScalarKind::Decimal) => decimal_from_text(&x.to_string()),
        (Scalar::Text(s), ScalarKind::Decimal) => decimal_from_text(s.trim()),
        (Scalar::Int(i), ScalarKind::Rational) => Ok(Scalar::Rational(Rational64::from_integer(i))),
        (Scalar::Float(x), ScalarKind::Rational) => exact_rational(x)
            .map(Scalar::Rational)
            .ok_or_else(|| format!("cannot convert {x:?} to rational")),
        (value, target) => Err(format!(
            "no coercion from '{}' to '{target}'",
            value.kind()
        )),
    }
}

/// Parses `text` as a decimal, rejecting anything that would need rounding.
fn decimal_from_text(text: &str) -> Result<Scalar, String> {
    let parsed = Decimal::from_str_exact(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|e| format!("cannot convert '{text}' to decimal: {e}"))?;
    if significant_digits(text) != significant_digits(&parsed.normalize().to_string()) {
        return Err(format!("cannot convert '{text}' to decimal without rounding"));
    }
    Ok(Scalar::Decimal(parsed))
}

/// Mantissa digits with sign, point, exponent and surrounding zeros removed.
fn significant_digits(text: &str) -> String {
    let mantissa = text.split(['e', 'E']).next().unwrap_or_default();
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    digits.trim_matches('0').to_string()
}

/// Converts a finite float to the exact rational it represents.
///
/// Returns `None` for NaN, infinities, and values whose numerator or
/// denominator does not fit in an `i64`.
fn exact_rational(x: f64) -> Option<Rational64> {
    if !x.is_finite() {
        return None;
    }
    if x == 0.0 {
        return Some(Rational64::from_integer(0));
    }
    let bits = x.to_bits();
    let negative = bits >> 63 == 1;
    let biased = i32::try_from((bits >> 52) & 0x7ff).ok()?;
    let fraction = bits & 0x000f_ffff_ffff_ffff;
    let (mantissa, exponent) = if biased == 0 {
        (fraction << 1, -1075)
    } else {
        (fraction | 0x0010_0000_0000_0000, biased - 1075)
    };
    let shift = mantissa.trailing_zeros();
    let mantissa = i64::try_from(mantissa >> shift).ok()?;
    let exponent = exponent + i32::try_from(shift).ok()?;
    let mantissa = if negative { -mantissa } else { mantissa };

    if exponent >= 0 {
        let scale = 2_i64.checked_pow(u32::try_from(exponent).ok()?)?;
        mantissa.checked_mul(scale).map(Rational64::from_integer)
    } else {
        let denom = 2_i64.checked_pow(u32::try_from(-exponent).ok()?)?;
        Some(Rational64::new(mantissa, denom))
    }
}
