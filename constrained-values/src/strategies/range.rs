//! Inclusive range check.

use super::Validate;
use crate::core::{Scalar, StatusResult, DEFAULT_SUCCESS_MESSAGE};
use crate::errors::FailureKind;
use std::cmp::Ordering;

/// Passes iff `low <= value <= high`.
#[derive(Debug, Clone, PartialEq)]
pub struct InRange {
    low: Scalar,
    high: Scalar,
}

impl InRange {
    /// Creates an inclusive range check.
    pub fn new(low: impl Into<Scalar>, high: impl Into<Scalar>) -> Self {
        Self {
            low: low.into(),
            high: high.into(),
        }
    }

    /// Returns the lower bound.
    #[must_use]
    pub const fn low(&self) -> &Scalar {
        &self.low
    }

    /// Returns the upper bound.
    #[must_use]
    pub const fn high(&self) -> &Scalar {
        &self.high
    }

    fn unordered(&self, value: &Scalar) -> StatusResult {
        StatusResult::exception(
            FailureKind::TypeMismatch,
            format!(
                "Value {} cannot be compared with bounds {} and {}",
                value.repr(),
                self.low.repr(),
                self.high.repr()
            ),
        )
    }
}

impl Validate<Scalar> for InRange {
    fn validate(&self, value: &Scalar) -> StatusResult {
        match value.partial_cmp(&self.low) {
            None => return self.unordered(value),
            Some(Ordering::Less) => {
                return StatusResult::exception(
                    FailureKind::RangeUnderflow,
                    format!(
                        "Value must be greater than or equal to {}, got {}",
                        self.low, value
                    ),
                );
            }
            Some(_) => {}
        }
        match value.partial_cmp(&self.high) {
            None => self.unordered(value),
            Some(Ordering::Greater) => StatusResult::exception(
                FailureKind::RangeOverflow,
                format!(
                    "Value must be less than or equal to {}, got {}",
                    self.high, value
                ),
            ),
            Some(_) => StatusResult::ok(DEFAULT_SUCCESS_MESSAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        let range = InRange::new(1, 10);
        assert!(range.validate(&Scalar::from(1)).is_ok());
        assert!(range.validate(&Scalar::from(10)).is_ok());
        assert!(range.validate(&Scalar::from(5)).is_ok());
    }

    #[test]
    fn test_below_low() {
        let result = InRange::new(1, 10).validate(&Scalar::from(0));
        assert_eq!(result.failure(), Some(FailureKind::RangeUnderflow));
        assert_eq!(result.details(), "Value must be greater than or equal to 1, got 0");
    }

    #[test]
    fn test_above_high() {
        let result = InRange::new(1, 10).validate(&Scalar::from(15));
        assert_eq!(result.failure(), Some(FailureKind::RangeOverflow));
        assert_eq!(result.details(), "Value must be less than or equal to 10, got 15");
    }

    #[test]
    fn test_unordered_value_is_type_mismatch() {
        let result = InRange::new(1, 10).validate(&Scalar::from("5"));
        assert_eq!(result.failure(), Some(FailureKind::TypeMismatch));
        assert!(result.details().contains("'5'"));

        let result = InRange::new(0.0, 1.0).validate(&Scalar::from(f64::NAN));
        assert_eq!(result.failure(), Some(FailureKind::TypeMismatch));
    }

    #[test]
    fn test_accessors() {
        let range = InRange::new(2, 4);
        assert_eq!(range.low(), &Scalar::from(2));
        assert_eq!(range.high(), &Scalar::from(4));
    }
}
