//! Exact-type checks.

use super::Validate;
use crate::core::{Scalar, ScalarKind, StatusResult, DEFAULT_SUCCESS_MESSAGE};
use crate::errors::FailureKind;

/// Passes iff the value's exact kind is one of the allowed kinds.
///
/// There is no widening: an integer is not accepted where only floats are
/// allowed, and a bool is not an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactType {
    allowed: Vec<ScalarKind>,
}

impl ExactType {
    /// Creates a check accepting any of `allowed`.
    pub fn new(allowed: impl IntoIterator<Item = ScalarKind>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
        }
    }

    /// Creates a check accepting a single kind.
    #[must_use]
    pub fn of(kind: ScalarKind) -> Self {
        Self {
            allowed: vec![kind],
        }
    }

    /// Returns the allowed kinds.
    #[must_use]
    pub fn allowed(&self) -> &[ScalarKind] {
        &self.allowed
    }
}

/// Builds the standard type-mismatch message.
pub(crate) fn type_mismatch_details(allowed: &[ScalarKind], actual: ScalarKind) -> String {
    let names: Vec<String> = allowed.iter().map(|k| format!("'{k}'")).collect();
    format!("Value must be one of {}, got '{actual}'", names.join(", "))
}

pub(crate) fn type_mismatch(allowed: &[ScalarKind], actual: ScalarKind) -> StatusResult {
    StatusResult::exception(
        FailureKind::TypeMismatch,
        type_mismatch_details(allowed, actual),
    )
}

impl Validate<Scalar> for ExactType {
    fn validate(&self, value: &Scalar) -> StatusResult {
        let actual = value.kind();
        if self.allowed.contains(&actual) {
            StatusResult::ok(DEFAULT_SUCCESS_MESSAGE)
        } else {
            type_mismatch(&self.allowed, actual)
        }
    }
}

/// Passes iff two fixed reference values share an exact kind.
///
/// The value under test is ignored; this guards pipelines whose parameters
/// (such as range bounds) must agree with each other.
#[derive(Debug, Clone, PartialEq)]
pub struct SameType {
    first: Scalar,
    second: Scalar,
}

impl SameType {
    /// Creates a check over two reference values.
    pub fn new(first: impl Into<Scalar>, second: impl Into<Scalar>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

impl Validate<Scalar> for SameType {
    fn validate(&self, _value: &Scalar) -> StatusResult {
        let (first, second) = (self.first.kind(), self.second.kind());
        if first == second {
            return StatusResult::ok(DEFAULT_SUCCESS_MESSAGE);
        }
        StatusResult::exception(
            FailureKind::SameTypeMismatch,
            format!(
                "Type mismatch: expected type '{second}' of value {} to match '{first}' of value {}",
                self.second.repr(),
                self.first.repr()
            ),
        )
    }
}
