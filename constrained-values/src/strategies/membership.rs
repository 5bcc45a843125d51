//! Membership checks and enumeration member normalization.

use super::{Transform, Validate};
use crate::core::{format_scalars, Scalar, StageResult, StatusResult, DEFAULT_SUCCESS_MESSAGE};
use crate::errors::FailureKind;

/// Passes iff the value is contained in a fixed collection.
#[derive(Debug, Clone, PartialEq)]
pub struct OneOf {
    allowed: Vec<Scalar>,
}

impl OneOf {
    /// Creates a membership check.
    pub fn new<I, V>(allowed: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Scalar>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the allowed values.
    #[must_use]
    pub fn allowed(&self) -> &[Scalar] {
        &self.allowed
    }
}

impl Validate<Scalar> for OneOf {
    fn validate(&self, value: &Scalar) -> StatusResult {
        if self.allowed.contains(value) {
            return StatusResult::ok(DEFAULT_SUCCESS_MESSAGE);
        }
        StatusResult::exception(
            FailureKind::MembershipFailure,
            format!(
                "Value must be one of {}, got {}",
                format_scalars(&self.allowed),
                value.repr()
            ),
        )
    }
}

/// Replaces enumeration members with their underlying value.
///
/// Any other value passes through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemberToValue;

impl Transform<Scalar> for MemberToValue {
    fn transform(&self, value: Scalar) -> StageResult<Scalar> {
        match value {
            Scalar::Member(member) => StageResult::ok(member.into_value(), DEFAULT_SUCCESS_MESSAGE),
            other => StageResult::ok(other, DEFAULT_SUCCESS_MESSAGE),
        }
    }
}
