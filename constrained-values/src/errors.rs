//! Error types for constrained values.
//!
//! Two layers live here. [`FailureKind`] classifies why a pipeline stage
//! reported `EXCEPTION`; it travels inside results and is never raised.
//! [`ConstraintError`] is raised only at the explicit boundaries: unwrapping
//! or strict construction of an invalid value, and ordering comparisons that
//! have no meaningful answer.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Why a pipeline stage failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The value's exact kind is not one of the allowed kinds.
    TypeMismatch,
    /// Two reference values (usually range bounds) have different kinds.
    SameTypeMismatch,
    /// The value is below the inclusive lower bound.
    RangeUnderflow,
    /// The value is above the inclusive upper bound.
    RangeOverflow,
    /// The value is not a member of the allowed collection.
    MembershipFailure,
    /// A conversion between representations failed or is not supported.
    CoercionFailure,
    /// Text did not match a required pattern.
    PatternMismatch,
    /// The pipeline itself was configured with unusable parameters.
    ConfigurationError,
    /// A caller-defined strategy failed.
    Custom,
}

impl FailureKind {
    /// Returns a stable machine-readable code for the failure.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::TypeMismatch => "type_mismatch",
            Self::SameTypeMismatch => "same_type_mismatch",
            Self::RangeUnderflow => "range_underflow",
            Self::RangeOverflow => "range_overflow",
            Self::MembershipFailure => "membership_failure",
            Self::CoercionFailure => "coercion_failure",
            Self::PatternMismatch => "pattern_mismatch",
            Self::ConfigurationError => "configuration_error",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Errors raised at the boundaries of the constrained-value API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    /// An invalid value was unwrapped.
    #[error("{kind} invalid: {details}")]
    Invalid {
        /// Name of the concrete kind.
        kind: &'static str,
        /// Details recorded by the failing stage.
        details: String,
    },

    /// Strict construction refused an invalid value.
    #[error("{kind}: failed constraints for value '{input}': {details}")]
    Rejected {
        /// Name of the concrete kind.
        kind: &'static str,
        /// Rendering of the raw input.
        input: String,
        /// Details recorded by the failing stage.
        details: String,
    },

    /// Two different concrete kinds were ordered against each other.
    #[error("cannot order {left} against {right}")]
    KindMismatch {
        /// Kind of the left operand.
        left: &'static str,
        /// Kind of the right operand.
        right: &'static str,
    },

    /// At least one operand of an ordering comparison is invalid.
    #[error("{kind}: cannot compare invalid values")]
    InvalidComparison {
        /// Name of the concrete kind.
        kind: &'static str,
    },

    /// Both payloads are valid but have no defined order (e.g. NaN).
    #[error("{kind}: values {left} and {right} have no defined order")]
    Incomparable {
        /// Name of the concrete kind.
        kind: &'static str,
        /// Rendering of the left payload.
        left: String,
        /// Rendering of the right payload.
        right: String,
    },
}

impl ConstraintError {
    /// Creates an invalid-value error.
    #[must_use]
    pub fn invalid(kind: &'static str, details: impl Into<String>) -> Self {
        Self::Invalid {
            kind,
            details: details.into(),
        }
    }

    /// Creates a strict-construction error for `input`.
    #[must_use]
    pub fn rejected(
        kind: &'static str,
        input: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self::Rejected {
            kind,
            input: input.into(),
            details: details.into(),
        }
    }

    /// Returns true if this error came from ordering rather than unwrapping.
    #[must_use]
    pub const fn is_comparison_error(&self) -> bool {
        matches!(
            self,
            Self::KindMismatch { .. } | Self::InvalidComparison { .. } | Self::Incomparable { .. }
        )
    }
}
