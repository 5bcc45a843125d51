//! Stage result types.
//!
//! Validations produce a [`StatusResult`]; transformations, and the pipeline
//! as a whole, produce a [`StageResult`]. Both are built only through their
//! `ok`/`exception` constructors so that a value is present exactly when the
//! outcome is [`Outcome::Ok`].

use super::Outcome;
use crate::errors::FailureKind;

/// Result of a validation stage: an outcome and its details, no value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusResult {
    outcome: Outcome,
    details: String,
    failure: Option<FailureKind>,
}

impl StatusResult {
    /// Creates a passing result.
    #[must_use]
    pub fn ok(details: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Ok,
            details: details.into(),
            failure: None,
        }
    }

    /// Creates a failing result with an explicit failure kind.
    #[must_use]
    pub fn exception(failure: FailureKind, details: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Exception,
            details: details.into(),
            failure: Some(failure),
        }
    }

    /// Creates a failing result for a caller-defined check.
    #[must_use]
    pub fn fail(details: impl Into<String>) -> Self {
        Self::exception(FailureKind::Custom, details)
    }

    /// Returns the outcome.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the details message.
    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Returns the failure kind, present only for failures.
    #[must_use]
    pub const fn failure(&self) -> Option<FailureKind> {
        self.failure
    }

    /// Returns true if the outcome is OK.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Attaches a value, turning this into a [`StageResult`].
    ///
    /// A failing status drops the value.
    #[must_use]
    pub fn with_value<T>(self, value: T) -> StageResult<T> {
        match self.outcome {
            Outcome::Ok => StageResult {
                outcome: Outcome::Ok,
                details: self.details,
                failure: None,
                value: Some(value),
            },
            Outcome::Exception => StageResult {
                outcome: Outcome::Exception,
                details: self.details,
                failure: self.failure,
                value: None,
            },
        }
    }
}

/// Result of a transformation stage or a whole pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct StageResult<T> {
    outcome: Outcome,
    details: String,
    failure: Option<FailureKind>,
    value: Option<T>,
}

impl<T> StageResult<T> {
    /// Creates a passing result carrying `value`.
    #[must_use]
    pub fn ok(value: T, details: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Ok,
            details: details.into(),
            failure: None,
            value: Some(value),
        }
    }

    /// Creates a failing result; no value is carried.
    #[must_use]
    pub fn exception(failure: FailureKind, details: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Exception,
            details: details.into(),
            failure: Some(failure),
            value: None,
        }
    }

    /// Creates a failing result for a caller-defined step.
    #[must_use]
    pub fn fail(details: impl Into<String>) -> Self {
        Self::exception(FailureKind::Custom, details)
    }

    /// Returns the outcome.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the details message.
    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Returns the failure kind, present only for failures.
    #[must_use]
    pub const fn failure(&self) -> Option<FailureKind> {
        self.failure
    }

    /// Returns the value, present only when the outcome is OK.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Returns true if the outcome is OK.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Splits the result into its status and value.
    #[must_use]
    pub fn into_parts(self) -> (StatusResult, Option<T>) {
        (
            StatusResult {
                outcome: self.outcome,
                details: self.details,
                failure: self.failure,
            },
            self.value,
        )
    }
}
