//! Pipeline strategies.
//!
//! A pipeline is an ordered list of [`Strategy`] values. Each strategy is one
//! of exactly two shapes:
//!
//! - [`Validate`]: inspects the current value and reports an outcome without
//!   changing it.
//! - [`Transform`]: consumes the current value and, on success, hands the
//!   next stage a new one (possibly in a different representation).
//!
//! The built-in strategies operate on [`Scalar`](crate::core::Scalar).
//! Closures can be lifted into strategies with [`FnValidation`] and
//! [`FnTransformation`].

mod coerce;
mod logged;
mod membership;
mod range;
mod sentinel;
mod text;
mod types;

pub use coerce::{coerce, CoerceTo};
pub use logged::{LoggedStep, StepLog, StepRecord};
pub use membership::{MemberToValue, OneOf};
pub use range::InRange;
pub use sentinel::AlwaysFail;
pub use text::{Lowercase, MatchesPattern, ParseDate, ParseUuid, Trim, Uppercase, DEFAULT_DATE_FORMATS};
pub use types::{ExactType, SameType};

use crate::core::{StageResult, StatusResult};
use std::fmt;

/// A strategy that inspects a value without changing it.
pub trait Validate<T>: Send + Sync + fmt::Debug {
    /// Checks `value` and reports the outcome.
    fn validate(&self, value: &T) -> StatusResult;
}

/// A strategy that converts a value before the next stage.
pub trait Transform<T>: Send + Sync + fmt::Debug {
    /// Converts `value`, returning the next value on success.
    fn transform(&self, value: T) -> StageResult<T>;
}

/// One stage of a pipeline.
pub enum Strategy<T> {
    /// Inspects the value; the value passes through unchanged.
    Validation(Box<dyn Validate<T>>),
    /// Converts the value; the result feeds the next stage.
    Transformation(Box<dyn Transform<T>>),
}

impl<T> Strategy<T> {
    /// Wraps a validation strategy.
    pub fn validation(strategy: impl Validate<T> + 'static) -> Self {
        Self::Validation(Box::new(strategy))
    }

    /// Wraps a transformation strategy.
    pub fn transformation(strategy: impl Transform<T> + 'static) -> Self {
        Self::Transformation(Box::new(strategy))
    }

    /// Returns the shape name, for diagnostics.
    #[must_use]
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Transformation(_) => "transformation",
        }
    }

    /// Runs the strategy against `value`.
    ///
    /// Validations carry the input value forward unchanged when they pass.
    pub fn apply(&self, value: T) -> StageResult<T> {
        match self {
            Self::Validation(strategy) => strategy.validate(&value).with_value(value),
            Self::Transformation(strategy) => strategy.transform(value),
        }
    }
}

impl<T> fmt::Debug for Strategy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(strategy) => f.debug_tuple("Validation").field(strategy).finish(),
            Self::Transformation(strategy) => {
                f.debug_tuple("Transformation").field(strategy).finish()
            }
        }
    }
}

/// A validation backed by a closure.
pub struct FnValidation<F> {
    name: String,
    func: F,
}

impl<F> FnValidation<F> {
    /// Creates a new closure-based validation.
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> fmt::Debug for FnValidation<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnValidation")
            .field("name", &self.name)
            .finish()
    }
}

impl<T, F> Validate<T> for FnValidation<F>
where
    F: Fn(&T) -> StatusResult + Send + Sync,
{
    fn validate(&self, value: &T) -> StatusResult {
        (self.func)(value)
    }
}

/// A transformation backed by a closure.
pub struct FnTransformation<F> {
    name: String,
    func: F,
}

impl<F> FnTransformation<F> {
    /// Creates a new closure-based transformation.
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> fmt::Debug for FnTransformation<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTransformation")
            .field("name", &self.name)
            .finish()
    }
}

impl<T, F> Transform<T> for FnTransformation<F>
where
    F: Fn(T) -> StageResult<T> + Send + Sync,
{
    fn transform(&self, value: T) -> StageResult<T> {
        (self.func)(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Outcome;
    use crate::errors::FailureKind;

    #[test]
    fn test_validation_passes_value_through() {
        let strategy: Strategy<i64> = Strategy::validation(FnValidation::new("positive", |v: &i64| {
            if *v > 0 {
                StatusResult::ok("positive")
            } else {
                StatusResult::fail("not positive")
            }
        }));

        assert_eq!(strategy.shape(), "validation");
        let result = strategy.apply(7);
        assert!(result.is_ok());
        assert_eq!(result.value(), Some(&7));

        let result = strategy.apply(-1);
        assert_eq!(result.outcome(), Outcome::Exception);
        assert_eq!(result.failure(), Some(FailureKind::Custom));
        assert!(result.value().is_none());
    }

    #[test]
    fn test_transformation_replaces_value() {
        let strategy: Strategy<i64> = Strategy::transformation(FnTransformation::new("double", |v: i64| {
            StageResult::ok(v * 2, "double")
        }));

        assert_eq!(strategy.shape(), "transformation");
        let result = strategy.apply(21);
        assert_eq!(result.value(), Some(&42));
        assert_eq!(result.details(), "double");
    }

    #[test]
    fn test_debug_names_the_closure() {
        let strategy: Strategy<String> =
            Strategy::transformation(FnTransformation::new("trim", |v: String| {
                StageResult::ok(v.trim().to_string(), "trim")
            }));
        let rendered = format!("{strategy:?}");
        assert!(rendered.contains("Transformation"));
        assert!(rendered.contains("trim"));
    }
}
