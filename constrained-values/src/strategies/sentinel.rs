//! Always-failing sentinel.

use super::Validate;
use crate::core::StatusResult;
use crate::errors::FailureKind;

/// Fails unconditionally with a fixed message.
///
/// Used to carry configuration errors (such as an empty set of allowed
/// values) through the normal status channel instead of panicking while
/// the pipeline is assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlwaysFail {
    details: String,
}

impl AlwaysFail {
    /// Creates a sentinel with the given message.
    #[must_use]
    pub fn new(details: impl Into<String>) -> Self {
        Self {
            details: details.into(),
        }
    }

    /// Returns the message.
    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }
}

impl<T> Validate<T> for AlwaysFail {
    fn validate(&self, _value: &T) -> StatusResult {
        StatusResult::exception(FailureKind::ConfigurationError, self.details.clone())
    }
}
