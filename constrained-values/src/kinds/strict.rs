//! Fail-fast constrained values.

use crate::core::{Kind, Value};
use crate::errors::ConstraintError;
use crate::pipeline::ConstrainedValue;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A constrained value that is valid by construction.
///
/// Building one from an invalid [`ConstrainedValue`] returns
/// [`ConstraintError::Rejected`] naming the raw input and the recorded details.
pub struct StrictValue<K: Kind> {
    value: Value<K>,
    details: String,
}

impl<K: Kind> StrictValue<K> {
    /// Accepts `value` only if its pipeline succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::Rejected`] when the status is `EXCEPTION`.
    pub fn new(value: ConstrainedValue<K>) -> Result<Self, ConstraintError> {
        let details = value.details().to_string();
        let input = value.input().to_string();
        match value.into_value() {
            Some(value) => Ok(Self { value, details }),
            None => {
                tracing::warn!(kind = K::NAME, %input, %details, "rejected invalid value");
                Err(ConstraintError::rejected(K::NAME, input, details))
            }
        }
    }

    /// Returns the payload.
    #[must_use]
    pub const fn value(&self) -> &K::Value {
        self.value.get()
    }

    /// Returns the wrapped value.
    #[must_use]
    pub const fn as_value(&self) -> &Value<K> {
        &self.value
    }

    /// Consumes `self`, returning the payload.
    #[must_use]
    pub fn into_inner(self) -> K::Value {
        self.value.into_inner()
    }

    /// Returns the success details.
    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Orders two strict values.
    ///
    /// # Errors
    ///
    /// See [`Value::try_cmp`].
    pub fn try_cmp<K2: Kind>(&self, other: &StrictValue<K2>) -> Result<Ordering, ConstraintError> {
        self.value.try_cmp(&other.value)
    }
}

impl<K: Kind> TryFrom<ConstrainedValue<K>> for StrictValue<K> {
    type Error = ConstraintError;

    fn try_from(value: ConstrainedValue<K>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<K: Kind> Clone for StrictValue<K> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            details: self.details.clone(),
        }
    }
}

impl<K: Kind> fmt::Debug for StrictValue<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StrictValue").field(&self.value).finish()
    }
}

impl<K: Kind> fmt::Display for StrictValue<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<K: Kind, K2: Kind> PartialEq<StrictValue<K2>> for StrictValue<K> {
    fn eq(&self, other: &StrictValue<K2>) -> bool {
        self.value == other.value
    }
}

impl<K: Kind> Eq for StrictValue<K> {}

impl<K: Kind> Hash for StrictValue<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}
