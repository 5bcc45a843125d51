//! The constrained value itself.

use super::{run_pipeline, PipelineConfig};
use crate::core::{same_kind, Kind, Outcome, Value};
use crate::errors::{ConstraintError, FailureKind};
use crate::kinds::StrictValue;
use crate::strategies::Strategy;
use std::any::TypeId;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A raw input run once through an ordered pipeline, with the outcome frozen.
///
/// Construction never fails: domain violations are recorded as an
/// [`Outcome::Exception`] status with details and a [`FailureKind`].
///
/// # Equality and hashing
///
/// Two instances are equal only when they have the same kind, both are
/// valid, and their payloads are equal. An invalid instance is not even
/// equal to itself. `Eq` is still implemented so that valid instances can
/// be collected into hash sets; invalid instances all hash alike per kind.
///
/// # Ordering
///
/// There is no `PartialOrd`. Use [`try_cmp`](Self::try_cmp) and friends,
/// which report a [`ConstraintError`] for mismatched kinds or invalid
/// operands instead of silently answering `false`.
pub struct ConstrainedValue<K: Kind> {
    strategies: Arc<[Strategy<K::Value>]>,
    input: String,
    status: Outcome,
    details: String,
    failure: Option<FailureKind>,
    value: Option<Value<K>>,
}

impl<K: Kind> ConstrainedValue<K> {
    /// Runs `raw` through `strategies` with the default configuration.
    pub fn new(raw: impl Into<K::Value>, strategies: Vec<Strategy<K::Value>>) -> Self {
        Self::with_config(raw, strategies, &PipelineConfig::default())
    }

    /// Runs `raw` through `strategies` with an explicit configuration.
    pub fn with_config(
        raw: impl Into<K::Value>,
        strategies: Vec<Strategy<K::Value>>,
        config: &PipelineConfig,
    ) -> Self {
        Self::from_shared(raw, Arc::from(strategies), config)
    }

    /// Runs `raw` through `strategies`, recording `details` on success.
    pub fn with_success_details(
        raw: impl Into<K::Value>,
        strategies: Vec<Strategy<K::Value>>,
        details: impl Into<String>,
    ) -> Self {
        Self::with_config(
            raw,
            strategies,
            &PipelineConfig::new().with_success_details(details),
        )
    }

    /// Runs `raw` through a pipeline shared with other instances.
    pub fn from_shared(
        raw: impl Into<K::Value>,
        strategies: Arc<[Strategy<K::Value>]>,
        config: &PipelineConfig,
    ) -> Self {
        let raw = raw.into();
        let input = raw.to_string();
        let (status, value) = run_pipeline(K::NAME, raw, &strategies, config).into_parts();
        Self {
            strategies,
            input,
            status: status.outcome(),
            details: status.details().to_string(),
            failure: status.failure(),
            value: value.map(Value::new),
        }
    }

    /// Returns the outcome of the pipeline.
    #[must_use]
    pub const fn status(&self) -> Outcome {
        self.status
    }

    /// Returns the raw input as it was rendered before the first stage.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the details recorded by the pipeline.
    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Returns why the pipeline failed, if it did.
    #[must_use]
    pub const fn failure(&self) -> Option<FailureKind> {
        self.failure
    }

    /// Returns the canonical payload when valid.
    #[must_use]
    pub fn value(&self) -> Option<&K::Value> {
        self.value.as_ref().map(Value::get)
    }

    /// Returns the wrapped value when valid.
    #[must_use]
    pub const fn as_value(&self) -> Option<&Value<K>> {
        self.value.as_ref()
    }

    /// Returns an owned copy of the wrapped value when valid.
    #[must_use]
    pub fn to_value(&self) -> Option<Value<K>> {
        self.value.clone()
    }

    /// Consumes `self`, returning the wrapped value when valid.
    #[must_use]
    pub fn into_value(self) -> Option<Value<K>> {
        self.value
    }

    /// Returns true if every stage passed.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status.is_ok()
    }

    /// Returns the payload, or an error carrying the recorded details.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::Invalid`] when the status is `EXCEPTION`.
    pub fn unwrap(&self) -> Result<&K::Value, ConstraintError> {
        self.value()
            .ok_or_else(|| ConstraintError::invalid(K::NAME, self.details.clone()))
    }

    /// Returns the pipeline that produced this value.
    #[must_use]
    pub fn strategies(&self) -> &[Strategy<K::Value>] {
        &self.strategies
    }

    /// Returns the name of the concrete kind.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        K::NAME
    }

    /// Converts into a [`StrictValue`], failing if invalid.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::Rejected`] when the status is `EXCEPTION`.
    pub fn into_strict(self) -> Result<StrictValue<K>, ConstraintError> {
        StrictValue::new(self)
    }

    /// Orders two values of the same kind.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::KindMismatch`] when the kinds differ.
    /// - [`ConstraintError::InvalidComparison`] when either side is invalid.
    /// - [`ConstraintError::Incomparable`] when the payloads have no order.
    pub fn try_cmp<K2: Kind>(&self, other: &ConstrainedValue<K2>) -> Result<Ordering, ConstraintError> {
        if !same_kind::<K, K2>() {
            return Err(ConstraintError::KindMismatch {
                left: K::NAME,
                right: K2::NAME,
            });
        }
        match (&self.value, &other.value) {
            (Some(left), Some(right)) => left.try_cmp(right),
            _ => Err(ConstraintError::InvalidComparison { kind: K::NAME }),
        }
    }

    /// `self < other`.
    ///
    /// # Errors
    ///
    /// See [`ConstrainedValue::try_cmp`].
    pub fn try_lt<K2: Kind>(&self, other: &ConstrainedValue<K2>) -> Result<bool, ConstraintError> {
        Ok(self.try_cmp(other)?.is_lt())
    }

    /// `self <= other`.
    ///
    /// # Errors
    ///
    /// See [`ConstrainedValue::try_cmp`].
    pub fn try_le<K2: Kind>(&self, other: &ConstrainedValue<K2>) -> Result<bool, ConstraintError> {
        Ok(self.try_cmp(other)?.is_le())
    }

    /// `self > other`.
    ///
    /// # Errors
    ///
    /// See [`ConstrainedValue::try_cmp`].
    pub fn try_gt<K2: Kind>(&self, other: &ConstrainedValue<K2>) -> Result<bool, ConstraintError> {
        Ok(self.try_cmp(other)?.is_gt())
    }

    /// `self >= other`.
    ///
    /// # Errors
    ///
    /// See [`ConstrainedValue::try_cmp`].
    pub fn try_ge<K2: Kind>(&self, other: &ConstrainedValue<K2>) -> Result<bool, ConstraintError> {
        Ok(self.try_cmp(other)?.is_ge())
    }
}

/// Sorts values of one kind in ascending order.
///
/// The slice is left untouched if any element is invalid or two payloads
/// have no defined order.
///
/// # Errors
///
/// Returns the first comparison error encountered.
pub fn try_sort<K: Kind>(values: &mut [ConstrainedValue<K>]) -> Result<(), ConstraintError> {
    if let Some(first) = values.first() {
        for other in values.iter() {
            first.try_cmp(other)?;
        }
    }
    let mut error = None;
    values.sort_by(|a, b| {
        a.try_cmp(b).unwrap_or_else(|e| {
            error.get_or_insert(e);
            Ordering::Equal
        })
    });
    error.map_or(Ok(()), Err)
}

impl<K: Kind> Clone for ConstrainedValue<K> {
    fn clone(&self) -> Self {
        Self {
            strategies: Arc::clone(&self.strategies),
            input: self.input.clone(),
            status: self.status,
            details: self.details.clone(),
            failure: self.failure,
            value: self.value.clone(),
        }
    }
}

impl<K: Kind> fmt::Debug for ConstrainedValue<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstrainedValue")
            .field("kind", &K::NAME)
            .field("status", &self.status)
            .field("details", &self.details)
            .field("value", &self.value())
            .field("stages", &self.strategies.len())
            .finish()
    }
}

impl<K: Kind> fmt::Display for ConstrainedValue<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => fmt::Display::fmt(value, f),
            None => write!(f, "<invalid {}: {}>", K::NAME, self.details),
        }
    }
}

impl<K: Kind, K2: Kind> PartialEq<ConstrainedValue<K2>> for ConstrainedValue<K> {
    fn eq(&self, other: &ConstrainedValue<K2>) -> bool {
        match (&self.value, &other.value) {
            (Some(left), Some(right)) => left == right,
            _ => false,
        }
    }
}

// Not reflexive for invalid instances; see the type docs.
impl<K: Kind> Eq for ConstrainedValue<K> {}

impl<K: Kind> Hash for ConstrainedValue<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.value {
            Some(value) => value.hash(state),
            None => {
                TypeId::of::<K>().hash(state);
                self.status.hash(state);
            }
        }
    }
}
