//! Mock strategies for testing.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::core::{StageResult, StatusResult};
use crate::strategies::{Transform, Validate};

/// Shared call counter.
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    count: Arc<AtomicUsize>,
}

impl CallCounter {
    /// Creates a counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of recorded calls.
    #[must_use]
    pub fn get(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Records one call.
    pub fn increment(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }

    /// Resets the count.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

/// A validation that counts its calls and passes or fails as configured.
#[derive(Debug)]
pub struct CountingValidation {
    name: String,
    counter: CallCounter,
    failure: Option<String>,
}

impl CountingValidation {
    /// Creates a passing validation.
    #[must_use]
    pub fn passing(name: impl Into<String>, counter: &CallCounter) -> Self {
        Self {
            name: name.into(),
            counter: counter.clone(),
            failure: None,
        }
    }

    /// Creates a failing validation.
    #[must_use]
    pub fn failing(name: impl Into<String>, counter: &CallCounter, details: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            counter: counter.clone(),
            failure: Some(details.into()),
        }
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T> Validate<T> for CountingValidation {
    fn validate(&self, _value: &T) -> StatusResult {
        self.counter.increment();
        match &self.failure {
            Some(details) => StatusResult::fail(details.clone()),
            None => StatusResult::ok(self.name.clone()),
        }
    }
}

/// Shared, ordered list of stage names.
#[derive(Debug, Clone, Default)]
pub struct StepTrace {
    names: Arc<Mutex<Vec<String>>>,
}

impl StepTrace {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the names in call order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.names.lock().clone()
    }

    fn push(&self, name: &str) {
        self.names.lock().push(name.to_string());
    }
}

/// An identity transformation that records its name when called.
#[derive(Debug)]
pub struct RecordingStep {
    name: String,
    trace: StepTrace,
}

impl RecordingStep {
    /// Creates a step recording into `trace`.
    #[must_use]
    pub fn new(name: impl Into<String>, trace: &StepTrace) -> Self {
        Self {
            name: name.into(),
            trace: trace.clone(),
        }
    }
}

impl<T> Transform<T> for RecordingStep {
    fn transform(&self, value: T) -> StageResult<T> {
        self.trace.push(&self.name);
        StageResult::ok(value, self.name.clone())
    }
}

/// An identity transformation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl<T> Transform<T> for PassThrough {
    fn transform(&self, value: T) -> StageResult<T> {
        StageResult::ok(value, "pass through")
    }
}

/// A transformation that always fails.
#[derive(Debug, Clone)]
pub struct FailingTransform {
    details: String,
}

impl FailingTransform {
    /// Creates a failing transformation.
    #[must_use]
    pub fn new(details: impl Into<String>) -> Self {
        Self {
            details: details.into(),
        }
    }
}

impl<T> Transform<T> for FailingTransform {
    fn transform(&self, _value: T) -> StageResult<T> {
        StageResult::fail(self.details.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FailureKind;

    #[test]
    fn test_counting_validation() {
        let counter = CallCounter::new();
        let ok = CountingValidation::passing("a", &counter);
        let bad = CountingValidation::failing("b", &counter, "nope");

        assert!(Validate::<i64>::validate(&ok, &1).is_ok());
        let result = Validate::<i64>::validate(&bad, &1);
        assert_eq!(result.failure(), Some(FailureKind::Custom));
        assert_eq!(result.details(), "nope");
        assert_eq!(counter.get(), 2);
        assert_eq!(ok.name(), "a");

        counter.reset();
        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn test_recording_step() {
        let trace = StepTrace::new();
        let step = RecordingStep::new("first", &trace);
        let result = step.transform(3_i64);
        assert_eq!(result.value(), Some(&3));
        assert_eq!(trace.names(), vec!["first".to_string()]);
    }

    #[test]
    fn test_pass_through_and_failing() {
        assert_eq!(PassThrough.transform("x").value(), Some(&"x"));
        let failed = FailingTransform::new("broken").transform(1_u8);
        assert!(!failed.is_ok());
        assert_eq!(failed.details(), "broken");
    }
}
