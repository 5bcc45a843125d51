//! Transformations that record every step they take.

use super::Transform;
use crate::core::{Outcome, StageResult};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// One recorded step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    /// Tag of the step that produced the record.
    pub tag: String,
    /// Outcome of the step.
    pub outcome: Outcome,
    /// Rendering of the input value.
    pub input: String,
    /// Rendering of the output value, or the error message.
    pub output: String,
}

/// Shared, append-only record of logged steps.
///
/// Clones share the same storage, so a handle kept by the caller observes
/// the records written while a pipeline runs.
#[derive(Debug, Clone, Default)]
pub struct StepLog {
    records: Arc<Mutex<Vec<StepRecord>>>,
}

impl StepLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the records in the order they were written.
    #[must_use]
    pub fn records(&self) -> Vec<StepRecord> {
        self.records.lock().clone()
    }

    /// Returns the tags in the order they were written.
    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        self.records.lock().iter().map(|r| r.tag.clone()).collect()
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Appends a record.
    pub fn push(&self, record: StepRecord) {
        self.records.lock().push(record);
    }
}

/// A tagged transformation closure whose every call is recorded.
///
/// The closure returns `Err(message)` to fail the pipeline; the failure is
/// reported as `"{tag}: {message}"`.
pub struct LoggedStep<F> {
    tag: String,
    log: StepLog,
    func: F,
}

impl<F> LoggedStep<F> {
    /// Creates a logged step writing into `log`.
    pub fn new(tag: impl Into<String>, log: &StepLog, func: F) -> Self {
        Self {
            tag: tag.into(),
            log: log.clone(),
            func,
        }
    }

    /// Returns the tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns a handle to the log this step writes into.
    #[must_use]
    pub fn log(&self) -> StepLog {
        self.log.clone()
    }
}

impl<F> fmt::Debug for LoggedStep<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggedStep")
            .field("tag", &self.tag)
            .field("records", &self.log.len())
            .finish_non_exhaustive()
    }
}

impl<T, F> Transform<T> for LoggedStep<F>
where
    T: fmt::Display,
    F: Fn(T) -> Result<T, String> + Send + Sync,
{
    fn transform(&self, value: T) -> StageResult<T> {
        let input = value.to_string();
        match (self.func)(value) {
            Ok(next) => {
                let output = next.to_string();
                tracing::debug!(tag = %self.tag, %input, %output, "step ok");
                self.log.push(StepRecord {
                    tag: self.tag.clone(),
                    outcome: Outcome::Ok,
                    input,
                    output,
                });
                StageResult::ok(next, self.tag.clone())
            }
            Err(message) => {
                tracing::debug!(tag = %self.tag, %input, error = %message, "step failed");
                let details = format!("{}: {message}", self.tag);
                self.log.push(StepRecord {
                    tag: self.tag.clone(),
                    outcome: Outcome::Exception,
                    input,
                    output: message,
                });
                StageResult::fail(details)
            }
        }
    }
}
