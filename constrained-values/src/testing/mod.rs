//! Testing utilities for constrained-value pipelines.
//!
//! This module provides:
//! - Counting and recording strategies for observing pipeline execution
//! - Assertions over constrained values

mod assertions;
mod mocks;

pub use assertions::{
    assert_details_contain, assert_failure_kind, assert_invalid, assert_payload, assert_valid,
};
pub use mocks::{
    CallCounter, CountingValidation, FailingTransform, PassThrough, RecordingStep, StepTrace,
};
