//! Core domain model types.
//!
//! This module contains the fundamental types used throughout the crate:
//! - The outcome tag and stage result types
//! - The scalar runtime value model and enumeration support
//! - Concrete kinds and the immutable value wrapper

mod result;
mod scalar;
mod status;
mod value;

pub use result::{StageResult, StatusResult};
pub use scalar::{format_scalars, Enumeration, Member, Scalar, ScalarKind};
pub use status::Outcome;
pub use value::{same_kind, Kind, Value};

/// Details recorded when a pipeline completes without failure.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "validation successful";
