//! # Constrained values
//!
//! Typed values produced by threading a raw input through an ordered
//! pipeline of transformation and validation steps.
//!
//! Construction never fails. Each value records whether its pipeline
//! succeeded, the details of the deciding stage, and the canonical payload
//! when valid:
//!
//! - **Strategies**: small reusable steps that either inspect a value or
//!   convert it for the next stage
//! - **Short-circuit execution**: the first failing stage decides the outcome
//! - **Kind-safe comparisons**: values of different kinds never compare
//!   equal, and ordering across kinds or invalid values is an error
//! - **Ready-made kinds**: ranges with numeric coercion, enumerations, and a
//!   strict wrapper that only holds valid values
//!
//! ## Quick Start
//!
//! ```rust
//! use constrained_values::prelude::*;
//!
//! let age = RangeValue::new(42, 0, 150);
//! assert!(age.is_ok());
//! assert_eq!(age.value(), Some(&Scalar::from(42)));
//!
//! let level = EnumValue::new("verbose", ["debug", "info"]);
//! assert_eq!(level.status(), Outcome::Exception);
//! assert_eq!(
//!     level.details(),
//!     "Value must be one of ['debug', 'info'], got 'verbose'"
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod core;
pub mod errors;
pub mod kinds;
pub mod pipeline;
pub mod strategies;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{Enumeration, Kind, Member, Outcome, Scalar, ScalarKind, StageResult, StatusResult, Value};
    pub use crate::errors::{ConstraintError, FailureKind};
    pub use crate::kinds::{EnumSpec, EnumValue, RangeSpec, RangeValue, StrictValue};
    pub use crate::pipeline::{try_sort, ConstrainedValue, PipelineConfig};
    pub use crate::strategies::{
        CoerceTo, ExactType, FnTransformation, FnValidation, InRange, OneOf, Strategy, Transform,
        Validate,
    };
}
