//! Pipeline execution and the constrained value.
//!
//! This module provides:
//! - Pipeline configuration
//! - The short-circuiting execution engine
//! - [`ConstrainedValue`], which runs its pipeline once at construction

mod config;
mod constrained;
mod engine;


pub use config::PipelineConfig;
pub use constrained::{try_sort, ConstrainedValue};
pub use engine::run_pipeline;
