//! Ready-made constrained kinds.
//!
//! - [`RangeValue`] / [`RangeSpec`]: inclusive ranges with numeric coercion
//! - [`EnumValue`] / [`EnumSpec`]: membership in a fixed set
//! - [`StrictValue`]: a wrapper that only holds valid values

mod enumeration;
mod range;
mod strict;


pub use enumeration::{kinds_of, EnumSpec, EnumValue, EMPTY_ENUMERATION, EMPTY_SEQUENCE};
pub use range::{infer_allowed_kinds, RangeSpec, RangeValue};
pub use strict::StrictValue;
