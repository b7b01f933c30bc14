//! Statistical helpers which operate on sequences of `f64` values.

pub mod mean;
pub mod trimmed;
