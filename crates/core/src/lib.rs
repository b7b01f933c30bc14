//! # Trimmed Core
//!
//! This crate is the core library of the trimmed mean tooling. It contains
//! the trimming and averaging algorithm, the trim specification and the error
//! type on top of which the `trimmed` binary is implemented.
//!
//! ```
//! use trimmed_core::{TrimSpec, trimmed_mean};
//!
//! let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! // Discard one value from the bottom and three from the top
//! let mean = trimmed_mean(&data, TrimSpec::Asymmetric {
//! 	lower: 0.1,
//! 	upper: 0.3,
//! })
//! .unwrap();
//! assert_eq!(mean, 4.5);
//! ```

#[macro_use]
extern crate tracing;

#[macro_use]
mod mac;

pub mod cnf;
pub mod err;
pub mod fnc;
pub mod val;

pub use err::Error;
pub use fnc::math::{trimmean, trimmed_mean, trimmed_mean_owned};
pub use val::{Bounds, Sort, Sorted, TrimSpec};
