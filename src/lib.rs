//! Library entrypoints for the `trimmed` binary.
//!
//! Exposes the same `init()` used by the binary, along with the sample
//! generation and persistence helpers that the command line is built from.

#[macro_use]
extern crate tracing;

#[macro_use]
extern crate trimmed_core;

mod cli;
pub mod cnf;
pub mod err;
pub mod smp;
mod telemetry;

pub use cli::init;
