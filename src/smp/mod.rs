//! Pseudo-random sample generation.

pub mod file;

use std::fmt::{self, Display, Formatter};

use rand::Rng;
use rand::distributions::Standard;

use crate::cnf::{FLOAT_DATA_FILE, INT_DATA_FILE};

/// The kind of values a generated sample holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleKind {
	/// Whole numbers drawn uniformly from `[0, max)`
	Integers,
	/// Real numbers drawn uniformly from `[0, max)`
	Floats,
}

impl SampleKind {
	/// The file name this kind of sample is saved to
	pub fn file_name(&self) -> &'static str {
		match self {
			Self::Integers => INT_DATA_FILE,
			Self::Floats => FLOAT_DATA_FILE,
		}
	}
}

impl Display for SampleKind {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Self::Integers => f.write_str("integers"),
			Self::Floats => f.write_str("floats"),
		}
	}
}

/// Generates `size` values of the given kind, each within `[0, max)`.
///
/// A `max` of zero is treated as one.
pub fn generate<R: Rng + ?Sized>(kind: SampleKind, size: usize, max: u32, rng: &mut R) -> Vec<f64> {
	let max = max.max(1);
	let values: Vec<f64> = match kind {
		SampleKind::Integers => (0..size).map(|_| f64::from(rng.gen_range(0..max))).collect(),
		SampleKind::Floats => {
			(0..size).map(|_| rng.sample::<f64, _>(Standard) * f64::from(max)).collect()
		}
	};
	trace!(%kind, size, max, "Generated a sample");
	values
}
