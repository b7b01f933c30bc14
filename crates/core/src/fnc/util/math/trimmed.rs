use super::mean::Mean;
use crate::err::Error;
use crate::val::{Bounds, Sorted, TrimSpec};

pub trait TrimmedMean {
	/// Gets the mean of the values left after discarding the trimmed
	/// proportions from each end of the sorted sequence
	fn trimmed_mean(&self, trim: TrimSpec) -> Result<f64, Error>;
}

impl TrimmedMean for Sorted<&Vec<f64>> {
	fn trimmed_mean(&self, trim: TrimSpec) -> Result<f64, Error> {
		Sorted(self.as_slice()).trimmed_mean(trim)
	}
}

impl TrimmedMean for Sorted<&[f64]> {
	fn trimmed_mean(&self, trim: TrimSpec) -> Result<f64, Error> {
		if self.0.is_empty() {
			return Err(Error::EmptyInput);
		}
		trim.validate()?;
		retained_mean(self.0, trim.bounds(self.0.len()))
	}
}

/// Averages the values of a sorted sequence which fall inside `bounds`
fn retained_mean(sorted: &[f64], bounds: Bounds) -> Result<f64, Error> {
	let len = sorted.len();
	trace!(len, lower = bounds.lower, upper = bounds.upper, "Computed the retained range");
	match sorted.get(bounds.range()) {
		Some(retained) if !retained.is_empty() => Ok(retained.mean()),
		_ => Err(Error::AllElementsTrimmed {
			len,
			lower: bounds.lower.min(len),
			upper: len.saturating_sub(bounds.upper),
		}),
	}
}
