use crate::err::Error;
use crate::fnc::util::math::trimmed::TrimmedMean;
use crate::val::{Sort, TrimSpec};

/// Computes the trimmed mean of `data`.
///
/// The values are sorted into an internally owned copy, so the caller's
/// slice is left untouched. Both a single proportion and a `(lower, upper)`
/// pair convert into a [`TrimSpec`].
pub fn trimmed_mean(data: &[f64], trim: impl Into<TrimSpec>) -> Result<f64, Error> {
	trimmed_mean_owned(data.to_vec(), trim)
}

/// Computes the trimmed mean of `data`, sorting the vector in place.
pub fn trimmed_mean_owned(mut data: Vec<f64>, trim: impl Into<TrimSpec>) -> Result<f64, Error> {
	let trim = trim.into();
	let len = data.len();
	let result = data.sorted().trimmed_mean(trim)?;
	debug!(len, %trim, result, "Computed the trimmed mean");
	Ok(result)
}

/// Computes the trimmed mean from a list of proportions, where one
/// proportion trims both ends and two trim the lower and upper ends.
pub fn trimmean((data, proportions): (Vec<f64>, Vec<f64>)) -> Result<f64, Error> {
	if data.is_empty() {
		return Err(Error::EmptyInput);
	}
	let trim = TrimSpec::try_from(proportions.as_slice())?;
	trimmed_mean_owned(data, trim)
}
