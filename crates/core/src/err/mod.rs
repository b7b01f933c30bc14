use thiserror::Error;

/// An error originating from a trimmed mean computation.
///
/// Every variant is a validation failure. The computation is deterministic,
/// so retrying with the same input always fails in the same way.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
	/// The sample contains no values
	#[error("The sample is empty, at least one value is required")]
	EmptyInput,

	/// The trim proportions were given with neither one nor two components
	#[error("Invalid number of trim proportions: expected 1 or 2, found {0}")]
	InvalidArity(usize),

	/// A trim proportion lies outside of the range [0, 0.5)
	#[error("Invalid trim proportion {0}: must be in the range [0, 0.5)")]
	InvalidTrimProportion(f64),

	/// Every value of the sample was discarded by the trimming
	#[error(
		"All {len} values have been trimmed ({lower} from the lower end, {upper} from the upper end), no data left to compute the mean"
	)]
	AllElementsTrimmed {
		len: usize,
		lower: usize,
		upper: usize,
	},
}
