use std::fmt::{self, Display, Formatter};
use std::ops::Range;

use crate::cnf::MAX_TRIM_PROPORTION;
use crate::err::Error;

/// The proportions of a sample discarded from each end before averaging.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrimSpec {
	/// Discard the same proportion from both ends
	Symmetric(f64),
	/// Discard independent proportions from the lower and upper ends
	Asymmetric {
		lower: f64,
		upper: f64,
	},
}

impl TrimSpec {
	/// The proportion discarded from the lower end
	pub fn lower(&self) -> f64 {
		match *self {
			Self::Symmetric(p) => p,
			Self::Asymmetric {
				lower,
				..
			} => lower,
		}
	}

	/// The proportion discarded from the upper end
	pub fn upper(&self) -> f64 {
		match *self {
			Self::Symmetric(p) => p,
			Self::Asymmetric {
				upper,
				..
			} => upper,
		}
	}

	/// Checks that every proportion lies within [0, 0.5)
	pub fn validate(&self) -> Result<(), Error> {
		for p in [self.lower(), self.upper()] {
			// NaN is never contained in the range
			if !(0.0..MAX_TRIM_PROPORTION).contains(&p) {
				return Err(Error::InvalidTrimProportion(p));
			}
		}
		Ok(())
	}

	/// Computes the retained range of a sorted sample of `len` values.
	///
	/// The number of values discarded from each end is `len * proportion`
	/// truncated towards zero, never rounded.
	pub fn bounds(&self, len: usize) -> Bounds {
		let n = len as f64;
		let lower = (n * self.lower()) as usize;
		let upper = len.saturating_sub((n * self.upper()) as usize);
		Bounds {
			lower,
			upper,
		}
	}
}

impl From<f64> for TrimSpec {
	fn from(p: f64) -> Self {
		Self::Symmetric(p)
	}
}

impl From<(f64, f64)> for TrimSpec {
	fn from((lower, upper): (f64, f64)) -> Self {
		Self::Asymmetric {
			lower,
			upper,
		}
	}
}

impl TryFrom<&[f64]> for TrimSpec {
	type Error = Error;
	/// One proportion trims symmetrically, two trim the lower and upper ends
	fn try_from(proportions: &[f64]) -> Result<Self, Self::Error> {
		match *proportions {
			[p] => Ok(Self::Symmetric(p)),
			[lower, upper] => Ok(Self::Asymmetric {
				lower,
				upper,
			}),
			_ => Err(Error::InvalidArity(proportions.len())),
		}
	}
}

impl Display for TrimSpec {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Self::Symmetric(p) => write!(f, "{p}"),
			Self::Asymmetric {
				lower,
				upper,
			} => write!(f, "{lower}/{upper}"),
		}
	}
}

/// The half-open range `[lower, upper)` of a sorted sample which contributes to the mean.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
	pub lower: usize,
	pub upper: usize,
}

impl Bounds {
	pub fn len(&self) -> usize {
		self.upper.saturating_sub(self.lower)
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn range(&self) -> Range<usize> {
		self.lower..self.upper
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case::zero(TrimSpec::Symmetric(0.0))]
	#[case::small(TrimSpec::Symmetric(0.05))]
	#[case::just_below_half(TrimSpec::Symmetric(0.4999))]
	#[case::asymmetric(TrimSpec::Asymmetric { lower: 0.0, upper: 0.3 })]
	fn validate_accepts(#[case] trim: TrimSpec) {
		assert_eq!(trim.validate(), Ok(()));
	}

	#[rstest]
	#[case::half(TrimSpec::Symmetric(0.5), 0.5)]
	#[case::above_half(TrimSpec::Symmetric(0.6), 0.6)]
	#[case::negative(TrimSpec::Symmetric(-0.1), -0.1)]
	#[case::one(TrimSpec::Symmetric(1.0), 1.0)]
	#[case::invalid_lower(TrimSpec::Asymmetric { lower: 0.5, upper: 0.1 }, 0.5)]
	#[case::invalid_upper(TrimSpec::Asymmetric { lower: 0.1, upper: 0.75 }, 0.75)]
	#[case::infinite(TrimSpec::Symmetric(f64::INFINITY), f64::INFINITY)]
	fn validate_rejects(#[case] trim: TrimSpec, #[case] proportion: f64) {
		assert_eq!(trim.validate(), Err(Error::InvalidTrimProportion(proportion)));
	}

	#[test]
	fn validate_rejects_nan() {
		let res = TrimSpec::Symmetric(f64::NAN).validate();
		assert!(matches!(res, Err(Error::InvalidTrimProportion(p)) if p.is_nan()), "{res:?}");
	}

	#[rstest]
	#[case::untrimmed(10, TrimSpec::Symmetric(0.0), 0, 10)]
	#[case::asymmetric(10, TrimSpec::Asymmetric { lower: 0.1, upper: 0.3 }, 1, 7)]
	#[case::truncates_not_rounds(10, TrimSpec::Symmetric(0.19), 1, 9)]
	#[case::single_value(1, TrimSpec::Symmetric(0.4), 0, 1)]
	#[case::two_values(2, TrimSpec::Symmetric(0.49), 0, 2)]
	#[case::three_values(3, TrimSpec::Symmetric(0.4), 1, 2)]
	#[case::hundred(100, TrimSpec::Asymmetric { lower: 0.05, upper: 0.1 }, 5, 90)]
	#[case::empty(0, TrimSpec::Symmetric(0.2), 0, 0)]
	fn bounds(
		#[case] len: usize,
		#[case] trim: TrimSpec,
		#[case] lower: usize,
		#[case] upper: usize,
	) {
		assert_eq!(
			trim.bounds(len),
			Bounds {
				lower,
				upper
			}
		);
	}

	#[test]
	fn bounds_len() {
		let bounds = Bounds {
			lower: 1,
			upper: 7,
		};
		assert_eq!(bounds.len(), 6);
		assert_eq!(bounds.range(), 1..7);
		assert!(!bounds.is_empty());
		let bounds = Bounds {
			lower: 4,
			upper: 4,
		};
		assert!(bounds.is_empty());
	}

	#[rstest]
	#[case::one(&[0.1], TrimSpec::Symmetric(0.1))]
	#[case::two(&[0.05, 0.1], TrimSpec::Asymmetric { lower: 0.05, upper: 0.1 })]
	fn try_from_proportions(#[case] proportions: &[f64], #[case] expected: TrimSpec) {
		assert_eq!(TrimSpec::try_from(proportions), Ok(expected));
	}

	#[rstest]
	#[case::none(&[])]
	#[case::three(&[0.1, 0.2, 0.3])]
	fn try_from_invalid_arity(#[case] proportions: &[f64]) {
		assert_eq!(TrimSpec::try_from(proportions), Err(Error::InvalidArity(proportions.len())));
	}

	#[test]
	fn conversions() {
		assert_eq!(TrimSpec::from(0.2), TrimSpec::Symmetric(0.2));
		assert_eq!(
			TrimSpec::from((0.1, 0.3)),
			TrimSpec::Asymmetric {
				lower: 0.1,
				upper: 0.3
			}
		);
	}

	#[test]
	fn display() {
		assert_eq!(TrimSpec::Symmetric(0.05).to_string(), "0.05");
		assert_eq!(
			TrimSpec::Asymmetric {
				lower: 0.05,
				upper: 0.1
			}
			.to_string(),
			"0.05/0.1"
		);
	}
}
