//! Argument groups shared by several commands

use clap::{ArgAction, Args};
use rand::SeedableRng;
use rand::rngs::StdRng;
use trimmed_core::{Error, TrimSpec};

use crate::cnf::{DEFAULT_TRIM, DEFAULT_UPPER_TRIM, SAMPLE_MAX, SAMPLE_SIZE};

#[derive(Args, Debug)]
pub struct SampleArguments {
	/// Number of values to generate for each sample
	#[arg(long, default_value_t = *SAMPLE_SIZE)]
	pub size: usize,
	/// Exclusive upper bound of the generated values
	#[arg(long, default_value_t = *SAMPLE_MAX)]
	#[arg(value_parser = clap::value_parser!(u32).range(1..))]
	pub max: u32,
	/// Seed for the random number generator, drawn from the OS when omitted
	#[arg(long)]
	pub seed: Option<u64>,
}

impl SampleArguments {
	pub fn rng(&self) -> StdRng {
		match self.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_entropy(),
		}
	}
}

#[derive(Args, Debug)]
pub struct TrimArguments {
	/// Trim proportion, given once to trim both ends or twice to trim the lower and upper ends
	#[arg(long = "trim", value_name = "PROPORTION", action = ArgAction::Append)]
	#[arg(allow_negative_numbers = true)]
	pub proportions: Vec<f64>,
}

impl TrimArguments {
	/// The trim specifications to compute, falling back to the defaults when no proportion is given
	pub fn specs(&self) -> Result<Vec<TrimSpec>, Error> {
		if self.proportions.is_empty() {
			return Ok(vec![
				TrimSpec::Symmetric(*DEFAULT_TRIM),
				TrimSpec::Asymmetric {
					lower: *DEFAULT_TRIM,
					upper: *DEFAULT_UPPER_TRIM,
				},
			]);
		}
		Ok(vec![TrimSpec::try_from(self.proportions.as_slice())?])
	}
}
