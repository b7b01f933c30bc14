use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use trimmed_core::trimmean;

use crate::cli::abstraction::TrimArguments;
use crate::cnf::DEFAULT_TRIM;
use crate::smp::file;

#[derive(Args, Debug)]
pub struct ComputeCommandArguments {
	/// Path to a sample file holding one value per line
	#[arg(value_name = "FILE")]
	pub file: PathBuf,
	#[command(flatten)]
	pub trim: TrimArguments,
}

pub fn init(args: ComputeCommandArguments) -> Result<()> {
	let ComputeCommandArguments {
		file: path,
		trim,
	} = args;
	// Load the sample
	let data = file::load(&path)
		.with_context(|| format!("Failed to load the sample from '{}'", path.display()))?;
	// Trim both ends by the default proportion unless told otherwise
	let proportions = if trim.proportions.is_empty() {
		vec![*DEFAULT_TRIM]
	} else {
		trim.proportions
	};
	let mean = trimmean((data, proportions))
		.with_context(|| format!("Error computing the trimmed mean of '{}'", path.display()))?;
	println!("{mean}");
	Ok(())
}
