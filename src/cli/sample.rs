use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::abstraction::SampleArguments;
use crate::smp::{self, SampleKind, file};

#[derive(Args, Debug)]
pub struct SampleCommandArguments {
	/// Path of the file the sample is saved to
	#[arg(value_name = "FILE")]
	pub file: PathBuf,
	#[command(flatten)]
	pub sample: SampleArguments,
	/// Generate whole numbers instead of real numbers
	#[arg(long)]
	pub integers: bool,
}

pub fn init(args: SampleCommandArguments) -> Result<()> {
	let SampleCommandArguments {
		file: path,
		sample,
		integers,
	} = args;
	let kind = if integers {
		SampleKind::Integers
	} else {
		SampleKind::Floats
	};
	let data = smp::generate(kind, sample.size, sample.max, &mut sample.rng());
	file::save(&path, &data)
		.with_context(|| format!("Error saving {kind} data to '{}'", path.display()))?;
	info!("Saved {} {kind} to '{}'", data.len(), path.display());
	Ok(())
}
