use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use trimmed_core::{TrimSpec, trimmed_mean};

use crate::cli::abstraction::{SampleArguments, TrimArguments};
use crate::smp::{self, SampleKind, file};

#[derive(Args, Debug)]
pub struct DemoCommandArguments {
	#[command(flatten)]
	pub sample: SampleArguments,
	#[command(flatten)]
	pub trim: TrimArguments,
	/// Directory the generated samples are saved to
	#[arg(long, value_name = "PATH", default_value = ".")]
	pub dir: PathBuf,
}

pub fn init(args: DemoCommandArguments) -> Result<()> {
	let DemoCommandArguments {
		sample,
		trim,
		dir,
	} = args;
	// Check the requested trimming before doing any work
	let specs = trim.specs()?;
	for spec in &specs {
		spec.validate()?;
	}
	// Generate one sample of each kind
	let mut rng = sample.rng();
	let samples = [SampleKind::Integers, SampleKind::Floats]
		.map(|kind| (kind, smp::generate(kind, sample.size, sample.max, &mut rng)));
	// Save the samples for cross-checking
	fs::create_dir_all(&dir)
		.with_context(|| format!("Failed to create the directory '{}'", dir.display()))?;
	for (kind, data) in &samples {
		let path = dir.join(kind.file_name());
		file::save(&path, data).with_context(|| {
			format!("Error saving {kind} data to '{}'", path.display())
		})?;
		info!("Saved {} {kind} to '{}'", data.len(), path.display());
	}
	// Compute every mean before printing anything
	let mut lines = Vec::with_capacity(specs.len() * samples.len());
	for spec in &specs {
		for (kind, data) in &samples {
			let name = describe(spec);
			let mean = trimmed_mean(data, *spec).with_context(|| {
				format!("Error computing {} trimmed mean for {kind}", name.to_lowercase())
			})?;
			lines.push(format!("{name} Trimmed Mean ({}) for {kind}: {mean}", label(spec)));
		}
	}
	for line in lines {
		println!("{line}");
	}
	Ok(())
}

fn describe(spec: &TrimSpec) -> &'static str {
	match spec {
		TrimSpec::Symmetric(_) => "Symmetric",
		TrimSpec::Asymmetric {
			..
		} => "Asymmetric",
	}
}

fn label(spec: &TrimSpec) -> String {
	match spec {
		TrimSpec::Symmetric(p) => format!("{p} trim"),
		TrimSpec::Asymmetric {
			lower,
			upper,
		} => format!("{lower} lower, {upper} upper trim"),
	}
}
