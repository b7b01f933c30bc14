mod abstraction;
mod compute;
mod demo;
mod sample;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use compute::ComputeCommandArguments;
use demo::DemoCommandArguments;
use sample::SampleCommandArguments;

use crate::cnf::{DEFAULT_LOG_LEVEL, PKG_NAME};

const INFO: &str = "
To get started, run the demo which generates two random samples,
saves them next to you, and prints their trimmed means:

  $ trimmed demo --seed 42

Saved samples can be checked again, or cross-checked by other tools:

  $ trimmed compute int_data.csv --trim 0.05 --trim 0.1
";

#[derive(Parser, Debug)]
#[command(name = "Trimmed command-line interface", bin_name = PKG_NAME)]
#[command(about = INFO, version)]
#[command(arg_required_else_help = true)]
struct Cli {
	/// The logging level, or a full log filter, for the command
	#[arg(long, env = "TRIMMED_LOG", default_value = DEFAULT_LOG_LEVEL, global = true)]
	log: String,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
	#[command(about = "Generate random samples, save them, and print their trimmed means")]
	Demo(DemoCommandArguments),
	#[command(about = "Compute the trimmed mean of a saved sample")]
	Compute(ComputeCommandArguments),
	#[command(about = "Generate a random sample and save it to a file")]
	Sample(SampleCommandArguments),
}

pub fn init() -> ExitCode {
	// Parse the CLI arguments
	let args = Cli::parse();
	// Initialize logging
	if let Err(e) = crate::telemetry::builder().with_log_level(&args.log).init() {
		eprintln!("Failed to initialize logging: {e:#}");
		return ExitCode::FAILURE;
	}
	// Run the selected command
	let output = match args.command {
		Commands::Demo(args) => demo::init(args),
		Commands::Compute(args) => compute::init(args),
		Commands::Sample(args) => sample::init(args),
	};
	// Report the error and stop
	if let Err(e) = output {
		eprintln!("{e:#}");
		ExitCode::FAILURE
	} else {
		ExitCode::SUCCESS
	}
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn verify_cli() {
		Cli::command().debug_assert();
	}

	#[test]
	fn parse_repeated_trims() {
		let args = ["trimmed", "compute", "data.csv", "--trim", "0.05", "--trim", "0.1"];
		let cli = Cli::try_parse_from(args).unwrap();
		let Commands::Compute(args) = cli.command else {
			panic!("expected the compute command");
		};
		assert_eq!(args.trim.proportions, vec![0.05, 0.1]);
	}

	#[test]
	fn parse_negative_trim() {
		let cli = Cli::try_parse_from(["trimmed", "demo", "--trim", "-0.1"]).unwrap();
		let Commands::Demo(args) = cli.command else {
			panic!("expected the demo command");
		};
		assert_eq!(args.trim.proportions, vec![-0.1]);
	}

	#[test]
	fn parse_rejects_zero_max() {
		assert!(Cli::try_parse_from(["trimmed", "demo", "--max", "0"]).is_err());
	}

	#[test]
	fn parse_global_log_level() {
		let cli = Cli::try_parse_from(["trimmed", "sample", "out.csv", "--log", "debug"]).unwrap();
		assert_eq!(cli.log, "debug");
	}
}
