use std::process::ExitCode;

fn main() -> ExitCode {
	trimmed::init() // Initiate the command line
}
