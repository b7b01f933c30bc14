use std::io::Error as IoError;

use thiserror::Error;

/// An error originating from the sample persistence layer.
#[derive(Error, Debug)]
pub enum Error {
	/// A line of a sample file did not hold a finite number
	#[error("Invalid record on line {line}: '{value}' is not a finite number")]
	InvalidRecord {
		line: usize,
		value: String,
	},

	/// There was an error reading or writing a sample file
	#[error("I/O error: {0}")]
	Io(#[from] IoError),
}
