//! Plain-text sample files.
//!
//! A sample file holds one value per line, with no header, written in
//! decimal notation using the shortest digits which round-trip to the same
//! `f64`. The same files can be loaded by independent statistical tools to
//! cross-check the computed means.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::err::Error;

/// Writes each value of `data` on its own line, replacing any existing file.
pub fn save(path: &Path, data: &[f64]) -> Result<(), Error> {
	let file = File::create(path)?;
	let mut writer = BufWriter::new(file);
	for value in data {
		writeln!(writer, "{value}")?;
	}
	writer.flush()?;
	debug!(path = %path.display(), len = data.len(), "Saved sample");
	Ok(())
}

/// Reads a sample file, skipping blank lines and a leading byte order mark.
pub fn load(path: &Path) -> Result<Vec<f64>, Error> {
	let reader = BufReader::new(File::open(path)?);
	let mut values = Vec::new();
	for (idx, bytes) in reader.split(b'\n').enumerate() {
		let bytes = bytes?;
		let Ok(line) = std::str::from_utf8(&bytes) else {
			return Err(Error::InvalidRecord {
				line: idx + 1,
				value: String::from_utf8_lossy(&bytes).trim().to_owned(),
			});
		};
		let line = if idx == 0 {
			line.strip_prefix('\u{feff}').unwrap_or(line)
		} else {
			line
		};
		let record = line.trim();
		if record.is_empty() {
			continue;
		}
		match record.parse::<f64>() {
			Ok(value) if value.is_finite() => values.push(value),
			_ => {
				return Err(Error::InvalidRecord {
					line: idx + 1,
					value: record.to_owned(),
				});
			}
		}
	}
	debug!(path = %path.display(), len = values.len(), "Loaded sample");
	Ok(values)
}
