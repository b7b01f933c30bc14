use std::sync::LazyLock;

/// The publicly visible name of the binary
pub const PKG_NAME: &str = "trimmed";

/// The file name the integer sample is saved to
pub const INT_DATA_FILE: &str = "int_data.csv";

/// The file name the real-valued sample is saved to
pub const FLOAT_DATA_FILE: &str = "float_data.csv";

/// The log filter used when none is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// How many values are generated for each sample (defaults to 100)
pub static SAMPLE_SIZE: LazyLock<usize> = lazy_env_parse!("TRIMMED_SAMPLE_SIZE", usize, 100);

/// The exclusive upper bound of generated values (defaults to 1000)
pub static SAMPLE_MAX: LazyLock<u32> = lazy_env_parse!("TRIMMED_SAMPLE_MAX", u32, 1000);

/// The proportion trimmed from each end when none is given (defaults to 0.05)
pub static DEFAULT_TRIM: LazyLock<f64> = lazy_env_parse!("TRIMMED_DEFAULT_TRIM", f64, 0.05);

/// The upper proportion used for asymmetric trimming when none is given (defaults to 0.1)
pub static DEFAULT_UPPER_TRIM: LazyLock<f64> =
	lazy_env_parse!("TRIMMED_DEFAULT_UPPER_TRIM", f64, 0.1);

#[cfg(test)]
mod tests {
	use trimmed_core::TrimSpec;

	use super::*;

	#[test]
	fn default_trims_are_valid() {
		let spec = TrimSpec::Asymmetric {
			lower: *DEFAULT_TRIM,
			upper: *DEFAULT_UPPER_TRIM,
		};
		assert_eq!(spec.validate(), Ok(()));
	}
}
