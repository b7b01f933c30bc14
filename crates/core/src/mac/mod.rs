/// A macro that allows lazily parsing a value from the environment variable,
/// with a fallback default value if the variable is not set or parsing fails.
///
/// # Parameters
///
/// - `$key`: An expression representing the name of the environment variable.
/// - `$t`: The type of the value to be parsed.
/// - `$default`: The default value to fall back to if the environment variable is not set or
///   parsing fails.
///
/// # Return Value
///
/// A lazy static variable of type `std::sync::LazyLock`, which holds the parsed
/// value from the environment variable or the default value.
#[macro_export]
macro_rules! lazy_env_parse {
	// With no default specified
	($key:expr_2021, $t:ty) => {
		std::sync::LazyLock::new(|| {
			std::env::var($key).ok().and_then(|s| s.trim().parse::<$t>().ok()).unwrap_or_default()
		})
	};
	// With a closure for the default value
	($key:expr_2021, $t:ty, || $default:expr_2021) => {
		std::sync::LazyLock::new(|| {
			std::env::var($key)
				.ok()
				.and_then(|s| s.trim().parse::<$t>().ok())
				.unwrap_or_else(|| $default)
		})
	};
	// With a static expression for the default value
	($key:expr_2021, $t:ty, $default:expr_2021) => {
		std::sync::LazyLock::new(|| {
			std::env::var($key).ok().and_then(|s| s.trim().parse::<$t>().ok()).unwrap_or($default)
		})
	};
}

#[cfg(test)]
mod tests {
	use std::sync::LazyLock;

	#[test]
	fn lazy_env_parse_falls_back_on_invalid_value() {
		temp_env::with_var("TRIMMED_TEST_INVALID_VARIABLE", Some("not-a-number"), || {
			let value: LazyLock<f64> =
				lazy_env_parse!("TRIMMED_TEST_INVALID_VARIABLE", f64, || 0.25 * 2.0);
			assert_eq!(*value, 0.5);
		});
	}

	#[test]
	fn lazy_env_parse_reads_value() {
		temp_env::with_var("TRIMMED_TEST_VALID_VARIABLE", Some(" 0.125 "), || {
			let value: LazyLock<f64> = lazy_env_parse!("TRIMMED_TEST_VALID_VARIABLE", f64);
			assert_eq!(*value, 0.125);
		});
	}

	#[test]
	fn lazy_env_parse_falls_back_when_unset() {
		temp_env::with_var_unset("TRIMMED_TEST_UNSET_VARIABLE", || {
			let value: LazyLock<usize> = lazy_env_parse!("TRIMMED_TEST_UNSET_VARIABLE", usize, 42);
			assert_eq!(*value, 42);
		});
	}
}
