mod logs;

use anyhow::Result;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cnf::DEFAULT_LOG_LEVEL;

#[derive(Default, Debug, Clone)]
pub struct Builder {
	log_level: Option<String>,
}

pub fn builder() -> Builder {
	Builder::default()
}

impl Builder {
	/// Set the log level on the builder
	pub fn with_log_level(mut self, log_level: &str) -> Self {
		self.log_level = Some(log_level.to_string());
		self
	}

	/// Build a tracing dispatcher with the fmt subscriber (logs)
	pub fn build(self) -> Result<Box<dyn Subscriber + Send + Sync + 'static>> {
		let level = self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL);
		let filter = filter_from_value(level)?;
		let registry = tracing_subscriber::registry().with(logs::new(filter));
		Ok(Box::new(registry))
	}

	/// Install the tracing pipeline as the global default
	pub fn init(self) -> Result<()> {
		self.build()?.try_init()?;
		Ok(())
	}
}

/// Parses a log level name, or a full filter directive, into a filter.
///
/// Level names only raise the verbosity of this project's own targets.
pub fn filter_from_value(v: &str) -> Result<EnvFilter, ParseError> {
	match v {
		// Don't show any logs at all
		"none" => EnvFilter::builder().parse("off"),
		// Show logs from every crate at this level
		"full" => EnvFilter::builder().parse("trace"),
		// Otherwise, show only this project's logs at this level
		"error" | "warn" | "info" | "debug" | "trace" => {
			EnvFilter::builder().parse(format!("error,trimmed={v},trimmed_core={v}"))
		}
		// Let's try to parse the custom log filter
		_ => EnvFilter::builder().parse(v),
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;
	use tracing::Level;
	use tracing_subscriber::util::SubscriberInitExt;

	use super::*;

	#[rstest]
	#[case::none("none", "off")]
	#[case::full("full", "trace")]
	#[case::info("info", "error,trimmed=info,trimmed_core=info")]
	#[case::custom("trimmed_core=trace", "trimmed_core=trace")]
	fn filter_from_level(#[case] value: &str, #[case] expected: &str) {
		let filter = filter_from_value(value).unwrap();
		let expected = EnvFilter::builder().parse(expected).unwrap();
		assert_eq!(filter.to_string(), expected.to_string());
	}

	#[test]
	fn filter_from_invalid_value() {
		assert!(filter_from_value("trimmed=loud").is_err());
	}

	#[test]
	fn build_rejects_invalid_filter() {
		assert!(builder().with_log_level("trimmed=loud").build().is_err());
	}

	#[test]
	fn build_scoped_subscriber() {
		let _enter = builder().with_log_level("trace").build().unwrap().set_default();
		assert!(tracing::enabled!(target: "trimmed_core", Level::TRACE));
		assert!(!tracing::enabled!(target: "other_crate", Level::INFO));
	}
}
