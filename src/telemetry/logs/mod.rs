use tracing::{Level, Subscriber};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

pub fn new<S>(filter: EnvFilter) -> Box<dyn Layer<S> + Send + Sync>
where
	S: Subscriber + for<'a> LookupSpan<'a> + Send + Sync,
{
	// Only log INFO, DEBUG, TRACE to stdout
	let stdout = std::io::stdout.with_min_level(Level::INFO);
	// Only log WARN, ERROR to stderr
	let stderr = std::io::stderr.with_max_level(Level::WARN);
	// Configure
	tracing_subscriber::fmt::layer()
		.compact()
		.with_ansi(true)
		.with_file(cfg!(debug_assertions))
		.with_target(true)
		.with_line_number(cfg!(debug_assertions))
		.with_thread_ids(false)
		.with_thread_names(false)
		.with_span_events(FmtSpan::NONE)
		.with_writer(stdout.and(stderr))
		.with_filter(filter)
		.boxed()
}
