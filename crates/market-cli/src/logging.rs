//! Logging initialization for the binary.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// `--debug` lowers the default level; `RUST_LOG` still wins when set.
pub fn init_logging(debug: bool) {
	let default_filter = if debug { "debug" } else { "info" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false)
		.try_init();
}
