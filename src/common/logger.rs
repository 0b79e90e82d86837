//! Logging setup for the chat server.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified default log level.
///
/// The level applies to both the library crate and the binary and can be
/// overridden with the `RUST_LOG` environment variable.
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    let default_filter = format!(
        "{}={},{}={}",
        env!("CARGO_PKG_NAME").replace("-", "_"),
        default_log_level,
        binary_name,
        default_log_level
    );

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
