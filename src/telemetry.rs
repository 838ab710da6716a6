//! Tracing subscriber installation from the resolved log settings.

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Map a configured level name onto a tracing filter directive.
///
/// Level names follow the app-server convention, so `warning` and
/// `critical` are accepted alongside the native tracing names. Unknown
/// names fall back to `debug`.
pub fn level_directive(level: &str) -> &'static str {
    recognized_directive(level).unwrap_or("debug")
}

fn recognized_directive(level: &str) -> Option<&'static str> {
    let directive = match level.to_ascii_lowercase().as_str() {
        "debug" => "debug",
        "info" => "info",
        "warning" | "warn" => "warn",
        "error" => "error",
        "critical" => "error",
        _ => return None,
    };
    Some(directive)
}

/// Install the global tracing subscriber.
///
/// Writes to stderr (the `-` stream selector on both configured sinks).
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init(logging: &LogConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(level_directive(&logging.level))),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    if recognized_directive(&logging.level).is_none() {
        tracing::warn!(level = %logging.level, "Unrecognized log level, defaulting to debug");
    }
}
