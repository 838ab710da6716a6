//! Default configuration values.
//!
//! Separated into its own module for clarity and reuse.

/// Application entry point the server framework loads.
pub const DEFAULT_APP_TARGET: &str = "testapp.wsgi";

/// Threaded worker model.
pub const DEFAULT_WORKER_CLASS: &str = "gthread";

/// Worker scratch directory. `/dev/shm` is memory-backed, so worker
/// heartbeat files never block on disk I/O.
pub const DEFAULT_WORKER_TMP_DIR: &str = "/dev/shm";

/// Threads per worker.
pub const DEFAULT_THREADS: usize = 4;

/// Keep-alive timeout in seconds.
pub const DEFAULT_KEEPALIVE_SECS: u64 = 90;

/// Stream selector for both log sinks: `-` is the standard error stream.
pub const DEFAULT_LOG_SINK: &str = "-";

/// Log level name.
pub const DEFAULT_LOG_LEVEL: &str = "debug";

/// Access log line template: remote host, request line, status, response
/// bytes, referer, user agent.
pub const DEFAULT_ACCESS_FORMAT: &str = r#"%(h)s "%(r)s" %(s)s %(b)s "%(f)s" "%(a)s""#;

/// Listen addresses, in bind order.
pub fn default_bind() -> Vec<String> {
    vec!["0.0.0.0:8000".to_string()]
}

/// Worker process count: two workers per logical CPU plus one, the usual
/// sizing for a mostly-I/O-bound request mix.
pub fn default_workers() -> usize {
    2 * num_cpus::get() + 1
}
