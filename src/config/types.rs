//! Core configuration types and loading.

use serde::Serialize;
use thiserror::Error;

use super::defaults;
use super::env::Environment;

/// Configuration errors.
///
/// There is exactly one failure mode: a declared-integer variable holding
/// text that does not parse. Missing optional variables are not errors;
/// they resolve to the documented defaults.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid integer in {var}: {value:?}")]
    InvalidInteger {
        var: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Resolved server-manager configuration.
///
/// Built once at startup by [`Config::load`] and immutable thereafter. The
/// process manager consumes it by reference; nothing here is global state.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Hosted application settings.
    pub app: AppConfig,
    /// Worker pool settings.
    pub workers: WorkerConfig,
    /// Logging settings.
    pub logging: LogConfig,
    /// Statsd metrics sink, `None` when disabled.
    pub statsd: Option<StatsdConfig>,
}

/// Hosted application settings.
#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    /// Application entry point the server framework loads.
    pub target: String,
    /// Listen addresses, in bind order.
    pub bind: Vec<String>,
    /// Reload the application on source changes (`DEBUG` truthy).
    pub reload: bool,
}

/// Worker pool settings.
#[derive(Debug, Clone, Serialize)]
pub struct WorkerConfig {
    /// Number of worker processes.
    pub count: usize,
    /// Worker concurrency model. An open set: the framework also accepts
    /// dotted paths to custom worker classes.
    pub class: String,
    /// Scratch directory for worker bookkeeping files. Points at an
    /// in-memory filesystem so heartbeat writes never block on disk.
    pub tmp_dir: String,
    /// Threads per worker (threaded worker classes only).
    pub threads: usize,
    /// Seconds a keep-alive connection is held open awaiting more requests.
    pub keepalive_secs: u64,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize)]
pub struct LogConfig {
    /// Error log stream selector (`"-"` = stderr).
    pub error_log: String,
    /// Access log stream selector (`"-"` = stderr).
    pub access_log: String,
    /// Log level name (`debug`, `info`, `warning`, `error`, `critical`).
    pub level: String,
    /// Access log line template, one line per handled request.
    pub access_format: String,
}

/// Statsd metrics sink settings.
#[derive(Debug, Clone, Serialize)]
pub struct StatsdConfig {
    /// Sink address, `host:port`.
    pub host: String,
    /// Key prefix prepended to every forwarded metric.
    pub prefix: String,
}

impl Config {
    /// Resolve the configuration from an environment snapshot.
    ///
    /// Every setting has a usable default, so an empty environment yields a
    /// fully-populated record. A non-numeric value in an integer-typed
    /// variable fails the whole load (fail-fast, no partial result).
    pub fn load(env: &Environment) -> Result<Self, ConfigError> {
        let workers = WorkerConfig {
            count: env
                .integer("GUNICORN_WORKERS")?
                .unwrap_or_else(defaults::default_workers),
            class: env.string("GUNICORN_WORKER_CLASS", defaults::DEFAULT_WORKER_CLASS),
            tmp_dir: defaults::DEFAULT_WORKER_TMP_DIR.to_string(),
            threads: env
                .integer("GUNICORN_THREADS")?
                .unwrap_or(defaults::DEFAULT_THREADS),
            keepalive_secs: env
                .integer("GUNICORN_KEEP_ALIVE")?
                .unwrap_or(defaults::DEFAULT_KEEPALIVE_SECS),
        };

        let logging = LogConfig {
            error_log: defaults::DEFAULT_LOG_SINK.to_string(),
            access_log: defaults::DEFAULT_LOG_SINK.to_string(),
            level: env.string("GUNICORN_LOG_LEVEL", defaults::DEFAULT_LOG_LEVEL),
            access_format: env.string(
                "GUNICORN_ACCESS_LOG_FORMAT",
                defaults::DEFAULT_ACCESS_FORMAT,
            ),
        };

        // Unset host disables the sink; a prefix on its own does nothing.
        let statsd = env.get("GUNICORN_STATSD_HOST").map(|host| StatsdConfig {
            host: host.to_string(),
            prefix: env.string("GUNICORN_STATSD_PREFIX", ""),
        });

        Ok(Self {
            app: AppConfig {
                target: defaults::DEFAULT_APP_TARGET.to_string(),
                bind: defaults::default_bind(),
                reload: env.flag("DEBUG"),
            },
            workers,
            logging,
            statsd,
        })
    }

    /// Resolve the configuration from the current process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(&Environment::process())
    }
}
