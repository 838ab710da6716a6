//! guniconf - environment-driven configuration for a preforking application
//! server manager.
//!
//! The crate owns two things and nothing else:
//!
//! - the [`Config`] record: worker sizing, socket binding, logging and
//!   metrics-sink settings, resolved once at startup from `GUNICORN_*`
//!   environment variables with documented defaults, immutable afterwards;
//! - the [`LifecycleObserver`] hooks the process manager fires as it forks,
//!   reloads and reaps workers, with [`LogObserver`] as the stock
//!   implementation that turns each event into one structured log line.
//!
//! Forking, socket binding, signal handling and request dispatch all live in
//! the external server framework that consumes this configuration.

pub mod config;
pub mod lifecycle;
pub mod telemetry;

pub use config::{Config, ConfigError, Environment};
pub use lifecycle::{LifecycleObserver, LogObserver};
