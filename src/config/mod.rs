//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`env`]: the single boundary for environment access ([`Environment`])
//! - [`types`]: the resolved configuration record ([`Config`] and its sections)
//! - `defaults`: default value functions
//!
//! Resolution happens exactly once at startup: [`Config::load`] reads a
//! snapshot of the environment and produces an immutable, fully-populated
//! record. Nothing in this crate mutates the record afterwards.

mod defaults;
mod env;
mod types;

pub use env::Environment;
pub use types::{AppConfig, Config, ConfigError, LogConfig, StatsdConfig, WorkerConfig};
