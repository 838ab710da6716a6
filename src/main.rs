//! guniconf - resolve and report the server-manager configuration.
//!
//! Loads the configuration from the process environment, fail-fast on parse
//! errors (non-zero exit, failure reported on stderr), then prints the
//! resolved record as JSON for inspection.

use anyhow::Context;
use guniconf::{Config, telemetry};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("failed to resolve configuration")?;

    telemetry::init(&config.logging);

    info!(
        app = %config.app.target,
        bind = ?config.app.bind,
        workers = config.workers.count,
        worker_class = %config.workers.class,
        threads = config.workers.threads,
        keepalive_secs = config.workers.keepalive_secs,
        reload = config.app.reload,
        statsd = config.statsd.is_some(),
        "Configuration resolved"
    );

    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}
