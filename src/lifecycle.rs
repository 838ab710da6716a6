//! Lifecycle notification hooks.
//!
//! The process manager invokes these at fixed points in the master/worker
//! lifecycle: a worker was forked, the master is about to re-exec itself,
//! the server finished initializing, a worker caught a signal, a worker was
//! reaped. Each hook is a stateless fire-and-forget notification; ordering
//! and timing are owned entirely by the process manager, and no hook blocks,
//! retries, or returns a value the caller consumes.

use tracing::info;

/// Observer for process-manager lifecycle events.
///
/// Hooks default to no-ops so an implementation only overrides the events it
/// cares about. Implementations must be callable from whatever thread or
/// process context the manager happens to be in, hence `Send + Sync`.
pub trait LifecycleObserver: Send + Sync {
    /// A worker process was forked.
    fn on_worker_spawned(&self, _pid: u32) {}

    /// The master is about to replace itself via exec.
    fn on_before_reexec(&self) {}

    /// The master finished initializing and is about to spawn workers.
    fn on_ready(&self) {}

    /// A worker received INT or QUIT.
    fn on_worker_interrupted(&self, _pid: u32) {}

    /// A worker received ABRT, typically after a timeout kill.
    fn on_worker_aborted(&self, _pid: u32) {}

    /// A worker process exited and was reaped.
    fn on_worker_exited(&self, _pid: u32) {}
}

/// Default observer: one structured log event per lifecycle point.
pub struct LogObserver;

impl LifecycleObserver for LogObserver {
    fn on_worker_spawned(&self, pid: u32) {
        info!(pid, "Worker spawned");
    }

    fn on_before_reexec(&self) {
        info!("Forked child, re-executing");
    }

    fn on_ready(&self) {
        info!("Server is ready, spawning workers");
    }

    fn on_worker_interrupted(&self, pid: u32) {
        info!(pid, "Worker received INT or QUIT signal");
    }

    fn on_worker_aborted(&self, pid: u32) {
        info!(pid, "Worker received SIGABRT signal");
    }

    fn on_worker_exited(&self, pid: u32) {
        info!(pid, "Worker exited");
    }
}
