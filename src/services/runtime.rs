//! Tokio Runtime Bridge
//!
//! Pagination and list binding run on the thread that owns the display
//! surface and must not block it. This module provides the shared tokio
//! runtime that carries the one long-running operation (bulk population)
//! off that thread.

use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::Runtime;

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| Runtime::new().expect("Failed to create tokio runtime"))
}

/// Spawn a detached task in the tokio runtime
///
/// Used for background work whose result is reported over a channel
/// rather than awaited.
pub fn spawn_in_tokio<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    get_runtime().spawn(future);
}
