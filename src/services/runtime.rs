//! Tokio Runtime Bridge
//!
//! The engine itself is synchronous; rows fetches run on tokio. Callers already inside
//! a tokio context (tests, async hosts) use their own runtime, everyone else shares a
//! lazily created global one.
//!
//! ## Pattern
//!
//! ```text
//! DataTable::pump()
//!       │  GridEvent::RowsRequested
//!       ▼
//! RowsService ── spawn_named_in_tokio(fetch) ──▶ RowsProvider
//!       ▲                                            │
//!       └──────── GridCommand::RowsLoaded ◀──────────┘
//! ```

use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::{Builder, Handle, Runtime};
use tokio::task::JoinHandle;

use crate::error::{Error, Result};

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> Result<&'static Runtime> {
    if let Some(runtime) = TOKIO_RUNTIME.get() {
        return Ok(runtime);
    }
    let runtime = Builder::new_multi_thread()
        .enable_all()
        .thread_name("grid-table-worker")
        .build()?;
    // Another thread may have won the race; either runtime is fine
    let _ = TOKIO_RUNTIME.set(runtime);
    TOKIO_RUNTIME.get().ok_or_else(|| Error::Invalid {
        message: "tokio runtime unavailable".to_string(),
    })
}

/// Handle of the current tokio context, falling back to the global runtime
pub fn runtime_handle() -> Result<Handle> {
    match Handle::try_current() {
        Ok(handle) => Ok(handle),
        Err(_) => Ok(get_runtime()?.handle().clone()),
    }
}

/// Spawn a task with a name (for debugging); the handle can abort it
pub fn spawn_named_in_tokio<F, T>(name: &'static str, future: F) -> Result<JoinHandle<T>>
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    tracing::debug!("Spawning tokio task: {}", name);
    Ok(runtime_handle()?.spawn(async move {
        let output = future.await;
        tracing::debug!("Tokio task completed: {}", name);
        output
    }))
}

/// Block on a future synchronously (use sparingly, mainly for the demo binary)
///
/// **Warning**: This blocks the current thread and must not be called from inside
/// an async context.
pub fn block_on<F, T>(future: F) -> Result<T>
where
    F: Future<Output = T>,
{
    Ok(get_runtime()?.block_on(future))
}
