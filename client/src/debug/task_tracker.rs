//! Lifecycle logging for background tasks

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use tokio::task::JoinHandle;

static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(0);

/// Spawn a task on the tokio runtime with start/finish logging.
///
/// ```rust,ignore
/// spawn_tracked("transactions_refresh", async move {
///     app.fetch_transactions().await;
/// });
/// ```
pub fn spawn_tracked<F>(name: &'static str, future: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    let task_id = NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed);
    let start = Instant::now();

    tracing::debug!(task = %name, task_id, "Task spawned");

    tokio::spawn(async move {
        let result = future.await;

        tracing::debug!(
            task = %name,
            task_id,
            duration_ms = start.elapsed().as_millis() as u64,
            "Task completed"
        );

        result
    })
}
