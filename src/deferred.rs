//! Cancellable delayed work on the tokio runtime.
//!
//! A [`Deferred`] owns the spawned task. Dropping it aborts the task, so work
//! scheduled for a lesson page can never outlive the page.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::{JoinError, JoinHandle};

pub use tokio::runtime::TryCurrentError;

pub struct Deferred<T> {
    handle: JoinHandle<T>,
}

impl<T: Send + 'static> Deferred<T> {
    /// Run `work` after `delay` on the current tokio runtime.
    ///
    /// Fails when there is no runtime to spawn on.
    pub fn after<F>(delay: Duration, work: F) -> Result<Self, TryCurrentError>
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let runtime = Handle::try_current()?;
        Ok(Self::after_on(&runtime, delay, work))
    }

    pub fn after_on<F>(runtime: &Handle, delay: Duration, work: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            work()
        });
        Self { handle }
    }

    /// Wait for the result. Errors if the task was cancelled or panicked.
    pub async fn finish(mut self) -> Result<T, JoinError> {
        (&mut self.handle).await
    }
}

impl<T> Deferred<T> {
    /// Abort the task if it has not run yet.
    pub fn cancel(self) {
        drop(self);
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl<T> Drop for Deferred<T> {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl<T> std::fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deferred")
            .field("finished", &self.handle.is_finished())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[tokio::test(start_paused = true)]
    async fn test_runs_after_delay() {
        let task = Deferred::after(Duration::from_millis(800), || 42).unwrap();
        assert_eq!(task.finish().await.unwrap(), 42);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();

        let task = Deferred::after(Duration::from_millis(100), move || {
            flag.store(true, Ordering::SeqCst);
        })
        .unwrap();
        task.cancel();

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(!fired.load(Ordering::SeqCst));
    }

    #[test]
    fn test_no_runtime_is_an_error() {
        assert!(Deferred::after(Duration::ZERO, || ()).is_err());
    }
}
