//! Simulated network delay for loading indicators.
//!
//! Views show a spinner until a timer fires. The timer must not outlive the
//! view, so dropping the [`SimulatedLoad`] handle aborts it and the ready
//! callback never runs.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Handle to a pending simulated load.
#[derive(Debug)]
pub struct SimulatedLoad {
    loading: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

impl SimulatedLoad {
    /// Start a timer that runs `on_ready` once after `delay`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<F>(delay: Duration, on_ready: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let loading = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&loading);
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            flag.store(false, Ordering::Release);
            on_ready();
        });
        Self {
            loading,
            task: Some(task),
        }
    }

    /// Whether the spinner should still be shown.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Abort the timer if it has not fired yet.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Wait for the timer. Returns `false` if it was cancelled.
    pub async fn finished(&mut self) -> bool {
        if let Some(task) = self.task.as_mut() {
            let completed = task.await.is_ok();
            self.task = None;
            return completed;
        }
        !self.is_loading()
    }
}

impl Drop for SimulatedLoad {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    const DELAY: Duration = Duration::from_millis(800);

    fn counter() -> (Arc<AtomicUsize>, impl FnOnce() + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let hits = Arc::clone(&count);
        (count, move || {
            hits.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn resolves_once_after_delay() {
        let (count, on_ready) = counter();
        let mut load = SimulatedLoad::start(DELAY, on_ready);
        assert!(load.is_loading());

        tokio::time::sleep(DELAY / 2).await;
        assert!(load.is_loading());
        assert_eq!(count.load(Ordering::SeqCst), 0);

        assert!(load.finished().await);
        assert!(!load.is_loading());
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(load.finished().await);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_handle_cancels_callback() {
        let (count, on_ready) = counter();
        let load = SimulatedLoad::start(DELAY, on_ready);
        drop(load);

        tokio::time::sleep(DELAY * 2).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn explicit_cancel_reports_not_finished() {
        let (count, on_ready) = counter();
        let mut load = SimulatedLoad::start(DELAY, on_ready);
        load.cancel();
        assert!(!load.finished().await);
        tokio::time::sleep(DELAY * 2).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(load.is_loading());
    }
}
