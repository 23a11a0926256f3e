//! Cosmetic autosave indicator ("Saving…" / "Saved 3s ago").
//!
//! Purely a display affordance: nothing is written to a durable store.
//! `touch` flips to Saving immediately and arms a settle timer that
//! flips to Saved; re-touching cancels the pending timer, and dropping
//! the indicator aborts it, so no flip lands after teardown.

use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AutosaveState {
    Idle,
    Saving,
    Saved,
}

#[derive(Debug)]
struct Inner {
    state: AutosaveState,
    saved_at: Option<Instant>,
}

pub struct AutosaveIndicator {
    inner: Arc<Mutex<Inner>>,
    settle: Duration,
    pending: Option<JoinHandle<()>>,
}

impl AutosaveIndicator {
    pub fn new(settle: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: AutosaveState::Idle,
                saved_at: None,
            })),
            settle,
            pending: None,
        }
    }

    /// Record a draft mutation: show Saving now, Saved after the
    /// settle delay. Must be called from within a tokio runtime.
    pub fn touch(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }

        self.inner.lock().state = AutosaveState::Saving;

        let inner = Arc::clone(&self.inner);
        let settle = self.settle;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(settle).await;
            let mut guard = inner.lock();
            guard.state = AutosaveState::Saved;
            guard.saved_at = Some(Instant::now());
        }));
    }

    pub fn state(&self) -> AutosaveState {
        self.inner.lock().state
    }

    /// Whole seconds since the last Saved flip, for the "Saved Xs ago"
    /// label. `None` until the first save settles.
    pub fn seconds_since_saved(&self) -> Option<u64> {
        self.inner
            .lock()
            .saved_at
            .map(|at| Instant::now().duration_since(at).as_secs())
    }
}

impl Drop for AutosaveIndicator {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SETTLE: Duration = Duration::from_millis(1000);

    async fn let_timers_run() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_touch_flips_to_saving_then_saved() {
        let mut indicator = AutosaveIndicator::new(SETTLE);
        assert_eq!(indicator.state(), AutosaveState::Idle);

        indicator.touch();
        assert_eq!(indicator.state(), AutosaveState::Saving);
        let_timers_run().await;

        tokio::time::advance(SETTLE + Duration::from_millis(1)).await;
        let_timers_run().await;
        assert_eq!(indicator.state(), AutosaveState::Saved);
        assert_eq!(indicator.seconds_since_saved(), Some(0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_retouch_restarts_the_settle_timer() {
        let mut indicator = AutosaveIndicator::new(SETTLE);

        indicator.touch();
        let_timers_run().await;
        tokio::time::advance(Duration::from_millis(600)).await;
        let_timers_run().await;

        // A second mutation before the timer fires keeps us in Saving.
        indicator.touch();
        let_timers_run().await;
        tokio::time::advance(Duration::from_millis(600)).await;
        let_timers_run().await;
        assert_eq!(indicator.state(), AutosaveState::Saving);

        tokio::time::advance(Duration::from_millis(500)).await;
        let_timers_run().await;
        assert_eq!(indicator.state(), AutosaveState::Saved);
    }

    #[tokio::test(start_paused = true)]
    async fn test_seconds_since_saved_tracks_elapsed_time() {
        let mut indicator = AutosaveIndicator::new(SETTLE);
        indicator.touch();
        let_timers_run().await;
        tokio::time::advance(SETTLE + Duration::from_millis(1)).await;
        let_timers_run().await;

        tokio::time::advance(Duration::from_secs(7)).await;
        assert_eq!(indicator.seconds_since_saved(), Some(7));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_timer() {
        let inner_probe;
        {
            let mut indicator = AutosaveIndicator::new(SETTLE);
            indicator.touch();
            inner_probe = Arc::clone(&indicator.inner);
        }

        tokio::time::advance(SETTLE * 2).await;
        let_timers_run().await;
        // The aborted task never flipped the state after teardown.
        assert_eq!(inner_probe.lock().state, AutosaveState::Saving);
    }
}
