//! Keyed, cancellable debouncing of asynchronous actions.
//!
//! [`Debouncer::schedule`] spawns the action on the tokio runtime after a quiet
//! window. Scheduling again under the same key before the window ends aborts
//! the earlier action, so a burst collapses into its last call. Dropping the
//! debouncer aborts everything still pending.
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use ticklist::libs::debounce::Debouncer;
//!
//! # async fn demo() {
//! let mut debouncer = Debouncer::new(Duration::from_millis(1000));
//! debouncer.schedule("title", async { println!("first") });
//! debouncer.schedule("title", async { println!("second") }); // only this one runs
//! debouncer.flush().await;
//! # }
//! ```

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

/// Default quiet window before a scheduled edit is sent.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1000);

struct Pending {
    handle: JoinHandle<()>,
    fire_now: Arc<Notify>,
}

pub struct Debouncer<K> {
    delay: Duration,
    pending: HashMap<K, Pending>,
}

impl<K: Eq + Hash> Debouncer<K> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: HashMap::new(),
        }
    }

    /// Runs `action` once `delay` has passed without another call for `key`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&mut self, key: K, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.pending.retain(|_, pending| !pending.handle.is_finished());

        let delay = self.delay;
        let fire_now = Arc::new(Notify::new());
        let trigger = fire_now.clone();
        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                _ = trigger.notified() => {}
            }
            action.await;
        });

        if let Some(previous) = self.pending.insert(key, Pending { handle, fire_now }) {
            previous.handle.abort();
        }
    }

    /// Drops the pending action for `key`, if any. Returns whether one was cancelled.
    pub fn cancel(&mut self, key: &K) -> bool {
        match self.pending.remove(key) {
            Some(pending) if !pending.handle.is_finished() => {
                pending.handle.abort();
                true
            }
            _ => false,
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, pending) in self.pending.drain() {
            pending.handle.abort();
        }
    }

    /// Number of actions still waiting or running.
    pub fn pending_count(&self) -> usize {
        self.pending.values().filter(|pending| !pending.handle.is_finished()).count()
    }

    /// Fires every pending action immediately and waits until they complete.
    pub async fn flush(&mut self) {
        let pending: Vec<Pending> = self.pending.drain().map(|(_, pending)| pending).collect();
        for p in &pending {
            p.fire_now.notify_one();
        }
        for p in pending {
            if let Err(error) = p.handle.await {
                tracing::debug!(%error, "Debounced action did not complete");
            }
        }
    }
}

impl<K> Drop for Debouncer<K> {
    fn drop(&mut self) {
        for pending in self.pending.values() {
            pending.handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    fn recorder() -> (Arc<Mutex<Vec<&'static str>>>, impl Fn(&'static str) -> std::pin::Pin<Box<dyn Future<Output = ()> + Send>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        let make = move |label: &'static str| {
            let sink = sink.clone();
            Box::pin(async move { sink.lock().push(label) }) as std::pin::Pin<Box<dyn Future<Output = ()> + Send>>
        };
        (calls, make)
    }

    #[tokio::test(start_paused = true)]
    async fn burst_on_one_key_runs_only_the_last_action() {
        let (calls, make) = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(1000));

        debouncer.schedule("k", make("first"));
        tokio::time::sleep(Duration::from_millis(300)).await;
        debouncer.schedule("k", make("second"));
        tokio::time::sleep(Duration::from_millis(999)).await;
        assert!(calls.lock().is_empty());

        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(*calls.lock(), vec!["second"]);
    }

    #[tokio::test(start_paused = true)]
    async fn distinct_keys_do_not_coalesce() {
        let (calls, make) = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(1000));

        debouncer.schedule("a", make("a"));
        debouncer.schedule("b", make("b"));
        tokio::time::sleep(Duration::from_millis(1001)).await;
        tokio::task::yield_now().await;

        let mut seen = calls.lock().clone();
        seen.sort();
        assert_eq!(seen, vec!["a", "b"]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_and_drop_abort_pending_actions() {
        let (calls, make) = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(1000));

        debouncer.schedule("a", make("a"));
        assert!(debouncer.cancel(&"a"));
        assert!(!debouncer.cancel(&"a"));

        debouncer.schedule("b", make("b"));
        drop(debouncer);

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert!(calls.lock().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn flush_runs_pending_actions_without_waiting_for_the_window() {
        let (calls, make) = recorder();
        let mut debouncer = Debouncer::new(Duration::from_secs(3600));

        debouncer.schedule("a", make("a"));
        assert_eq!(debouncer.pending_count(), 1);
        debouncer.flush().await;

        assert_eq!(*calls.lock(), vec!["a"]);
        assert_eq!(debouncer.pending_count(), 0);
    }
}
