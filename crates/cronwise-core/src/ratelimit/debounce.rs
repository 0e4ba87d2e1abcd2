use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

type Callback<A> = Arc<dyn Fn(A) + Send + Sync>;

/// Debounced wrapper around a callback.
///
/// Each `call` aborts the pending invocation (if any) and schedules a new one
/// `wait` in the future on the current Tokio runtime, so only the last call
/// in a burst runs, with that call's arguments. Must be used from within a
/// Tokio runtime.
pub struct Debounce<A> {
    callback: Callback<A>,
    wait: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<A> std::fmt::Debug for Debounce<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debounce")
            .field("wait", &self.wait)
            .finish_non_exhaustive()
    }
}

impl<A: Send + 'static> Debounce<A> {
    pub fn new<F>(wait: Duration, callback: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
            wait,
            pending: Mutex::new(None),
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    fn lock(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Schedule `callback(args)` after `wait`, replacing any pending invocation.
    pub fn call(&self, args: A) {
        let mut pending = self.lock();
        if let Some(handle) = pending.take() {
            handle.abort();
        }
        let callback = Arc::clone(&self.callback);
        let wait = self.wait;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            callback(args);
        }));
    }

    /// Drop the pending invocation. Returns true if one was still scheduled.
    pub fn cancel(&self) -> bool {
        match self.lock().take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                true
            }
            _ => false,
        }
    }

    /// True while an invocation is scheduled but has not run yet.
    pub fn is_pending(&self) -> bool {
        self.lock().as_ref().is_some_and(|h| !h.is_finished())
    }
}
