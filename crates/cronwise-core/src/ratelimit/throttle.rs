use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::time::Instant;

/// End of the current cooldown.
#[derive(Debug, Clone, Copy)]
enum Cooldown {
    Idle,
    Until(Instant),
    /// `limit` overflows the clock; every later call is dropped.
    Forever,
}

impl Cooldown {
    fn is_active(self, now: Instant) -> bool {
        match self {
            Cooldown::Idle => false,
            Cooldown::Until(until) => now < until,
            Cooldown::Forever => true,
        }
    }
}

/// Throttled wrapper around a callback.
///
/// The first call runs immediately and starts a cooldown of `limit`; calls
/// arriving during the cooldown are dropped, not queued. Once `limit` has
/// elapsed the next call runs immediately again.
pub struct Throttle<A> {
    callback: Box<dyn Fn(A) + Send + Sync>,
    limit: Duration,
    cooldown: Mutex<Cooldown>,
}

impl<A> std::fmt::Debug for Throttle<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Throttle")
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}

impl<A> Throttle<A> {
    pub fn new<F>(limit: Duration, callback: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            callback: Box::new(callback),
            limit,
            cooldown: Mutex::new(Cooldown::Idle),
        }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    fn lock(&self) -> MutexGuard<'_, Cooldown> {
        self.cooldown.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `callback(args)` unless a cooldown is active. Returns whether it ran.
    pub fn call(&self, args: A) -> bool {
        let now = Instant::now();
        {
            let mut cooldown = self.lock();
            if cooldown.is_active(now) {
                tracing::trace!("throttled call dropped");
                return false;
            }
            *cooldown = now
                .checked_add(self.limit)
                .map_or(Cooldown::Forever, Cooldown::Until);
        }
        (self.callback)(args);
        true
    }

    /// True while calls would be dropped.
    pub fn is_busy(&self) -> bool {
        self.lock().is_active(Instant::now())
    }
}
