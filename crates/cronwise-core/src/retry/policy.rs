use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use super::classify::{is_server_error, is_transient, is_transient_or_timeout};
use super::error::RequestError;
use crate::config::RetryConfig;

/// Shared retry predicate: returns true if the failure is worth retrying.
pub type RetryPredicate<E> = Arc<dyn Fn(&E) -> bool + Send + Sync>;

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry this error.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
}

/// Exponential backoff policy, supplied per call.
///
/// Immutable once built; cloning shares the predicate. Total attempts are at
/// most `max_retries + 1`.
pub struct RetryPolicy<E = RequestError> {
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Delay before the first retry; doubles for each subsequent one.
    pub base_delay: Duration,
    predicate: RetryPredicate<E>,
}

impl<E> Clone for RetryPolicy<E> {
    fn clone(&self) -> Self {
        Self {
            max_retries: self.max_retries,
            base_delay: self.base_delay,
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<E> fmt::Debug for RetryPolicy<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryPolicy")
            .field("max_retries", &self.max_retries)
            .field("base_delay", &self.base_delay)
            .finish_non_exhaustive()
    }
}

impl<E> RetryPolicy<E> {
    pub fn new<P>(max_retries: u32, base_delay: Duration, predicate: P) -> Self
    where
        P: Fn(&E) -> bool + Send + Sync + 'static,
    {
        Self {
            max_retries,
            base_delay,
            predicate: Arc::new(predicate),
        }
    }

    /// Replace the retry predicate, keeping counts and delays.
    pub fn with_predicate<P>(self, predicate: P) -> Self
    where
        P: Fn(&E) -> bool + Send + Sync + 'static,
    {
        Self::new(self.max_retries, self.base_delay, predicate)
    }

    pub fn should_retry(&self, err: &E) -> bool {
        (self.predicate)(err)
    }

    /// `base_delay * 2^attempt`, saturating instead of overflowing.
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }

    /// Decide what to do after attempt `attempt` (0-based) failed with `err`.
    ///
    /// Stops once `max_retries` retries have been spent or the predicate
    /// rejects the error.
    pub fn decide(&self, attempt: u32, err: &E) -> RetryDecision {
        if attempt >= self.max_retries || !self.should_retry(err) {
            return RetryDecision::NoRetry;
        }
        RetryDecision::RetryAfter(self.backoff_delay(attempt))
    }
}

impl Default for RetryPolicy<RequestError> {
    /// 3 retries, 1s base delay, retry on network failure or 5xx.
    fn default() -> Self {
        Self::new(3, Duration::from_secs(1), is_transient)
    }
}

impl RetryPolicy<RequestError> {
    /// For large data requests: 2 retries, 2s base delay, also retries timeouts.
    pub fn data() -> Self {
        Self::new(2, Duration::from_secs(2), is_transient_or_timeout)
    }

    /// For fast requests: 1 retry, 500ms base delay, retries only on 5xx.
    pub fn quick() -> Self {
        Self::new(1, Duration::from_millis(500), is_server_error)
    }

    /// Build from the `[retry]` config section with the default predicate.
    pub fn from_config(cfg: &RetryConfig) -> Self {
        Self::new(
            cfg.max_retries,
            Duration::from_millis(cfg.base_delay_ms),
            is_transient,
        )
    }

    /// Look up a named policy: `default`, `data` or `quick`.
    pub fn named(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::default()),
            "data" => Some(Self::data()),
            "quick" => Some(Self::quick()),
            _ => None,
        }
    }
}
