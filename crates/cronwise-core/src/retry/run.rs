//! Retry loop: run an async operation until success or the policy says stop.

use std::fmt;
use std::future::Future;

use tokio_util::sync::CancellationToken;

use super::policy::{RetryDecision, RetryPolicy};

/// Outcome of a cancellable retry loop that did not succeed.
#[derive(Debug)]
pub enum RetryError<E> {
    /// The caller cancelled while an attempt or backoff wait was pending.
    Cancelled,
    /// The last underlying error, unchanged.
    Failed(E),
}

impl<E> RetryError<E> {
    /// The underlying error, if the loop ended on a failure.
    pub fn into_failure(self) -> Option<E> {
        match self {
            RetryError::Cancelled => None,
            RetryError::Failed(e) => Some(e),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, RetryError::Cancelled)
    }
}

impl<E: fmt::Display> fmt::Display for RetryError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetryError::Cancelled => write!(f, "operation cancelled"),
            RetryError::Failed(e) => write!(f, "{}", e),
        }
    }
}

impl<E> std::error::Error for RetryError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RetryError::Cancelled => None,
            RetryError::Failed(e) => Some(e),
        }
    }
}

fn log_retry<E: fmt::Display>(
    policy: &RetryPolicy<E>,
    attempt: u32,
    delay: std::time::Duration,
    err: &E,
) {
    tracing::warn!(
        error = %err,
        delay_ms = delay.as_millis() as u64,
        "request failed, retrying in {}ms ({}/{})",
        delay.as_millis(),
        attempt + 1,
        policy.max_retries
    );
}

/// Runs `operation` until it succeeds or the retry policy says to stop.
///
/// Attempts are strictly sequential. On a retryable failure the loop waits
/// `base_delay * 2^attempt` before trying again; the final error is returned
/// unchanged.
pub async fn execute<T, E, F, Fut>(policy: &RetryPolicy<E>, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) => match policy.decide(attempt, &e) {
                RetryDecision::NoRetry => return Err(e),
                RetryDecision::RetryAfter(delay) => {
                    log_retry(policy, attempt, delay, &e);
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            },
        }
    }
}

/// Like [`execute`], but abandons the loop when `cancel` fires.
///
/// Both the in-flight attempt and any pending backoff wait are dropped on
/// cancellation, and `RetryError::Cancelled` is returned.
pub async fn execute_with_cancel<T, E, F, Fut>(
    policy: &RetryPolicy<E>,
    cancel: &CancellationToken,
    mut operation: F,
) -> Result<T, RetryError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    let mut attempt = 0u32;
    loop {
        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(RetryError::Cancelled),
            outcome = operation() => outcome,
        };
        match outcome {
            Ok(value) => return Ok(value),
            Err(e) => match policy.decide(attempt, &e) {
                RetryDecision::NoRetry => return Err(RetryError::Failed(e)),
                RetryDecision::RetryAfter(delay) => {
                    log_retry(policy, attempt, delay, &e);
                    tokio::select! {
                        biased;
                        _ = cancel.cancelled() => {
                            tracing::debug!(attempt, "retry wait cancelled");
                            return Err(RetryError::Cancelled);
                        }
                        _ = tokio::time::sleep(delay) => {}
                    }
                    attempt += 1;
                }
            },
        }
    }
}
