//! `cronwise classify-error` – show the verdict and message for a failure.

use anyhow::Result;
use cronwise_core::config;
use cronwise_core::retry::{is_transient, RequestError};

/// Reconstruct the failure from flags: `--timeout`, `--status N`, or neither
/// (no response at all).
pub(crate) fn request_error(url: &str, status: Option<u16>, timeout: bool) -> RequestError {
    match (timeout, status) {
        (true, _) => RequestError::timeout(url),
        (false, Some(s)) => RequestError::http(url, s),
        (false, None) => RequestError::network(url),
    }
}

pub fn run_classify_error(url: &str, status: Option<u16>, timeout: bool) -> Result<()> {
    let cfg = config::load_or_init()?;
    let classifier = cfg.error_classifier();
    let err = request_error(url, status, timeout);

    let verdict = classifier.classify(&err);
    let message = classifier.message(&err);
    println!("{:<10} {:?}", "verdict", verdict);
    println!("{:<10} {}", "retryable", is_transient(&err));
    if message.is_empty() {
        println!("{:<10} (suppressed)", "message");
    } else {
        println!("{:<10} {}", "message", message);
    }
    Ok(())
}
