//! Retry and backoff for request-layer operations.
//!
//! This module describes request failures, the predicates deciding whether a
//! failure is worth retrying, the immutable per-call retry policy, and the
//! async retry loop. Display-oriented classification of the same failures
//! lives in [`crate::verdict`]; the two answer different questions.

mod classify;
mod error;
mod policy;
mod run;

pub use classify::{classify_curl_error, is_server_error, is_transient, is_transient_or_timeout};
pub use error::{RequestError, TransportCode};
pub use policy::{RetryDecision, RetryPolicy, RetryPredicate};
pub use run::{execute, execute_with_cancel, RetryError};
