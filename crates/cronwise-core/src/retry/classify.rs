//! Retry predicates over request failures, and curl error mapping.

use super::error::{RequestError, TransportCode};

/// HTTP status >= 500.
pub fn is_server_error(err: &RequestError) -> bool {
    err.status.is_some_and(|s| s >= 500)
}

/// Default retry predicate: no response at all (network failure) or a 5xx.
/// 4xx client errors are never retried.
pub fn is_transient(err: &RequestError) -> bool {
    !err.has_response() || is_server_error(err)
}

/// Like [`is_transient`], and also retries a timed-out request even if the
/// request layer attached a partial response to it.
pub fn is_transient_or_timeout(err: &RequestError) -> bool {
    err.is_timeout() || is_transient(err)
}

/// Classify a curl error into a transport code.
pub fn classify_curl_error(e: &curl::Error) -> TransportCode {
    if e.is_operation_timedout() {
        return TransportCode::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return TransportCode::Network;
    }
    TransportCode::Other(format!("CURLE_{}", e.code()))
}

impl RequestError {
    /// Build a no-response failure from a curl error.
    pub fn from_curl(url: impl Into<String>, e: &curl::Error) -> Self {
        Self {
            url: url.into(),
            transport: Some(classify_curl_error(e)),
            status: None,
            message: Some(e.description().to_string()),
        }
    }
}
