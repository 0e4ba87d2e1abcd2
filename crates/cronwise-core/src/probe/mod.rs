//! HTTP HEAD probing of backend endpoints.
//!
//! Uses the curl crate (libcurl) to check that an endpoint answers, mapping
//! every failure into a [`RequestError`] so it can flow through the retry
//! loop and the error classifier. Successful probes can be memoised in a
//! [`TtlCache`].

mod parse;

use std::str;
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

use crate::cache::TtlCache;
use crate::retry::{self, RequestError, RetryError, RetryPolicy, TransportCode};

/// Default overall request timeout; matches the request layer's 30s.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Metadata from a successful HEAD request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub status: u16,
    pub content_length: Option<u64>,
    pub content_type: Option<String>,
    pub last_modified: Option<String>,
}

impl ProbeResult {
    pub(crate) fn new(status: u16) -> Self {
        Self {
            status,
            content_length: None,
            content_type: None,
            last_modified: None,
        }
    }
}

/// Performs a HEAD request and returns parsed metadata.
///
/// Follows redirects. Non-2xx responses become `RequestError::http`; curl
/// failures keep their transport code. Runs in the current thread; use
/// [`probe`] from async code.
pub fn probe_blocking(url: &str, timeout: Duration) -> Result<ProbeResult, RequestError> {
    if let Err(e) = url::Url::parse(url) {
        return Err(RequestError {
            url: url.to_string(),
            transport: Some(TransportCode::Other("INVALID_URL".to_string())),
            status: None,
            message: Some(e.to_string()),
        });
    }

    let curl_err = |e: curl::Error| RequestError::from_curl(url, &e);
    let mut headers: Vec<String> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(curl_err)?;
    easy.nobody(true).map_err(curl_err)?;
    easy.follow_location(true).map_err(curl_err)?;
    easy.connect_timeout(timeout.min(Duration::from_secs(15)))
        .map_err(curl_err)?;
    easy.timeout(timeout).map_err(curl_err)?;

    {
        let mut transfer = easy.transfer();
        transfer
            .header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    headers.push(s.trim_end().to_string());
                }
                true
            })
            .map_err(curl_err)?;
        transfer.perform().map_err(curl_err)?;
    }

    let code = easy.response_code().map_err(curl_err)?;
    let status = u16::try_from(code).unwrap_or(0);
    if !(200..300).contains(&status) {
        return Err(RequestError::http(url, status));
    }

    let mut result = ProbeResult::new(status);
    parse::apply_headers(&mut result, &headers);
    Ok(result)
}

/// Async wrapper: runs [`probe_blocking`] on the blocking pool.
pub async fn probe(url: &str, timeout: Duration) -> Result<ProbeResult, RequestError> {
    let owned = url.to_string();
    tokio::task::spawn_blocking(move || probe_blocking(&owned, timeout))
        .await
        .unwrap_or_else(|e| {
            Err(RequestError {
                url: url.to_string(),
                transport: Some(TransportCode::Other("TASK_FAILED".to_string())),
                status: None,
                message: Some(e.to_string()),
            })
        })
}

/// Probe `url` under `policy`, reusing a live cached result when present.
///
/// Only successful probes are cached. Cancelling `cancel` abandons both an
/// in-flight probe and any pending backoff wait.
pub async fn probe_with_retry(
    url: &str,
    timeout: Duration,
    policy: &RetryPolicy,
    cache: &TtlCache<String, ProbeResult>,
    cancel: &CancellationToken,
) -> Result<ProbeResult, RetryError<RequestError>> {
    if let Some(hit) = cache.get(&url.to_string()) {
        tracing::debug!(url, "probe cache hit");
        return Ok(hit);
    }
    let started = Instant::now();
    let result = retry::execute_with_cancel(policy, cancel, || probe(url, timeout)).await?;
    tracing::debug!(
        url,
        status = result.status,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "probe succeeded"
    );
    cache.set(url.to_string(), result.clone());
    Ok(result)
}
