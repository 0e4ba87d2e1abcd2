//! Request failure type shared by the retry loop and the error classifier.

use std::fmt;

/// Transport-level failure code, reported when no usable HTTP response exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportCode {
    /// Request timed out (`ECONNABORTED` in the request layer).
    Timeout,
    /// Connection refused/reset, DNS failure and similar.
    Network,
    /// Any other transport code, kept verbatim.
    Other(String),
}

impl fmt::Display for TransportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportCode::Timeout => write!(f, "ECONNABORTED"),
            TransportCode::Network => write!(f, "NETWORK_ERROR"),
            TransportCode::Other(code) => write!(f, "{}", code),
        }
    }
}

/// A failed request as observed by the request layer.
///
/// `status` is `None` when the request never produced a response (network
/// failure, timeout). `transport` carries the low-level code when there is one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestError {
    pub url: String,
    pub transport: Option<TransportCode>,
    pub status: Option<u16>,
    pub message: Option<String>,
}

impl RequestError {
    /// Response received with a non-success HTTP status.
    pub fn http(url: impl Into<String>, status: u16) -> Self {
        Self {
            url: url.into(),
            transport: None,
            status: Some(status),
            message: None,
        }
    }

    /// No response: the request timed out.
    pub fn timeout(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            transport: Some(TransportCode::Timeout),
            status: None,
            message: None,
        }
    }

    /// No response: connection-level failure.
    pub fn network(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            transport: Some(TransportCode::Network),
            status: None,
            message: None,
        }
    }

    /// Attach a server- or transport-provided message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// True if the failure carries an HTTP response.
    pub fn has_response(&self) -> bool {
        self.status.is_some()
    }

    pub fn is_timeout(&self) -> bool {
        self.transport == Some(TransportCode::Timeout)
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.status, &self.transport) {
            (Some(code), _) => write!(f, "HTTP {} from {}", code, self.url)?,
            (None, Some(TransportCode::Timeout)) => write!(f, "request to {} timed out", self.url)?,
            (None, Some(code)) => write!(f, "request to {} failed ({})", self.url, code)?,
            (None, None) => write!(f, "request to {} failed without response", self.url)?,
        }
        if let Some(msg) = &self.message {
            write!(f, ": {}", msg)?;
        }
        Ok(())
    }
}

impl std::error::Error for RequestError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_response_state() {
        assert!(RequestError::http("/a", 500).has_response());
        assert!(!RequestError::network("/a").has_response());
        let t = RequestError::timeout("/a");
        assert!(!t.has_response());
        assert!(t.is_timeout());
    }

    #[test]
    fn display_includes_status_and_message() {
        let e = RequestError::http("/api/jobs", 503).with_message("busy");
        assert_eq!(e.to_string(), "HTTP 503 from /api/jobs: busy");
        assert_eq!(
            RequestError::timeout("/x").to_string(),
            "request to /x timed out"
        );
    }
}
