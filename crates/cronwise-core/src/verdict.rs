//! Display-oriented classification of request failures.
//!
//! Answers "should the UI treat this failure as critical, ignore it, or show
//! it as a plain error", and derives the message to show. This is a different
//! question from retry eligibility: a 500 is `Critical` here and still
//! retryable for [`crate::retry`].

use serde::{Deserialize, Serialize};

use crate::retry::{RequestError, TransportCode};

/// Best-effort statistics endpoints whose failures never reach the user.
pub const DEFAULT_IGNORABLE_PATHS: &[&str] = &[
    "/risk-level-statistics",
    "/daily-country-risk-stats",
    "/country-risk-trends",
    "/country-risk-ranking",
];

/// How a failure should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorVerdict {
    /// Connectivity, server or authentication failure; blocks the view.
    Critical,
    /// Must not produce any notification.
    Ignorable,
    /// Transient client-side status (408, 429); the user may simply try again.
    Retryable,
    /// Any other failure; shown once with its message.
    Fatal,
}

/// Classifies failures against a configurable set of ignorable URL substrings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorClassifier {
    ignorable_paths: Vec<String>,
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORABLE_PATHS.iter().map(|p| p.to_string()))
    }
}

impl ErrorClassifier {
    pub fn new<I, S>(ignorable_paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ignorable_paths: ignorable_paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn ignorable_paths(&self) -> &[String] {
        &self.ignorable_paths
    }

    fn is_ignorable_url(&self, url: &str) -> bool {
        self.ignorable_paths
            .iter()
            .any(|p| !p.is_empty() && url.contains(p.as_str()))
    }

    /// Classify a failure. Rules apply in priority order; total over its input.
    pub fn classify(&self, err: &RequestError) -> ErrorVerdict {
        let verdict = match err.status {
            None => ErrorVerdict::Critical,
            Some(_) if err.is_timeout() => ErrorVerdict::Critical,
            Some(s) if s >= 500 => ErrorVerdict::Critical,
            Some(401) | Some(403) => ErrorVerdict::Critical,
            Some(404) => ErrorVerdict::Ignorable,
            Some(_) if self.is_ignorable_url(&err.url) => ErrorVerdict::Ignorable,
            Some(408) | Some(429) => ErrorVerdict::Retryable,
            Some(_) => ErrorVerdict::Fatal,
        };
        tracing::debug!(url = %err.url, status = ?err.status, ?verdict, "classified request failure");
        verdict
    }

    /// User-facing message for a failure; empty for ignorable ones so callers
    /// can suppress the notification.
    ///
    /// Failures on ignorable URLs are silent whatever their status, even when
    /// [`classify`](Self::classify) still reports them as critical.
    pub fn message(&self, err: &RequestError) -> String {
        if self.is_ignorable_url(&err.url) || self.classify(err) == ErrorVerdict::Ignorable {
            return String::new();
        }
        match (&err.transport, err.status) {
            (Some(TransportCode::Timeout), _) => "请求超时，请稍后重试".to_string(),
            (_, None) => "网络连接失败，请检查网络".to_string(),
            // The server's own message wins for these two.
            (_, Some(status @ (400 | 500))) => err
                .message
                .clone()
                .unwrap_or_else(|| status_message(status).unwrap_or_default().to_string()),
            (_, Some(status)) => status_message(status)
                .map(str::to_string)
                .or_else(|| err.message.clone())
                .unwrap_or_else(|| format!("连接错误{}", status)),
        }
    }
}

/// Fixed message for well-known statuses.
fn status_message(status: u16) -> Option<&'static str> {
    let msg = match status {
        400 => "请求参数错误",
        401 => "未授权，请重新登录",
        403 => "拒绝访问",
        404 => "请求地址出错",
        408 => "请求超时",
        500 => "服务器内部错误",
        501 => "服务未实现",
        502 => "网关错误",
        503 => "服务不可用",
        504 => "网关超时",
        505 => "HTTP版本不受支持",
        s if s >= 500 => "服务器暂时不可用，请稍后重试",
        _ => return None,
    };
    Some(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retry::is_transient;

    fn classifier() -> ErrorClassifier {
        ErrorClassifier::default()
    }

    #[test]
    fn no_response_and_timeouts_are_critical() {
        let c = classifier();
        assert_eq!(c.classify(&RequestError::network("/api/a")), ErrorVerdict::Critical);
        assert_eq!(c.classify(&RequestError::timeout("/api/a")), ErrorVerdict::Critical);
    }

    #[test]
    fn server_and_auth_errors_are_critical() {
        let c = classifier();
        for status in [500, 502, 503, 599, 401, 403] {
            assert_eq!(
                c.classify(&RequestError::http("/api/a", status)),
                ErrorVerdict::Critical,
                "status {status}"
            );
        }
    }

    #[test]
    fn not_found_is_ignorable() {
        let c = classifier();
        let e = RequestError::http("/api/a", 404);
        assert_eq!(c.classify(&e), ErrorVerdict::Ignorable);
        assert_eq!(c.message(&e), "");
    }

    #[test]
    fn statistics_urls_are_ignorable_for_client_errors() {
        let c = classifier();
        let e = RequestError::http("/api/device/risk-level-statistics?days=7", 400);
        assert_eq!(c.classify(&e), ErrorVerdict::Ignorable);
        assert_eq!(c.message(&e), "");
        // Critical rules take priority over the URL rule.
        let e = RequestError::http("/api/country-risk-ranking", 500);
        assert_eq!(c.classify(&e), ErrorVerdict::Critical);
    }

    #[test]
    fn statistics_url_failures_are_silent_at_any_status() {
        let c = classifier();
        for status in [500, 503, 401, 403] {
            let e = RequestError::http("/api/country-risk-ranking", status);
            assert_eq!(c.classify(&e), ErrorVerdict::Critical, "status {status}");
            assert_eq!(c.message(&e), "", "status {status}");
        }
        assert_eq!(c.message(&RequestError::timeout("/api/country-risk-trends")), "");
        assert_eq!(c.message(&RequestError::network("/api/daily-country-risk-stats")), "");
        // Other URLs still get a message.
        assert_eq!(c.message(&RequestError::http("/api/tasks", 500)), "服务器内部错误");
    }

    #[test]
    fn remaining_statuses_split_into_retryable_and_fatal() {
        let c = classifier();
        assert_eq!(c.classify(&RequestError::http("/a", 408)), ErrorVerdict::Retryable);
        assert_eq!(c.classify(&RequestError::http("/a", 429)), ErrorVerdict::Retryable);
        assert_eq!(c.classify(&RequestError::http("/a", 400)), ErrorVerdict::Fatal);
        assert_eq!(c.classify(&RequestError::http("/a", 422)), ErrorVerdict::Fatal);
    }

    #[test]
    fn server_error_is_critical_and_still_retryable() {
        let e = RequestError::http("/api/a", 500);
        assert_eq!(classifier().classify(&e), ErrorVerdict::Critical);
        assert!(is_transient(&e));
    }

    #[test]
    fn messages_follow_status_table() {
        let c = classifier();
        assert_eq!(c.message(&RequestError::http("/a", 401)), "未授权，请重新登录");
        assert_eq!(c.message(&RequestError::http("/a", 500)), "服务器内部错误");
        assert_eq!(c.message(&RequestError::http("/a", 507)), "服务器暂时不可用，请稍后重试");
        assert_eq!(c.message(&RequestError::timeout("/a")), "请求超时，请稍后重试");
        assert_eq!(c.message(&RequestError::network("/a")), "网络连接失败，请检查网络");
    }

    #[test]
    fn server_message_wins_for_400_and_500() {
        let c = classifier();
        let e = RequestError::http("/a", 400).with_message("任务名称不能为空");
        assert_eq!(c.message(&e), "任务名称不能为空");
        let e = RequestError::http("/a", 500).with_message("数据库连接失败");
        assert_eq!(c.message(&e), "数据库连接失败");
        assert_eq!(c.message(&RequestError::http("/a", 400)), "请求参数错误");
        // Other table entries keep their fixed text.
        let e = RequestError::http("/a", 502).with_message("upstream");
        assert_eq!(c.message(&e), "网关错误");
    }

    #[test]
    fn unknown_status_uses_error_message_or_fallback() {
        let c = classifier();
        let e = RequestError::http("/a", 418).with_message("teapot");
        assert_eq!(c.message(&e), "teapot");
        assert_eq!(c.message(&RequestError::http("/a", 418)), "连接错误418");
    }

    #[test]
    fn custom_ignorable_paths() {
        let c = ErrorClassifier::new(["/metrics"]);
        assert_eq!(
            c.classify(&RequestError::http("/api/metrics/daily", 400)),
            ErrorVerdict::Ignorable
        );
        assert_eq!(
            c.classify(&RequestError::http("/api/risk-level-statistics", 400)),
            ErrorVerdict::Fatal
        );
    }
}
