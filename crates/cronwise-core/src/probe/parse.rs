//! Parse HTTP response header lines into probe metadata.

use super::ProbeResult;

/// Fold collected header lines into `result`. With redirects, later
/// responses overwrite earlier ones.
pub(crate) fn apply_headers(result: &mut ProbeResult, lines: &[String]) {
    for line in lines {
        let line = line.trim();
        if line.is_empty() || line.starts_with("HTTP/") {
            continue;
        }
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let name = name.trim();
        let value = value.trim();
        if name.eq_ignore_ascii_case("content-length") {
            result.content_length = value.parse::<u64>().ok();
        } else if name.eq_ignore_ascii_case("content-type") {
            result.content_type = Some(value.to_string());
        } else if name.eq_ignore_ascii_case("last-modified") {
            result.last_modified = Some(value.to_string());
        }
    }
}
