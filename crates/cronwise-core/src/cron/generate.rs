//! Build cron strings from a recurrence description.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Expression used when the recurrence kind is not recognised: every day at 02:00.
pub const DEFAULT_EXPRESSION: &str = "0 0 2 * * ?";

/// Which template to build from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceKind {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Interval,
    /// Any other type string; generates [`DEFAULT_EXPRESSION`].
    #[serde(other)]
    Unknown,
}

impl FromStr for RecurrenceKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "daily" => RecurrenceKind::Daily,
            "weekly" => RecurrenceKind::Weekly,
            "monthly" => RecurrenceKind::Monthly,
            "interval" => RecurrenceKind::Interval,
            _ => RecurrenceKind::Unknown,
        })
    }
}

/// Recurrence description as supplied by callers (e.g. a schedule form).
///
/// Field names follow the external interface (`type`, `time`, `dayOfWeek`,
/// `dayOfMonth`, `intervalMinutes`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceConfig {
    #[serde(rename = "type")]
    pub kind: RecurrenceKind,
    /// Time of day as `HH:MM`.
    #[serde(default)]
    pub time: Option<String>,
    /// 1-7, Monday = 1.
    #[serde(default)]
    pub day_of_week: Option<u32>,
    /// 1-31.
    #[serde(default)]
    pub day_of_month: Option<u32>,
    #[serde(default)]
    pub interval_minutes: Option<u32>,
}

impl RecurrenceConfig {
    pub fn daily(time: &str) -> Self {
        Self {
            kind: RecurrenceKind::Daily,
            time: Some(time.to_string()),
            ..Self::default()
        }
    }

    pub fn weekly(time: &str, day_of_week: u32) -> Self {
        Self {
            kind: RecurrenceKind::Weekly,
            time: Some(time.to_string()),
            day_of_week: Some(day_of_week),
            ..Self::default()
        }
    }

    pub fn monthly(time: &str, day_of_month: u32) -> Self {
        Self {
            kind: RecurrenceKind::Monthly,
            time: Some(time.to_string()),
            day_of_month: Some(day_of_month),
            ..Self::default()
        }
    }

    pub fn interval(minutes: u32) -> Self {
        Self {
            kind: RecurrenceKind::Interval,
            interval_minutes: Some(minutes),
            ..Self::default()
        }
    }
}

/// Split `HH:MM` into (hour, minute). Missing or non-numeric parts read as 0.
fn parse_time(time: Option<&str>) -> (u32, u32) {
    let Some(time) = time else {
        return (0, 0);
    };
    let mut parts = time.split(':').map(|p| p.trim().parse::<u32>().unwrap_or(0));
    let hour = parts.next().unwrap_or(0);
    let minute = parts.next().unwrap_or(0);
    (hour, minute)
}

/// Whole hours in an interval of `minutes` (>= 60), rounding down.
///
/// The sub-hour remainder is discarded: 90 minutes becomes a 1 hour step.
/// Kept as its own function so a stricter (rounding or failing) variant can
/// replace it without touching `generate`.
pub fn interval_hours_truncated(minutes: u32) -> u32 {
    minutes / 60
}

/// Build a 6-field quartz cron string from a recurrence description.
///
/// Never fails; absent day values default to 1 and an unknown kind yields
/// [`DEFAULT_EXPRESSION`]. Ranges are not checked.
pub fn generate(config: &RecurrenceConfig) -> String {
    let (hour, minute) = parse_time(config.time.as_deref());

    match config.kind {
        RecurrenceKind::Daily => format!("0 {} {} * * ?", minute, hour),
        RecurrenceKind::Weekly => {
            let dow = config.day_of_week.filter(|d| *d != 0).unwrap_or(1);
            format!("0 {} {} ? * {}", minute, hour, dow)
        }
        RecurrenceKind::Monthly => {
            let dom = config.day_of_month.filter(|d| *d != 0).unwrap_or(1);
            format!("0 {} {} {} * ?", minute, hour, dom)
        }
        RecurrenceKind::Interval => match config.interval_minutes.filter(|n| *n != 0) {
            Some(n) if n < 60 => format!("0 */{} * * * ?", n),
            Some(n) => {
                let hours = interval_hours_truncated(n);
                if n % 60 != 0 {
                    tracing::debug!(
                        interval_minutes = n,
                        hours,
                        "interval truncated to whole hours"
                    );
                }
                format!("0 0 */{} * * ?", hours)
            }
            None => "0 0 */1 * * ?".to_string(),
        },
        RecurrenceKind::Unknown => DEFAULT_EXPRESSION.to_string(),
    }
}
