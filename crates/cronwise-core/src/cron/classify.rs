//! Classify cron fields into human-meaningful recurrence patterns.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::fields::{parse, CronFields, ParseError};

/// Wall-clock time of day (hour 0-23, minute 0-59 for well-formed input).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Recurrence shape a cron expression was classified into.
///
/// `day_of_week` follows the quartz-style convention used by the backend:
/// Monday = 1 ... Sunday = 7.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecurrencePattern {
    Daily { time: TimeOfDay },
    Weekly { time: TimeOfDay, day_of_week: u32 },
    Monthly { time: TimeOfDay, day_of_month: u32 },
    IntervalMinutes { minutes: u32 },
    Custom { expression: String },
}

/// A classified pattern together with its rendered description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDescription {
    pub pattern: RecurrencePattern,
    pub description: String,
}

fn is_any(token: &str) -> bool {
    token == "*" || token == "?"
}

/// Leading-digit integer parse; tokens without leading digits read as 0.
fn lenient_int(token: &str) -> u32 {
    let digits: String = token.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// `*/N` step value, if the token is a step expression.
fn step_of(token: &str) -> Option<u32> {
    token.strip_prefix("*/").map(lenient_int)
}

fn time_of(fields: &CronFields) -> TimeOfDay {
    TimeOfDay::new(lenient_int(&fields.hour), lenient_int(&fields.minute))
}

/// Classify parsed fields. First matching shape wins.
///
/// `Custom` carries the fields re-joined with single spaces; use
/// [`classify_expression`] to keep the caller's string instead.
///
/// The daily shape requires a literal time: `0 */30 * * * ?` has the same
/// day/month layout as a daily schedule but is an interval.
pub fn classify(fields: &CronFields) -> RecurrencePattern {
    let dom = fields.day_of_month.as_str();
    let dow = fields.day_of_week.as_str();
    let every_month = fields.month == "*";
    let literal_time = step_of(&fields.minute).is_none() && step_of(&fields.hour).is_none();

    if dom == "*" && every_month && is_any(dow) && literal_time {
        return RecurrencePattern::Daily {
            time: time_of(fields),
        };
    }
    if dom == "?" && every_month && !is_any(dow) {
        return RecurrencePattern::Weekly {
            time: time_of(fields),
            day_of_week: lenient_int(dow),
        };
    }
    if !is_any(dom) && every_month && is_any(dow) {
        return RecurrencePattern::Monthly {
            time: time_of(fields),
            day_of_month: lenient_int(dom),
        };
    }
    if let Some(n) = step_of(&fields.minute) {
        if fields.hour == "*" && dom == "*" && every_month {
            return RecurrencePattern::IntervalMinutes { minutes: n };
        }
    }
    if fields.minute == "0" && dom == "*" && every_month {
        if let Some(n) = step_of(&fields.hour) {
            return RecurrencePattern::IntervalMinutes {
                minutes: n.saturating_mul(60),
            };
        }
    }
    RecurrencePattern::Custom {
        expression: fields.to_string(),
    }
}

fn day_name(day_of_week: u32) -> &'static str {
    match day_of_week {
        1 => "一",
        2 => "二",
        3 => "三",
        4 => "四",
        5 => "五",
        6 => "六",
        7 => "日",
        _ => "一",
    }
}

/// Render a pattern as a short Chinese description for display.
pub fn describe(pattern: &RecurrencePattern) -> String {
    match pattern {
        RecurrencePattern::Daily { time } => format!("每天 {} 执行", time),
        RecurrencePattern::Weekly { time, day_of_week } => {
            format!("每周{} {} 执行", day_name(*day_of_week), time)
        }
        RecurrencePattern::Monthly { time, day_of_month } => {
            format!("每月{}日 {} 执行", day_of_month, time)
        }
        RecurrencePattern::IntervalMinutes { minutes } if *minutes > 0 && minutes % 60 == 0 => {
            format!("每 {} 小时执行一次", minutes / 60)
        }
        RecurrencePattern::IntervalMinutes { minutes } => format!("每 {} 分钟执行一次", minutes),
        RecurrencePattern::Custom { expression } => format!("自定义: {}", expression),
    }
}

/// Parse and classify a raw cron string. A `Custom` result carries the
/// trimmed input verbatim.
pub fn classify_expression(cron: &str) -> Result<RecurrencePattern, ParseError> {
    let pattern = match classify(&parse(cron)?) {
        RecurrencePattern::Custom { .. } => RecurrencePattern::Custom {
            expression: cron.trim().to_string(),
        },
        other => other,
    };
    Ok(pattern)
}

/// Parse, classify and describe a raw cron string in one step.
///
/// Never fails: an unparsable string yields a `Custom` pattern carrying the
/// input and the description `无效的Cron表达式`.
pub fn describe_expression(cron: &str) -> ScheduleDescription {
    match classify_expression(cron) {
        Ok(pattern) => {
            let description = describe(&pattern);
            tracing::debug!(cron, ?pattern, "classified cron expression");
            ScheduleDescription {
                pattern,
                description,
            }
        }
        Err(e) => {
            tracing::debug!(cron, error = %e, "unparsable cron expression");
            ScheduleDescription {
                pattern: RecurrencePattern::Custom {
                    expression: cron.trim().to_string(),
                },
                description: "无效的Cron表达式".to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_str(s: &str) -> RecurrencePattern {
        classify(&parse(s).unwrap())
    }

    #[test]
    fn daily_at_two() {
        let p = classify_str("0 0 2 * * ?");
        assert_eq!(
            p,
            RecurrencePattern::Daily {
                time: TimeOfDay::new(2, 0)
            }
        );
        assert_eq!(describe(&p), "每天 02:00 执行");
    }

    #[test]
    fn daily_accepts_star_day_of_week() {
        let p = classify_str("0 15 22 * * *");
        assert_eq!(
            p,
            RecurrencePattern::Daily {
                time: TimeOfDay::new(22, 15)
            }
        );
    }

    #[test]
    fn weekly_monday_nine() {
        let p = classify_str("0 0 9 ? * 1");
        assert_eq!(
            p,
            RecurrencePattern::Weekly {
                time: TimeOfDay::new(9, 0),
                day_of_week: 1
            }
        );
        assert!(describe(&p).contains("每周一"));
        assert_eq!(describe(&p), "每周一 09:00 执行");
    }

    #[test]
    fn weekly_sunday_and_unknown_day_names() {
        let sunday = classify_str("0 30 7 ? * 7");
        assert_eq!(describe(&sunday), "每周日 07:30 执行");
        let odd = classify_str("0 30 7 ? * MON");
        assert_eq!(describe(&odd), "每周一 07:30 执行");
    }

    #[test]
    fn monthly_first_of_month() {
        let p = classify_str("0 0 2 1 * ?");
        assert_eq!(
            p,
            RecurrencePattern::Monthly {
                time: TimeOfDay::new(2, 0),
                day_of_month: 1
            }
        );
        assert_eq!(describe(&p), "每月1日 02:00 执行");
    }

    #[test]
    fn minute_step_is_interval() {
        let p = classify_str("0 */30 * * * ?");
        assert_eq!(p, RecurrencePattern::IntervalMinutes { minutes: 30 });
        assert_eq!(describe(&p), "每 30 分钟执行一次");
    }

    #[test]
    fn hour_step_with_day_of_week_set_is_interval() {
        // Daily needs dow in {*, ?}; with a concrete dow and dom `*` the
        // weekly and monthly shapes do not match either.
        let p = classify_str("0 0 */6 * * 1");
        assert_eq!(p, RecurrencePattern::IntervalMinutes { minutes: 360 });
        assert_eq!(describe(&p), "每 6 小时执行一次");
    }

    #[test]
    fn hour_step_is_interval_not_daily() {
        let p = classify_str("0 0 */6 * * ?");
        assert_eq!(p, RecurrencePattern::IntervalMinutes { minutes: 360 });
        let hourly = classify_str("0 0 */1 * * ?");
        assert_eq!(hourly, RecurrencePattern::IntervalMinutes { minutes: 60 });
        assert_eq!(describe(&hourly), "每 1 小时执行一次");
    }

    #[test]
    fn minute_step_with_fixed_hour_is_custom() {
        let p = classify_str("0 */10 8 * * ?");
        assert!(matches!(p, RecurrencePattern::Custom { .. }));
    }

    #[test]
    fn custom_falls_through() {
        let p = classify_str("0 0 2 1 1 ?");
        assert_eq!(
            p,
            RecurrencePattern::Custom {
                expression: "0 0 2 1 1 ?".to_string()
            }
        );
        assert_eq!(describe(&p), "自定义: 0 0 2 1 1 ?");
    }

    #[test]
    fn out_of_range_values_pass_through() {
        let p = classify_str("0 0 99 * * ?");
        assert_eq!(describe(&p), "每天 99:00 执行");
    }

    #[test]
    fn describe_expression_handles_invalid_input() {
        let d = describe_expression("not a cron");
        assert_eq!(d.description, "无效的Cron表达式");
        assert!(matches!(d.pattern, RecurrencePattern::Custom { .. }));
    }

    #[test]
    fn custom_expression_keeps_caller_spacing() {
        let p = classify_expression("  0 0 2 1  1 ? ").unwrap();
        assert_eq!(
            p,
            RecurrencePattern::Custom {
                expression: "0 0 2 1  1 ?".to_string()
            }
        );
        let d = describe_expression("0 0 2 1  1 ?");
        assert_eq!(d.description, "自定义: 0 0 2 1  1 ?");
        // Non-custom shapes are unaffected.
        assert!(matches!(
            classify_expression("0  0 2 * * ?").unwrap(),
            RecurrencePattern::Daily { .. }
        ));
        assert!(classify_expression("0 0 2").is_err());
    }

    #[test]
    fn describe_expression_valid_input() {
        let d = describe_expression("0 0 2 * * ?");
        assert_eq!(d.description, "每天 02:00 执行");
    }
}
