//! Cron expression codec.
//!
//! Translates quartz-style cron strings (`second minute hour day-of-month
//! month day-of-week [year]`) into structured fields, classifies them into a
//! small set of recurrence patterns for display, and builds cron strings back
//! from a recurrence description.
//!
//! Parsing is deliberately permissive: only the field count is checked. The
//! output is a best-effort schedule description for UI display, not a
//! validating scheduler.

mod classify;
mod fields;
mod generate;
mod presets;

pub use classify::{
    classify, classify_expression, describe, describe_expression, RecurrencePattern,
    ScheduleDescription, TimeOfDay,
};
pub use fields::{parse, validate, CronFields, ParseError};
pub use generate::{
    generate, interval_hours_truncated, RecurrenceConfig, RecurrenceKind, DEFAULT_EXPRESSION,
};
pub use presets::{presets, CronPreset};
