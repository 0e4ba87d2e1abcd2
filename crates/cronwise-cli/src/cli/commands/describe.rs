//! `cronwise describe` – explain a cron expression.

use anyhow::Result;
use cronwise_core::cron::{self, RecurrencePattern};

fn pattern_name(pattern: &RecurrencePattern) -> &'static str {
    match pattern {
        RecurrencePattern::Daily { .. } => "daily",
        RecurrencePattern::Weekly { .. } => "weekly",
        RecurrencePattern::Monthly { .. } => "monthly",
        RecurrencePattern::IntervalMinutes { .. } => "interval",
        RecurrencePattern::Custom { .. } => "custom",
    }
}

pub fn run_describe(expr: &str, json: bool) -> Result<()> {
    let fields = cron::parse(expr).ok();
    let described = cron::describe_expression(expr);

    if json {
        let out = serde_json::json!({
            "expression": expr.trim(),
            "fields": fields,
            "pattern": described.pattern,
            "description": described.description,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{:<12} {}", "expression", expr.trim());
    if let Some(f) = &fields {
        println!(
            "{:<12} sec={} min={} hour={} dom={} month={} dow={}{}",
            "fields",
            f.second,
            f.minute,
            f.hour,
            f.day_of_month,
            f.month,
            f.day_of_week,
            f.year
                .as_deref()
                .map(|y| format!(" year={y}"))
                .unwrap_or_default()
        );
    }
    println!("{:<12} {}", "pattern", pattern_name(&described.pattern));
    println!("{:<12} {}", "description", described.description);
    Ok(())
}
