//! `cronwise validate` – field-count check.

use anyhow::{Context, Result};
use cronwise_core::cron;

/// Prints `valid`, or fails (non-zero exit) with the parse error.
pub fn run_validate(expr: &str) -> Result<()> {
    cron::parse(expr).with_context(|| format!("invalid cron expression `{}`", expr.trim()))?;
    println!("valid");
    Ok(())
}
