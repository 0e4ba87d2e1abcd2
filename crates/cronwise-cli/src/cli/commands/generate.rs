//! `cronwise generate` – build an expression from recurrence options.

use clap::Args;
use cronwise_core::cron::{self, RecurrenceConfig, RecurrenceKind};

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// daily, weekly, monthly or interval; anything else yields the 02:00 default.
    #[arg(long = "type", value_name = "TYPE", default_value = "daily")]
    pub kind: String,
    /// Time of day as HH:MM.
    #[arg(long)]
    pub time: Option<String>,
    /// 1-7, Monday = 1 (weekly).
    #[arg(long)]
    pub day_of_week: Option<u32>,
    /// 1-31 (monthly).
    #[arg(long)]
    pub day_of_month: Option<u32>,
    /// Step in minutes (interval). 60 and above become whole hours.
    #[arg(long)]
    pub interval_minutes: Option<u32>,
}

impl GenerateArgs {
    pub fn to_config(&self) -> RecurrenceConfig {
        let kind = self
            .kind
            .parse::<RecurrenceKind>()
            .unwrap_or(RecurrenceKind::Unknown);
        RecurrenceConfig {
            kind,
            time: self.time.clone(),
            day_of_week: self.day_of_week,
            day_of_month: self.day_of_month,
            interval_minutes: self.interval_minutes,
        }
    }
}

pub fn run_generate(args: &GenerateArgs) {
    let config = args.to_config();
    if config.kind == RecurrenceKind::Unknown {
        tracing::warn!(kind = %args.kind, "unknown recurrence type, using default schedule");
    }
    println!("{}", cron::generate(&config));
}
