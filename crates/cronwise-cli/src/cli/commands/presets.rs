//! `cronwise presets` – list built-in schedules.

use cronwise_core::cron;

pub fn run_presets() {
    println!("{:<16} {:<20} {}", "EXPRESSION", "LABEL", "DESCRIPTION");
    for p in cron::presets() {
        println!("{:<16} {:<20} {}", p.expression, p.label, p.description);
    }
}
