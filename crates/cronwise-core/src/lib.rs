pub mod cache;
pub mod config;
pub mod cron;
pub mod logging;
pub mod probe;
pub mod ratelimit;
pub mod retry;
pub mod verdict;
