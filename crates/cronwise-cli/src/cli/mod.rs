//! CLI for cronwise.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use cronwise_core::config::CronwiseConfig;
use cronwise_core::retry::RetryPolicy;

use commands::{
    run_classify_error, run_completions, run_describe, run_generate, run_presets, run_probe,
    run_validate, GenerateArgs,
};

/// Top-level CLI for cronwise.
#[derive(Debug, Parser)]
#[command(name = "cronwise")]
#[command(about = "Cron schedule codec and resilient request toolkit", long_about = None)]
pub struct Cli {
    /// Debug-level logging (ignored when RUST_LOG is set).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Named retry policy for `probe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyName {
    /// 3 retries from 1s; network errors and 5xx. `[retry]` in config overrides it.
    Default,
    /// 2 retries from 2s; also retries timeouts.
    Data,
    /// 1 retry after 500ms; 5xx only.
    Quick,
}

impl PolicyName {
    fn policy(self, cfg: &CronwiseConfig) -> RetryPolicy {
        match self {
            PolicyName::Default => cfg
                .retry
                .as_ref()
                .map(RetryPolicy::from_config)
                .unwrap_or_default(),
            PolicyName::Data => RetryPolicy::data(),
            PolicyName::Quick => RetryPolicy::quick(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Explain a cron expression in words.
    Describe {
        /// 6- or 7-field quartz cron expression (quote it).
        expr: String,
        /// Print fields, pattern and description as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Build a cron expression from a recurrence description.
    Generate(GenerateArgs),

    /// Check that an expression has 6 or 7 fields.
    Validate {
        expr: String,
    },

    /// List the built-in schedule presets.
    Presets,

    /// Show how a failed request would be surfaced.
    ClassifyError {
        /// HTTP status of the response; omit for a request with no response.
        #[arg(long)]
        status: Option<u16>,
        /// The request timed out.
        #[arg(long, conflicts_with = "status")]
        timeout: bool,
        /// Request URL (matched against ignorable paths).
        #[arg(long)]
        url: String,
    },

    /// HEAD-probe one or more URLs with retries.
    Probe {
        /// URLs to probe; repeated URLs are answered from cache.
        #[arg(required = true)]
        urls: Vec<String>,
        #[arg(long, value_enum, default_value_t = PolicyName::Default)]
        policy: PolicyName,
    },

    /// Print a shell completion script to stdout.
    Completions {
        shell: Shell,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            CliCommand::Describe { expr, json } => run_describe(&expr, json)?,
            CliCommand::Generate(args) => run_generate(&args),
            CliCommand::Validate { expr } => run_validate(&expr)?,
            CliCommand::Presets => run_presets(),
            CliCommand::ClassifyError {
                status,
                timeout,
                url,
            } => run_classify_error(&url, status, timeout)?,
            CliCommand::Probe { urls, policy } => run_probe(&urls, policy).await?,
            CliCommand::Completions { shell } => run_completions(shell),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
