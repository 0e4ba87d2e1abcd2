use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::verdict::{ErrorClassifier, DEFAULT_IGNORABLE_PATHS};

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Base delay in milliseconds; doubles per retry.
    pub base_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay_ms: 1000,
        }
    }
}

fn default_ignorable_paths() -> Vec<String> {
    DEFAULT_IGNORABLE_PATHS.iter().map(|p| p.to_string()).collect()
}

/// Global configuration loaded from `~/.config/cronwise/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CronwiseConfig {
    /// Default TTL for cached responses, in seconds.
    pub cache_ttl_secs: u64,
    /// URL substrings whose failures are never shown to the user.
    #[serde(default = "default_ignorable_paths")]
    pub ignorable_paths: Vec<String>,
    /// Optional retry policy; if missing, the built-in default policy is used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl Default for CronwiseConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: 300,
            ignorable_paths: default_ignorable_paths(),
            retry: None,
        }
    }
}

impl CronwiseConfig {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Error classifier using the configured ignorable paths.
    pub fn error_classifier(&self) -> ErrorClassifier {
        ErrorClassifier::new(self.ignorable_paths.iter().cloned())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("cronwise")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CronwiseConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Like [`load_or_init`], but at an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<CronwiseConfig> {
    if !path.exists() {
        let default_cfg = CronwiseConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(path)
}

/// Load configuration from an existing file.
pub fn load_from_path(path: &Path) -> Result<CronwiseConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: CronwiseConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
