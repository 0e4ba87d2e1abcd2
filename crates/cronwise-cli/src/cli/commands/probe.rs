//! `cronwise probe` – HEAD-probe URLs under a retry policy.

use anyhow::{bail, Result};
use cronwise_core::cache::TtlCache;
use cronwise_core::config;
use cronwise_core::probe::{self, ProbeResult};
use cronwise_core::retry::RetryError;
use tokio_util::sync::CancellationToken;

use crate::cli::PolicyName;

pub async fn run_probe(urls: &[String], policy: PolicyName) -> Result<()> {
    let cfg = config::load_or_init()?;
    let policy = policy.policy(&cfg);
    let classifier = cfg.error_classifier();
    let cache: TtlCache<String, ProbeResult> = TtlCache::new(cfg.cache_ttl());
    tracing::debug!(?policy, urls = urls.len(), "probing");

    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_signal.cancel();
        }
    });

    let mut failures = 0usize;
    for url in urls {
        match probe::probe_with_retry(url, probe::DEFAULT_TIMEOUT, &policy, &cache, &cancel).await
        {
            Ok(r) => {
                let length = r
                    .content_length
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "ok     {} {} length={} type={}",
                    r.status,
                    url,
                    length,
                    r.content_type.as_deref().unwrap_or("-")
                );
            }
            Err(RetryError::Cancelled) => bail!("probe cancelled"),
            Err(RetryError::Failed(err)) => {
                let verdict = classifier.classify(&err);
                let message = classifier.message(&err);
                if message.is_empty() {
                    println!("ignore {} {:?}", url, verdict);
                    continue;
                }
                failures += 1;
                println!("fail   {} {:?}: {}", url, verdict, message);
                tracing::info!(url = %url, error = %err, ?verdict, "probe failed");
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} probes failed", failures, urls.len());
    }
    Ok(())
}
