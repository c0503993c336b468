//! Periodic cache sweep and stats line.

use super::Gateway;
use polyglot_core::{
    cache::DedupCache,
    stats::{format_uptime, Stats, StatsSnapshot},
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub(super) fn stats_line(snap: &StatsSnapshot, cache_size: usize) -> String {
    format!(
        "stats: {} translations, {} duplicates prevented, {} errors, cache {}, uptime {}",
        snap.translations_processed,
        snap.duplicates_prevented,
        snap.errors_handled,
        cache_size,
        format_uptime(snap.uptime_secs)
    )
}

impl Gateway {
    /// Purge expired cache entries every `interval`. Runs until aborted.
    pub(super) async fn sweep_loop(cache: DedupCache, stats: Arc<Stats>, interval: Duration) {
        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let removed = cache.sweep_expired();
            if removed > 0 {
                info!("cache sweep removed {removed} expired entries");
            }
            info!("{}", stats_line(&stats.snapshot(), cache.len()));
        }
    }
}
