//! Runtime counters reported by the status API and the periodic stats log.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Lock-free process counters. Shared behind an `Arc`.
#[derive(Debug)]
pub struct Stats {
    translations_processed: AtomicU64,
    duplicates_prevented: AtomicU64,
    errors_handled: AtomicU64,
    started: Instant,
    started_at: DateTime<Utc>,
}

/// Serializable point-in-time view of [`Stats`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub translations_processed: u64,
    pub duplicates_prevented: u64,
    pub errors_handled: u64,
    pub uptime_secs: u64,
    pub started_at: DateTime<Utc>,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            translations_processed: AtomicU64::new(0),
            duplicates_prevented: AtomicU64::new(0),
            errors_handled: AtomicU64::new(0),
            started: Instant::now(),
            started_at: Utc::now(),
        }
    }

    pub fn record_translation(&self) {
        self.translations_processed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_duplicate(&self) {
        self.duplicates_prevented.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_error(&self) {
        self.errors_handled.fetch_add(1, Ordering::Relaxed);
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            translations_processed: self.translations_processed.load(Ordering::Relaxed),
            duplicates_prevented: self.duplicates_prevented.load(Ordering::Relaxed),
            errors_handled: self.errors_handled.load(Ordering::Relaxed),
            uptime_secs: self.uptime_secs(),
            started_at: self.started_at,
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}

/// Format seconds as `"{h}h {m}m {s}s"`.
pub fn format_uptime(secs: u64) -> String {
    format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let stats = Stats::new();
        stats.record_translation();
        stats.record_translation();
        stats.record_duplicate();
        stats.record_error();
        let snap = stats.snapshot();
        assert_eq!(snap.translations_processed, 2);
        assert_eq!(snap.duplicates_prevented, 1);
        assert_eq!(snap.errors_handled, 1);
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let json = serde_json::to_value(Stats::new().snapshot()).unwrap();
        assert_eq!(json["translationsProcessed"], 0);
        assert!(json.get("duplicatesPrevented").is_some());
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(0), "0h 0m 0s");
        assert_eq!(format_uptime(3725), "1h 2m 5s");
    }
}
