//! Dedup cache — at most one in-flight or completed translation per
//! (message, trigger) pair within a fixed time window.
//!
//! Every read path re-validates expiry, so an expired entry is absent whether
//! or not the sweeper has run. All four operations take the same lock and
//! never await while holding it, which makes reservation atomic with respect
//! to concurrent events and lets the sweep interleave with anything.
//!
//! A granted reservation is a [`Reservation`] token stamped with the entry's
//! generation. Completing or releasing with a token only touches the entry it
//! created, so a task whose entry expired under it cannot disturb the next
//! holder of the key.
//!
//! Time comes from `tokio::time::Instant` so paused-clock tests drive expiry.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;

/// Composite cache key. Distinct reactions on one message are independent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CacheKey {
    pub message_id: String,
    pub trigger: String,
}

impl CacheKey {
    pub fn new(message_id: impl Into<String>, trigger: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            trigger: trigger.into(),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.message_id, self.trigger)
    }
}

/// Lifecycle of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Pending,
    Completed,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    generation: u64,
    status: EntryStatus,
    created_at: Instant,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Proof of a granted reservation. Consumed by completion or release.
#[derive(Debug)]
#[must_use = "a reservation must be completed or released"]
pub struct Reservation {
    key: CacheKey,
    generation: u64,
}

impl Reservation {
    pub fn key(&self) -> &CacheKey {
        &self.key
    }
}

#[derive(Debug, Default)]
struct Entries {
    map: HashMap<CacheKey, CacheEntry>,
    next_generation: u64,
}

/// Read-only view of a live entry, for the status API.
#[derive(Debug, Clone, Serialize)]
pub struct EntrySnapshot {
    pub key: String,
    pub status: EntryStatus,
    pub age_secs: u64,
    pub expires_in_secs: u64,
}

/// Thread-safe dedup cache. Cloning shares the underlying map.
#[derive(Debug, Clone)]
pub struct DedupCache {
    entries: Arc<Mutex<Entries>>,
    ttl: Duration,
}

impl DedupCache {
    /// Create a cache whose entries live for `ttl` from creation.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(Mutex::new(Entries::default())),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Reserve `key` if no live entry exists.
    pub fn try_reserve(&self, key: &CacheKey) -> Option<Reservation> {
        self.try_reserve_at(key, Instant::now())
    }

    /// Mark the reserved entry completed. No-op when it expired or was
    /// replaced by a newer reservation.
    pub fn mark_completed(&self, reservation: Reservation) {
        self.mark_completed_at(reservation, Instant::now());
    }

    /// Drop the reserved entry so the next reaction can retry immediately.
    /// No-op when it was already replaced by a newer reservation.
    pub fn release(&self, reservation: Reservation) {
        let mut entries = self.lock();
        if entries
            .map
            .get(&reservation.key)
            .is_some_and(|e| e.generation == reservation.generation)
        {
            entries.map.remove(&reservation.key);
        }
    }

    /// Remove every expired entry. Returns how many were removed.
    pub fn sweep_expired(&self) -> usize {
        self.sweep_expired_at(Instant::now())
    }

    /// Status of the live entry for `key`, if any.
    pub fn status(&self, key: &CacheKey) -> Option<EntryStatus> {
        self.status_at(key, Instant::now())
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.lock().map.values().filter(|e| e.is_live(now)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Point-in-time view of every live entry, sorted by key.
    pub fn snapshot(&self) -> Vec<EntrySnapshot> {
        self.snapshot_at(Instant::now())
    }

    pub(crate) fn try_reserve_at(&self, key: &CacheKey, now: Instant) -> Option<Reservation> {
        let mut entries = self.lock();
        if entries.map.get(key).is_some_and(|e| e.is_live(now)) {
            return None;
        }
        entries.next_generation += 1;
        let generation = entries.next_generation;
        entries.map.insert(
            key.clone(),
            CacheEntry {
                generation,
                status: EntryStatus::Pending,
                created_at: now,
                expires_at: now + self.ttl,
            },
        );
        Some(Reservation {
            key: key.clone(),
            generation,
        })
    }

    pub(crate) fn mark_completed_at(&self, reservation: Reservation, now: Instant) {
        let mut entries = self.lock();
        match entries.map.get_mut(&reservation.key) {
            Some(entry) if entry.generation != reservation.generation => {}
            Some(entry) if entry.is_live(now) => entry.status = EntryStatus::Completed,
            Some(_) => {
                entries.map.remove(&reservation.key);
            }
            None => {}
        }
    }

    pub(crate) fn sweep_expired_at(&self, now: Instant) -> usize {
        let mut entries = self.lock();
        let before = entries.map.len();
        entries.map.retain(|_, e| e.is_live(now));
        before - entries.map.len()
    }

    pub(crate) fn snapshot_at(&self, now: Instant) -> Vec<EntrySnapshot> {
        let mut out: Vec<EntrySnapshot> = self
            .lock()
            .map
            .iter()
            .filter(|(_, e)| e.is_live(now))
            .map(|(k, e)| EntrySnapshot {
                key: k.to_string(),
                status: e.status,
                age_secs: now.saturating_duration_since(e.created_at).as_secs(),
                expires_in_secs: e.expires_at.saturating_duration_since(now).as_secs(),
            })
            .collect();
        out.sort_by(|a, b| a.key.cmp(&b.key));
        out
    }

    pub(crate) fn status_at(&self, key: &CacheKey, now: Instant) -> Option<EntryStatus> {
        self.lock()
            .map
            .get(key)
            .filter(|e| e.is_live(now))
            .map(|e| e.status)
    }

    fn lock(&self) -> MutexGuard<'_, Entries> {
        // A panic while holding the lock cannot leave an entry half-written,
        // so a poisoned map is still consistent.
        self.entries.lock().unwrap_or_else(|p| p.into_inner())
    }
}
