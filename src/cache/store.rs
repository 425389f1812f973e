//! Process-wide TTL response cache

use crate::cache::CacheEntry;
use chrono::Duration;
use dashmap::DashMap;
use serde_json::Value;

/// Keyed payload store with a uniform time-to-live
///
/// Created once at startup and shared behind an `Arc`. Reads and writes
/// are per-key; concurrent writers to one key resolve last-writer-wins.
/// Stale entries are evicted when they are next read, and by
/// [`purge_stale`](Self::purge_stale) sweeps.
#[derive(Debug)]
pub struct ResponseCache {
    entries: DashMap<String, CacheEntry>,
    ttl: Duration,
}

impl ResponseCache {
    /// Creates an empty cache whose entries live for `ttl_secs` seconds
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            entries: DashMap::new(),
            ttl: Duration::seconds(ttl_secs.min(u64::from(u32::MAX)) as i64),
        }
    }

    /// The configured time-to-live
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the payload stored under `key`, unless it is missing or stale
    pub fn get(&self, key: &str) -> Option<Value> {
        let stale = {
            let entry = self.entries.get(key)?;
            if !entry.is_stale(self.ttl) {
                return Some(entry.payload.clone());
            }
            entry.stored_at
        };

        // Only evict the entry we saw, not a fresh one written in between
        self.entries
            .remove_if(key, |_, entry| entry.stored_at == stale);
        tracing::debug!("Evicted stale cache entry '{}'", key);
        None
    }

    /// Drops every stale entry, read or not, returning how many were dropped
    pub fn purge_stale(&self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_stale(self.ttl));
        before.saturating_sub(self.entries.len())
    }

    /// Stores `payload` under `key`, replacing any previous entry
    pub fn insert(&self, key: impl Into<String>, payload: Value) {
        self.entries.insert(key.into(), CacheEntry::new(payload));
    }

    /// Whether a fresh entry exists under `key`
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of stored entries, stale ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
