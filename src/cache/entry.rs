//! Cached response payloads
//!
//! A cache entry stores the JSON payload exactly as it was first served
//! (without the `cached` flag) along with the time it was stored.

use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

/// A stored payload and its storage timestamp
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The payload served on the miss that populated this entry
    pub payload: Value,

    /// When the payload was stored
    pub stored_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Creates a new entry stamped with the current time
    pub fn new(payload: Value) -> Self {
        Self {
            payload,
            stored_at: Utc::now(),
        }
    }

    /// Returns the age of the entry
    pub fn age(&self) -> Duration {
        Utc::now() - self.stored_at
    }

    /// Checks whether the entry has outlived `ttl`
    pub fn is_stale(&self, ttl: Duration) -> bool {
        self.age() > ttl
    }
}
