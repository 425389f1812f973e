//! Response caching module
//!
//! This module provides the in-memory TTL store that fronts every cached
//! route, keyed by route identity plus normalized parameters.

mod entry;
mod store;

pub use entry::CacheEntry;
pub use store::ResponseCache;
