//! Cache Module
//!
//! Provides in-memory caching with LRU eviction and lazy TTL expiration.

mod concurrent;
mod entry;
mod lru;
mod store;


// Re-export public types
pub use concurrent::LruCache;
pub use store::LruStore;

pub(crate) use entry::CacheEntry;
pub(crate) use lru::RecencyList;
