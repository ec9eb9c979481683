//! LRU TTL Cache - A thread-safe, fixed-capacity in-process cache
//!
//! Provides least-recently-used eviction with optional per-entry TTL, checked
//! lazily on access.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use cache::{LruCache, LruStore};
pub use config::Config;
pub use error::{CacheError, Result};
pub use models::{Cache, CacheState};
