//! Cache contract
//!
//! Operations every cache implementation exposes to its consumers.

use std::time::Duration;

use crate::models::CacheState;

/// Bounded key-value cache with optional per-entry expiration.
///
/// A missing or expired key is a normal outcome reported as `None`, never an error.
pub trait Cache<K, V> {
    /// Maximum number of entries, fixed at construction.
    fn capacity(&self) -> usize;

    /// Number of stored entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Capacity and length as one snapshot.
    fn state(&self) -> CacheState {
        CacheState {
            capacity: self.capacity(),
            len: self.len(),
        }
    }

    /// Removes every entry.
    fn clear(&self);

    /// Inserts or replaces a value with no expiration.
    fn add(&self, key: K, value: V);

    /// Inserts or replaces a value that expires after `ttl`.
    fn add_with_ttl(&self, key: K, value: V, ttl: Duration);

    /// Looks up a value, marking it most recently used.
    fn get(&self, key: &K) -> Option<V>;

    /// Removes a key if present.
    fn remove(&self, key: &K);
}
