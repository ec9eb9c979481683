//! Cache Store Module
//!
//! Single-threaded cache engine combining a hash index with a recency list,
//! capacity-driven LRU eviction and lazy TTL expiration.
//!
//! Time-dependent operations take the current instant as an argument; the
//! thread-safe [`LruCache`](crate::cache::LruCache) reads the clock while holding its lock.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use crate::cache::{CacheEntry, RecencyList};
use crate::error::{CacheError, Result};

/// Upper bound on slots reserved up front; larger caches grow as they fill.
const INITIAL_SLOTS: usize = 1024;

// == LRU Store ==
/// Fixed-capacity store with LRU eviction and TTL support.
#[derive(Debug)]
pub struct LruStore<K, V> {
    /// Key to list handle
    index: HashMap<K, usize>,
    /// Entries by recency, most recently used first
    order: RecencyList<K, CacheEntry<V>>,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl<K, V> LruStore<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates an empty store holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }
        let initial = capacity.min(INITIAL_SLOTS);
        Ok(Self {
            index: HashMap::with_capacity(initial),
            order: RecencyList::with_capacity(initial),
            capacity,
        })
    }

    // == Capacity ==
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Length ==
    /// Returns the number of live entries, including expired ones not yet accessed.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Clear ==
    /// Discards every entry.
    pub fn clear(&mut self) {
        self.index.clear();
        self.order.clear();
    }

    // == Add ==
    /// Stores a value with no expiration.
    ///
    /// An existing key keeps its slot: the value is replaced, any TTL is cleared
    /// and the key becomes most recently used. A new key at capacity first evicts
    /// the least recently used entry, which is returned.
    pub fn add(&mut self, key: K, value: V) -> Option<(K, V)> {
        self.upsert(key, CacheEntry::new(value))
    }

    // == Add With TTL ==
    /// Stores a value that expires `ttl` after `now`.
    ///
    /// Same slot and eviction rules as [`add`](Self::add). A zero `ttl` stores an
    /// entry that the next [`get`](Self::get) will discard.
    pub fn add_with_ttl(
        &mut self,
        key: K,
        value: V,
        ttl: Duration,
        now: Instant,
    ) -> Option<(K, V)> {
        self.upsert(key, CacheEntry::with_ttl(value, ttl, now))
    }

    // == Get ==
    /// Retrieves a value and marks it most recently used.
    ///
    /// An entry whose deadline has been reached at `now` is removed and reported
    /// as missing.
    pub fn get<Q>(&mut self, key: &Q, now: Instant) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = *self.index.get(key)?;

        let expired = self
            .order
            .get(idx)
            .map_or(true, |(_, entry)| entry.is_expired_at(now));
        if expired {
            self.index.remove(key);
            self.order.remove(idx);
            return None;
        }

        self.order.move_to_front(idx);
        self.order.get(idx).map(|(_, entry)| &entry.value)
    }

    // == Remove ==
    /// Removes an entry, returning its value. Absent keys are a no-op.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.index.remove(key)?;
        self.order.remove(idx).map(|(_, entry)| entry.value)
    }

    // == Internal Helpers ==
    fn upsert(&mut self, key: K, entry: CacheEntry<V>) -> Option<(K, V)> {
        if let Some(&idx) = self.index.get(&key) {
            if let Some(slot) = self.order.get_mut(idx) {
                *slot = entry;
            }
            self.order.move_to_front(idx);
            return None;
        }

        let evicted = if self.order.len() >= self.capacity {
            self.evict_oldest()
        } else {
            None
        };

        let idx = self.order.push_front(key.clone(), entry);
        self.index.insert(key, idx);
        evicted
    }

    fn evict_oldest(&mut self) -> Option<(K, V)> {
        let (key, entry) = self.order.pop_back()?;
        self.index.remove(&key);
        Some((key, entry.value))
    }

    /// Keys from most to least recently used.
    #[cfg(test)]
    pub(crate) fn recency_keys(&self) -> Vec<K> {
        self.order.iter().map(|(key, _)| key.clone()).collect()
    }

    /// Asserts that the index and recency list describe the same key set.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        use std::collections::HashSet;

        assert!(self.order.len() <= self.capacity, "length exceeds capacity");
        assert_eq!(self.index.len(), self.order.len(), "index/order size mismatch");

        let mut seen = HashSet::new();
        for (key, _) in self.order.iter() {
            assert!(seen.insert(key), "duplicate key in recency list");
            let idx = self.index.get(key).copied();
            assert!(idx.is_some(), "listed key missing from index");
            let listed = idx.and_then(|idx| self.order.get(idx)).map(|(k, _)| k);
            assert!(listed == Some(key), "index handle points at another node");
        }
        assert_eq!(seen.len(), self.order.len(), "list iteration is truncated");
    }
}
