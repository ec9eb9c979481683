//! Thread-Safe Cache Module
//!
//! Wraps [`LruStore`] in a single mutex so one instance can be shared across
//! threads and tasks.

use std::borrow::Borrow;
use std::hash::Hash;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::cache::LruStore;
use crate::config::Config;
use crate::error::Result;
use crate::models::Cache;

// == LRU Cache ==
/// Thread-safe, fixed-capacity cache with LRU eviction and lazy TTL expiration.
///
/// Every operation except [`capacity`](Self::capacity) holds one exclusive lock
/// for its whole duration, so concurrent calls behave as if run one at a time.
/// The clock is read inside that lock.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use lru_ttl_cache::LruCache;
///
/// let cache = LruCache::new(2).unwrap();
/// cache.add("a", 1);
/// cache.add_with_ttl("b", 2, Duration::from_secs(60));
/// assert_eq!(cache.get("a"), Some(1));
///
/// cache.add("c", 3); // evicts "b", the least recently used
/// assert_eq!(cache.get("b"), None);
/// ```
#[derive(Debug)]
pub struct LruCache<K, V> {
    inner: Mutex<LruStore<K, V>>,
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Constructors ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`](crate::CacheError::InvalidCapacity)
    /// if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        let store = LruStore::new(capacity)?;
        Ok(Self {
            inner: Mutex::new(store),
            capacity,
        })
    }

    /// Creates a cache sized from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.capacity)
    }

    // == Capacity ==
    /// Returns the fixed capacity. Does not take the lock.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Length ==
    /// Returns the number of stored entries.
    ///
    /// Expired entries count until an access discovers them.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    // == Clear ==
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    // == Add ==
    /// Stores a value with no expiration, evicting the least recently used
    /// entry if a new key does not fit.
    pub fn add(&self, key: K, value: V) {
        let _evicted = self.inner.lock().add(key, value);
    }

    // == Add With TTL ==
    /// Stores a value that expires after `ttl`. A zero `ttl` is allowed and
    /// makes the entry disappear on its next access.
    pub fn add_with_ttl(&self, key: K, value: V, ttl: Duration) {
        let _evicted = {
            let mut store = self.inner.lock();
            store.add_with_ttl(key, value, ttl, Instant::now())
        };
    }

    // == Get ==
    /// Returns a clone of the value and marks the key most recently used.
    ///
    /// Expired entries are removed and reported as `None`.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        let mut store = self.inner.lock();
        store.get(key, Instant::now()).cloned()
    }

    // == Remove ==
    /// Removes an entry, returning its value. Absent keys are a no-op.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().remove(key)
    }
}

// == Cache Contract ==
impl<K, V> Cache<K, V> for LruCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    fn capacity(&self) -> usize {
        LruCache::capacity(self)
    }

    fn len(&self) -> usize {
        LruCache::len(self)
    }

    fn clear(&self) {
        LruCache::clear(self);
    }

    fn add(&self, key: K, value: V) {
        LruCache::add(self, key, value);
    }

    fn add_with_ttl(&self, key: K, value: V, ttl: Duration) {
        LruCache::add_with_ttl(self, key, value, ttl);
    }

    fn get(&self, key: &K) -> Option<V> {
        LruCache::get(self, key)
    }

    fn remove(&self, key: &K) {
        LruCache::remove(self, key);
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CacheError;
    use crate::models::CacheState;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_cache_zero_capacity() {
        let result = LruCache::<&str, u32>::new(0);
        assert!(matches!(result, Err(CacheError::InvalidCapacity(0))));
    }

    #[test]
    fn test_cache_huge_capacity() {
        let cache = LruCache::<u32, u32>::new(usize::MAX / 2).unwrap();
        cache.add(1, 10);

        assert_eq!(cache.get(&1), Some(10));
        assert_eq!(cache.capacity(), usize::MAX / 2);
    }

    #[test]
    fn test_cache_from_config() {
        let config = Config {
            capacity: 8,
            ..Config::default()
        };
        let cache = LruCache::<u32, u32>::from_config(&config).unwrap();
        assert_eq!(cache.capacity(), 8);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_from_invalid_config() {
        let config = Config {
            capacity: 0,
            ..Config::default()
        };
        let result = LruCache::<u32, u32>::from_config(&config);
        assert!(matches!(result, Err(CacheError::InvalidCapacity(0))));
    }

    #[test]
    fn test_cache_state() {
        let cache = LruCache::new(3).unwrap();
        cache.add("a", 1);
        cache.add("b", 2);

        assert_eq!(cache.state(), CacheState { capacity: 3, len: 2 });
    }

    #[test]
    fn test_cache_remove_returns_value() {
        let cache = LruCache::new(3).unwrap();
        cache.add("a".to_string(), 1);

        assert_eq!(cache.remove("a"), Some(1));
        assert_eq!(cache.remove("a"), None);
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_cache_zero_ttl() {
        let cache = LruCache::new(2).unwrap();
        cache.add_with_ttl("a", 1, Duration::ZERO);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&"a"), None);
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_cache_through_trait_object() {
        let cache = LruCache::new(2).unwrap();
        let contract: &dyn Cache<&str, u32> = &cache;

        contract.add("a", 1);
        contract.add("b", 2);
        contract.add("c", 3);

        assert_eq!(contract.len(), 2);
        assert_eq!(contract.get(&"a"), None);
        assert_eq!(contract.get(&"c"), Some(3));

        contract.remove(&"c");
        contract.remove(&"missing");
        assert_eq!(contract.len(), 1);

        contract.clear();
        assert!(contract.is_empty());
    }

    #[test]
    fn test_cache_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LruCache<String, Vec<u8>>>();
    }

    #[test]
    fn test_cache_shared_across_threads() {
        let cache = Arc::new(LruCache::new(16).unwrap());

        let handles: Vec<_> = (0..4u32)
            .map(|t| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    for i in 0..100u32 {
                        cache.add(t * 1000 + i, i);
                        assert!(cache.len() <= cache.capacity());
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.len(), 16);
    }
}
