//! Cache Entry Module
//!
//! Defines the payload stored for each key, with optional expiration.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A stored value plus its expiration deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Expiration deadline, None = no expiration
    pub expires_at: Option<Instant>,
}

impl<V> CacheEntry<V> {
    // == Constructors ==
    /// Creates an entry that never expires.
    pub fn new(value: V) -> Self {
        Self {
            value,
            expires_at: None,
        }
    }

    /// Creates an entry that expires `ttl` after `now`.
    ///
    /// A zero `ttl` produces an entry that is already expired at `now`. A deadline
    /// too far in the future to be represented is treated as no expiration.
    pub fn with_ttl(value: V, ttl: Duration, now: Instant) -> Self {
        Self {
            value,
            expires_at: deadline(now, ttl),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired as of `now`.
    ///
    /// Boundary condition: an entry is expired once `now >= expires_at`, so the
    /// entry is gone as soon as its TTL has fully elapsed.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => now >= expires,
            None => false,
        }
    }
}

/// Computes `now + ttl`, or None when the sum overflows `Instant`.
pub fn deadline(now: Instant, ttl: Duration) -> Option<Instant> {
    now.checked_add(ttl)
}
