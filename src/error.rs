//! Error types for the cache
//!
//! Provides unified error handling using thiserror. Lookups never fail: a missing
//! or expired key is reported as `None`, so the only errors are construction-time ones.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Cache constructed with a capacity that can hold no entries
    #[error("Invalid capacity: {0} (capacity must be at least 1)")]
    InvalidCapacity(usize),

    /// Configuration value present but not parsable
    #[error("Invalid configuration: {key}={value:?}")]
    InvalidConfig { key: String, value: String },
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
