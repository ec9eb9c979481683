//! Configuration Module
//!
//! Handles loading cache and demo settings from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::error::{CacheError, Result};

// == Defaults ==
const DEFAULT_CAPACITY: usize = 3;
const DEFAULT_TTL_MS: u64 = 2000;
const DEFAULT_WAIT_MS: u64 = 3000;
const DEFAULT_WORKERS: usize = 4;

/// Cache and demo configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// TTL used for the expiring entry in the demo
    pub demo_ttl: Duration,
    /// How long the demo waits before checking the expiring entry
    pub demo_wait: Duration,
    /// Number of concurrent workers in the demo's concurrency phase
    pub demo_workers: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 3)
    /// - `DEMO_TTL_MS` - TTL of the demo's expiring entry in ms (default: 2000)
    /// - `DEMO_WAIT_MS` - Wait before the expiry check in ms (default: 3000)
    /// - `DEMO_WORKERS` - Concurrent demo workers (default: 4)
    ///
    /// Unset variables fall back to their defaults; set but unparsable ones are errors.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a Config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            capacity: parse_var(&lookup, "CACHE_CAPACITY", DEFAULT_CAPACITY)?,
            demo_ttl: Duration::from_millis(parse_var(&lookup, "DEMO_TTL_MS", DEFAULT_TTL_MS)?),
            demo_wait: Duration::from_millis(parse_var(
                &lookup,
                "DEMO_WAIT_MS",
                DEFAULT_WAIT_MS,
            )?),
            demo_workers: parse_var(&lookup, "DEMO_WORKERS", DEFAULT_WORKERS)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the cache cannot be built with.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(CacheError::InvalidCapacity(self.capacity));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            demo_ttl: Duration::from_millis(DEFAULT_TTL_MS),
            demo_wait: Duration::from_millis(DEFAULT_WAIT_MS),
            demo_workers: DEFAULT_WORKERS,
        }
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| CacheError::InvalidConfig {
            key: key.to_string(),
            value: raw,
        }),
        None => {
            debug!("{} not set, using default", key);
            Ok(default)
        }
    }
}
