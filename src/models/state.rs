//! Cache state snapshot

use serde::Serialize;

/// Capacity and current size of a cache at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheState {
    /// Maximum number of entries
    pub capacity: usize,
    /// Entries currently stored
    pub len: usize,
}

impl CacheState {
    /// Remaining room before inserts start evicting.
    pub fn free_slots(&self) -> usize {
        self.capacity.saturating_sub(self.len)
    }
}
