//! Models Module
//!
//! The capability-set contract consumers program against, and the state
//! snapshot used when reporting on a cache.

mod cache;
mod state;

pub use cache::Cache;
pub use state::CacheState;
