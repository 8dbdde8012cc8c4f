//! Cache Module
//!
//! Provides a size-bounded in-memory cache with oldest-write eviction, plus
//! lock-based wrappers for sharing it across threads.

mod entry;
mod eviction;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::{CacheEntry, WriteClock};
pub use eviction::oldest_write;
pub use shared::{ShardedCache, SharedCache};
pub use stats::{CacheStats, StatsRecorder};
pub use store::BoundedCache;
