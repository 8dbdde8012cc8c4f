//! Bounded Cache - A generic in-memory cache with a fixed entry ceiling
//!
//! Evicts the least recently written entry when a write exceeds capacity.
//! Reads never refresh an entry.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{BoundedCache, CacheStats, ShardedCache, SharedCache};
pub use config::Config;
pub use error::{CacheError, Result};
