//! Configuration Module
//!
//! Loads demo configuration from environment variables.

use std::env;

/// Demo configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Entry ceiling for the demo cache; 0 = unbounded, negative is rejected at construction
    pub capacity: i64,
    /// Number of partitions for the sharded demo cache
    pub shards: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 3)
    /// - `CACHE_SHARDS` - Partition count for the sharded cache (default: 4)
    ///
    /// A negative `CACHE_CAPACITY` is passed through untouched so the cache
    /// constructor can report it.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.capacity),
            shards: env::var("CACHE_SHARDS")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.shards),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 3,
            shards: 4,
        }
    }
}
