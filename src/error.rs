//! Error types for the bounded cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the bounded cache.
///
/// Only construction can fail; every runtime operation is total.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Capacity was negative or does not fit in `usize`
    #[error("Invalid capacity: {0} (expected a non-negative entry count)")]
    InvalidCapacity(i64),

    /// A sharded cache needs at least one partition
    #[error("Invalid shard count: {0} (expected at least one shard)")]
    InvalidShardCount(usize),
}

// == Result Type Alias ==
/// Convenience Result type for the bounded cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_capacity_message() {
        let err = CacheError::InvalidCapacity(-1);
        assert_eq!(
            err.to_string(),
            "Invalid capacity: -1 (expected a non-negative entry count)"
        );
    }

    #[test]
    fn test_invalid_shard_count_message() {
        let err = CacheError::InvalidShardCount(0);
        assert!(err.to_string().contains("at least one shard"));
    }
}
