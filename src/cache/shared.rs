//! Shared Cache Module
//!
//! Thread-safe wrappers around [`BoundedCache`].
//!
//! - [`SharedCache`] puts one cache behind a single lock.
//! - [`ShardedCache`] splits the key space across independently locked
//!   partitions, each enforcing its own capacity.

use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::Arc;

use ahash::RandomState;
use parking_lot::Mutex;
use tracing::debug;

use crate::cache::{BoundedCache, CacheStats};
use crate::error::{CacheError, Result};

// == Shared Cache ==
/// A [`BoundedCache`] behind one mutex, cheap to clone and share between threads.
///
/// Every operation takes the lock for its whole duration, so each `set`
/// still performs at most one eviction.
#[derive(Debug)]
pub struct SharedCache<K, V> {
    inner: Arc<Mutex<BoundedCache<K, V>>>,
}

impl<K, V> Clone for SharedCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> SharedCache<K, V>
where
    K: Hash + Eq,
{
    /// Creates a shared cache with the given capacity (0 = unbounded).
    pub fn new(capacity: i64) -> Result<Self> {
        Ok(Self::from_cache(BoundedCache::new(capacity)?))
    }

    /// Wraps an existing cache.
    pub fn from_cache(cache: BoundedCache<K, V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    /// Returns a copy of the value for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().remove(key)
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }

    /// Runs `f` with exclusive access, for read-modify-write sequences
    /// that must not interleave with other callers.
    pub fn with_lock<R>(&self, f: impl FnOnce(&mut BoundedCache<K, V>) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }
}

impl<K, V> SharedCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Stores a value, returning the evicted entry if the write overflowed capacity.
    pub fn set(&self, key: K, value: V) -> Option<(K, V)> {
        self.inner.lock().set(key, value)
    }
}

// == Sharded Cache ==
/// A cache partitioned into independently locked [`BoundedCache`] shards.
///
/// Keys are routed to a shard by hash. Capacity is enforced per shard, so
/// the total entry count is bounded by `capacity_per_shard * shard_count`
/// and eviction order is oldest-write within a shard, not globally.
#[derive(Debug)]
pub struct ShardedCache<K, V> {
    shards: Box<[Mutex<BoundedCache<K, V>>]>,
    /// Hasher used only to compute shard indices
    build_hasher: RandomState,
}

impl<K, V> ShardedCache<K, V>
where
    K: Hash + Eq,
{
    /// Creates `shard_count` partitions, each holding up to `capacity_per_shard`
    /// entries (0 = unbounded).
    ///
    /// # Errors
    /// [`CacheError::InvalidCapacity`] for a negative capacity and
    /// [`CacheError::InvalidShardCount`] for zero shards.
    pub fn new(capacity_per_shard: i64, shard_count: usize) -> Result<Self> {
        if shard_count == 0 {
            return Err(CacheError::InvalidShardCount(shard_count));
        }
        let capacity = usize::try_from(capacity_per_shard)
            .map_err(|_| CacheError::InvalidCapacity(capacity_per_shard))?;

        let shards = (0..shard_count)
            .map(|_| Mutex::new(BoundedCache::with_capacity(capacity)))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        debug!(shard_count, capacity_per_shard = capacity, "sharded cache created");

        Ok(Self {
            shards,
            build_hasher: RandomState::new(),
        })
    }

    #[inline]
    fn shard_for<Q>(&self, key: &Q) -> &Mutex<BoundedCache<K, V>>
    where
        Q: Hash + ?Sized,
    {
        let hash = self.build_hasher.hash_one(key);
        &self.shards[(hash as usize) % self.shards.len()]
    }

    /// Returns a copy of the value for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.shard_for(key).lock().get(key).cloned()
    }

    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.shard_for(key).lock().remove(key)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.shard_for(key).lock().contains(key)
    }

    /// Clears every shard, one lock at a time.
    pub fn clear(&self) {
        for shard in self.shards.iter() {
            shard.lock().clear();
        }
    }

    /// Sum of all shard sizes. Not atomic across shards.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.lock().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|shard| shard.lock().is_empty())
    }

    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    pub fn capacity_per_shard(&self) -> usize {
        self.shards[0].lock().capacity()
    }

    /// Merged statistics of all shards.
    pub fn stats(&self) -> CacheStats {
        self.shards
            .iter()
            .fold(CacheStats::new(), |mut total, shard| {
                total.merge(&shard.lock().stats());
                total
            })
    }
}

impl<K, V> ShardedCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Stores a value in its shard, returning the entry that shard evicted, if any.
    pub fn set(&self, key: K, value: V) -> Option<(K, V)> {
        self.shard_for(&key).lock().set(key, value)
    }
}
