//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with oldest-write eviction.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::cache::{oldest_write, CacheEntry, CacheStats, StatsRecorder, WriteClock};
use crate::error::{CacheError, Result};

// == Bounded Cache ==
/// In-memory key-value cache holding at most `capacity` entries.
///
/// When a write pushes the cache over capacity, the entry written least
/// recently is evicted. Reads never refresh an entry, so a frequently read
/// value is evicted just as readily as one that is never read.
///
/// A capacity of 0 means unbounded: nothing is ever evicted.
#[derive(Debug)]
pub struct BoundedCache<K, V> {
    /// Key-value storage
    entries: HashMap<K, CacheEntry<V>>,
    /// Maximum number of entries allowed, 0 = unbounded
    capacity: usize,
    /// Source of write stamps
    clock: WriteClock,
    /// Activity counters
    stats: StatsRecorder,
}

impl<K, V> BoundedCache<K, V>
where
    K: Hash + Eq,
{
    // == Constructor ==
    /// Creates an empty cache with the given capacity.
    ///
    /// A capacity of 0 disables eviction.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] if `capacity` is negative or
    /// does not fit in `usize`.
    pub fn new(capacity: i64) -> Result<Self> {
        let capacity =
            usize::try_from(capacity).map_err(|_| CacheError::InvalidCapacity(capacity))?;
        Ok(Self::with_capacity(capacity))
    }

    /// Creates an empty cache from an already non-negative capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        debug!(capacity, "bounded cache created");
        Self {
            entries: HashMap::new(),
            capacity,
            clock: WriteClock::new(),
            stats: StatsRecorder::new(),
        }
    }

    /// Creates an empty cache that never evicts.
    pub fn unbounded() -> Self {
        Self::with_capacity(0)
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Does not change the entry's write time.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(&entry.value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Remove ==
    /// Removes an entry by key, returning its value if it was present.
    ///
    /// Removing a missing key is a no-op.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.remove(key).map(|entry| entry.value)
    }

    // == Clear ==
    /// Removes every entry. Capacity is unchanged.
    pub fn clear(&mut self) {
        let dropped = self.entries.len();
        self.entries.clear();
        debug!(dropped, "bounded cache cleared");
    }

    // == Contains ==
    /// Checks if a key is present. Does not touch statistics.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    // == Written At ==
    /// Returns when the entry for `key` was last written.
    pub fn written_at<Q>(&self, key: &Q) -> Option<DateTime<Utc>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key).map(|entry| entry.written_at)
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Capacity ==
    /// Returns the configured capacity, 0 meaning unbounded.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true if the cache enforces an entry ceiling.
    pub fn is_bounded(&self) -> bool {
        self.capacity > 0
    }

    // == Views ==
    /// Iterates over key-value pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, entry)| (key, &entry.value))
    }

    /// Iterates over keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    /// Iterates over values in arbitrary order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values().map(|entry| &entry.value)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.entries.len())
    }
}

impl<K, V> BoundedCache<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Set ==
    /// Stores a key-value pair, stamping it with the current write time.
    ///
    /// If the key already exists, the value is replaced and its write time
    /// reset; the entry count does not change, so nothing is evicted.
    /// If a new key pushes the cache over capacity, the entry written least
    /// recently is evicted and returned. The key just written is never the
    /// one evicted.
    pub fn set(&mut self, key: K, value: V) -> Option<(K, V)> {
        let (written_at, sequence) = self.clock.stamp();
        self.stats.record_write();

        let previous = self
            .entries
            .insert(key, CacheEntry::new(value, written_at, sequence));
        if previous.is_some() {
            trace!(sequence, "overwrote existing entry");
            return None;
        }
        trace!(sequence, "inserted new entry");

        if self.is_bounded() && self.entries.len() > self.capacity {
            self.evict_oldest()
        } else {
            None
        }
    }

    // == Assign ==
    /// Stores `Some(value)` like [`set`](Self::set), or removes the key on `None`.
    pub fn assign(&mut self, key: K, value: Option<V>) -> Option<(K, V)> {
        match value {
            Some(value) => self.set(key, value),
            None => {
                self.remove(&key);
                None
            }
        }
    }

    // == Evict Oldest ==
    /// Removes the least recently written entry.
    ///
    /// Returns None if the cache is empty.
    fn evict_oldest(&mut self) -> Option<(K, V)> {
        let victim = oldest_write(&self.entries)?.clone();
        let (key, entry) = self.entries.remove_entry(&victim)?;
        self.stats.record_eviction();
        debug!(
            capacity = self.capacity,
            written_at = %entry.written_at,
            sequence = entry.sequence,
            "evicted oldest write"
        );
        Some((key, entry.value))
    }
}
