//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with write-time tracking.

use chrono::{DateTime, Utc};

// == Cache Entry ==
/// Represents a single cache entry with its value and write metadata.
///
/// Reads never change an entry; only a write (insert or overwrite) produces
/// a fresh stamp.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// When the entry was last inserted or overwritten
    pub written_at: DateTime<Utc>,
    /// Cache-wide write counter at that write, orders equal timestamps
    pub sequence: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stamped with the given write time and sequence.
    pub fn new(value: V, written_at: DateTime<Utc>, sequence: u64) -> Self {
        Self {
            value,
            written_at,
            sequence,
        }
    }

    // == Write Order ==
    /// Returns the key used to order entries by write age.
    ///
    /// Smaller means written earlier.
    pub fn write_order(&self) -> (DateTime<Utc>, u64) {
        (self.written_at, self.sequence)
    }

    // == Is Older Than ==
    /// Checks if this entry was written before `other`.
    pub fn is_older_than(&self, other: &Self) -> bool {
        self.write_order() < other.write_order()
    }
}

// == Write Clock ==
/// Issues write stamps for one cache.
///
/// Stamps never move backwards, even if the wall clock does, and every stamp
/// carries a strictly increasing sequence number.
#[derive(Debug, Clone, Default)]
pub struct WriteClock {
    last: Option<DateTime<Utc>>,
    next_sequence: u64,
}

impl WriteClock {
    /// Creates a clock that has issued no stamps yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next `(written_at, sequence)` stamp.
    pub fn stamp(&mut self) -> (DateTime<Utc>, u64) {
        self.stamp_at(Utc::now())
    }

    /// Issues a stamp for an externally observed time, clamped to be no
    /// earlier than the previous stamp.
    pub(crate) fn stamp_at(&mut self, now: DateTime<Utc>) -> (DateTime<Utc>, u64) {
        let written_at = match self.last {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last = Some(written_at);

        let sequence = self.next_sequence;
        self.next_sequence += 1;

        (written_at, sequence)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_entry_creation() {
        let now = Utc::now();
        let entry = CacheEntry::new("test_value".to_string(), now, 7);

        assert_eq!(entry.value, "test_value");
        assert_eq!(entry.written_at, now);
        assert_eq!(entry.sequence, 7);
    }

    #[test]
    fn test_older_by_timestamp() {
        let now = Utc::now();
        let old = CacheEntry::new(1, now - Duration::seconds(5), 9);
        let new = CacheEntry::new(2, now, 0);

        assert!(old.is_older_than(&new));
        assert!(!new.is_older_than(&old));
    }

    #[test]
    fn test_equal_timestamps_ordered_by_sequence() {
        let now = Utc::now();
        let first = CacheEntry::new("a", now, 3);
        let second = CacheEntry::new("b", now, 4);

        assert!(first.is_older_than(&second));
        assert!(!second.is_older_than(&first));
    }

    #[test]
    fn test_clock_sequence_increases() {
        let mut clock = WriteClock::new();
        let (_, s0) = clock.stamp();
        let (_, s1) = clock.stamp();
        let (_, s2) = clock.stamp();

        assert_eq!((s0, s1, s2), (0, 1, 2));
    }

    #[test]
    fn test_clock_never_goes_backwards() {
        let mut clock = WriteClock::new();
        let now = Utc::now();

        let (first, _) = clock.stamp_at(now);
        // Wall clock stepped back by a minute
        let (second, _) = clock.stamp_at(now - Duration::minutes(1));

        assert_eq!(first, now);
        assert_eq!(second, now);
    }

    #[test]
    fn test_clock_follows_forward_time() {
        let mut clock = WriteClock::new();
        let now = Utc::now();

        clock.stamp_at(now);
        let (later, _) = clock.stamp_at(now + Duration::seconds(1));

        assert_eq!(later, now + Duration::seconds(1));
    }
}
