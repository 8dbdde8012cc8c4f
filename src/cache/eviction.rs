//! Eviction Module
//!
//! Selects the victim for oldest-write eviction.

use std::collections::HashMap;

use crate::cache::CacheEntry;

// == Oldest Write ==
/// Returns the key whose entry was written least recently.
///
/// Scans every entry once. Entries are ordered by write timestamp, and
/// entries sharing a timestamp by write sequence, so the result does not
/// depend on map iteration order.
///
/// Returns None if the map is empty.
pub fn oldest_write<K, V>(entries: &HashMap<K, CacheEntry<V>>) -> Option<&K> {
    entries
        .iter()
        .min_by_key(|(_, entry)| entry.write_order())
        .map(|(key, _)| key)
}
