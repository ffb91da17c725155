//! Result Cache Module
//!
//! In-memory memo of computed results with TTL expiration.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheKey};
use crate::error::CacheWriteError;

// == Result Cache ==
/// Content-addressed memo of (x, y, operation) computations.
///
/// Expiration is enforced at read time; the background sweep only reclaims
/// memory. One instance is constructed at startup and shared behind a lock,
/// so methods take `&mut self` and never synchronize internally.
#[derive(Debug)]
pub struct ResultCache {
    /// Key-result storage
    entries: HashMap<CacheKey, CacheEntry>,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// TTL in seconds applied to every insertion
    ttl: u64,
}

impl ResultCache {
    // == Constructor ==
    /// Creates a new ResultCache with specified capacity and TTL.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of entries the cache can hold
    /// * `ttl` - TTL in seconds for every stored result
    pub fn new(max_entries: usize, ttl: u64) -> Self {
        Self {
            entries: HashMap::new(),
            max_entries,
            ttl,
        }
    }

    // == Put ==
    /// Stores a computed answer under the given key.
    ///
    /// Overwriting an existing key always succeeds and resets its TTL.
    /// Inserting a new key into a full cache fails; callers treat that as
    /// best-effort and log it rather than failing the request.
    pub fn put(&mut self, key: CacheKey, answer: i64) -> Result<(), CacheWriteError> {
        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.max_entries {
            return Err(CacheWriteError::Full(self.entries.len()));
        }

        self.entries.insert(key, CacheEntry::new(answer, self.ttl));
        Ok(())
    }

    // == Get ==
    /// Retrieves the memoized answer for a key, if present and unexpired.
    ///
    /// Expired entries are removed on read, independent of the sweep.
    pub fn get(&mut self, key: &CacheKey) -> Option<i64> {
        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired() {
                self.entries.remove(key);
                return None;
            }
            return Some(entry.answer);
        }
        None
    }

    // == Sweep Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        before - self.entries.len()
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
}
