//! Memoizing front-end for [`Url::parse`].
//!
//! The cache is small and owned by the caller; it is passed explicitly to
//! whatever needs it, and `&mut` access serializes inserts and evictions.

use std::collections::HashMap;

use crate::url::Url;

/// Default number of parsed inputs kept before the cache is reset.
pub const DEFAULT_CACHE_CAPACITY: usize = 20;

/// Parse results keyed by input text.
///
/// When a miss finds the cache full, every entry is dropped before the new
/// one is inserted. There is no finer-grained eviction.
#[derive(Debug, Clone)]
pub struct UrlCache {
    entries: HashMap<String, Url>,
    capacity: usize,
}

impl Default for UrlCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl UrlCache {
    /// Create a cache holding at most `capacity` entries (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: HashMap::with_capacity(capacity),
            capacity,
        }
    }

    /// Return the cached parse of `text`, parsing and storing it on a miss.
    pub fn get_or_parse(&mut self, text: &str) -> Url {
        if let Some(url) = self.entries.get(text) {
            return url.clone();
        }

        if self.entries.len() >= self.capacity {
            tracing::debug!(
                capacity = self.capacity,
                "url cache full; clearing all entries"
            );
            self.entries.clear();
        }

        let url = Url::parse(text);
        self.entries.insert(text.to_string(), url.clone());
        url
    }

    /// Whether `text` currently has a cached parse.
    pub fn contains(&self, text: &str) -> bool {
        self.entries.contains_key(text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
