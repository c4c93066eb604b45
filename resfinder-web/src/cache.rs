use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::clock::Clock;

struct Entry<V> {
    value: V,
    stored_at: Instant,
    tags: Vec<String>,
}

/// A thread-safe TTL cache backed by `DashMap`.
///
/// Entries expire after `ttl` and are lazily evicted on access. Each entry
/// carries a set of tags so related entries can be dropped together.
pub struct TtlCache<V> {
    inner: DashMap<String, Entry<V>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: DashMap::new(),
            ttl,
            clock,
        }
    }

    /// Get a cached value if it exists and hasn't expired.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = self.clock.now();
        if let Some(entry) = self.inner.get(key) {
            if now.duration_since(entry.stored_at) < self.ttl {
                return Some(entry.value.clone());
            }
            // drop the read guard before removing
            drop(entry);
            self.inner
                .remove_if(key, |_, entry| now.duration_since(entry.stored_at) >= self.ttl);
        }
        None
    }

    pub fn insert(&self, key: impl Into<String>, value: V, tags: &[&str]) {
        self.inner.insert(
            key.into(),
            Entry {
                value,
                stored_at: self.clock.now(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
            },
        );
    }

    /// Drops every entry tagged with `tag`, returning how many were removed.
    pub fn revalidate_tag(&self, tag: &str) -> usize {
        let mut removed = 0;
        self.inner.retain(|_, entry| {
            let keep = !entry.tags.iter().any(|t| t == tag);
            if !keep {
                removed += 1;
            }
            keep
        });
        removed
    }

    pub fn evict_expired(&self) {
        let now = self.clock.now();
        self.inner
            .retain(|_, entry| now.duration_since(entry.stored_at) < self.ttl);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }
}
