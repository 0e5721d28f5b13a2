//! Bounded in-memory cache with per-entry TTL and FIFO eviction.
//!
//! Shields the upstream exchanges from repeated hits while keeping the
//! staleness window explicit. Eviction is pure FIFO on insertion order,
//! independent of access recency; simpler than LRU and good enough for
//! a symbol table that changes rarely.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
}

struct CacheInner<V> {
    store: HashMap<String, CacheEntry<V>>,
    /// Insertion order of keys. May contain keys already purged by an
    /// expiry read; eviction skips those.
    order: VecDeque<String>,
}

/// Bounded TTL cache with FIFO eviction.
///
/// `get` purges an expired entry from the store rather than just hiding
/// it. A TTL of zero means every entry is treated as stale on read, so
/// the cache accepts writes but never serves a hit.
///
/// Overwriting an existing key updates its value and timestamp in place
/// and does not change its eviction position.
///
/// All access goes through an internal mutex; the cache is shared
/// across request tasks on a multi-threaded runtime.
pub struct TtlCache<V> {
    ttl: Duration,
    max_items: usize,
    inner: Mutex<CacheInner<V>>,
}

impl<V: Clone> TtlCache<V> {
    /// Create a cache holding at most `max_items` entries, each valid
    /// for `ttl` after insertion.
    pub fn new(ttl: Duration, max_items: usize) -> Self {
        Self {
            ttl,
            max_items: max_items.max(1),
            inner: Mutex::new(CacheInner {
                store: HashMap::new(),
                order: VecDeque::new(),
            }),
        }
    }

    /// Look up `key`, purging the entry if its TTL has elapsed.
    pub fn get(&self, key: &str) -> Option<V> {
        let mut inner = self.inner.lock().unwrap();
        let expired = match inner.store.get(key) {
            None => return None,
            Some(entry) => self.ttl.is_zero() || entry.inserted_at.elapsed() > self.ttl,
        };
        if expired {
            inner.store.remove(key);
            return None;
        }
        inner.store.get(key).map(|entry| entry.value.clone())
    }

    /// Insert or overwrite `key`. When the store is full and `key` is
    /// new, the earliest-inserted surviving entry is evicted first.
    pub fn set(&self, key: &str, value: V) {
        let mut inner = self.inner.lock().unwrap();

        if let Some(entry) = inner.store.get_mut(key) {
            entry.value = value;
            entry.inserted_at = Instant::now();
            return;
        }

        // An expiry read purges the store but not the queue. If this
        // key lingers there from an earlier life, drop the stale
        // occurrences so eviction cannot pop them and remove the new
        // entry in place of the genuinely oldest one.
        inner.order.retain(|k| k != key);

        while inner.store.len() >= self.max_items {
            match inner.order.pop_front() {
                Some(oldest) => {
                    inner.store.remove(&oldest);
                }
                None => break,
            }
        }

        inner.order.push_back(key.to_string());
        inner.store.insert(
            key.to_string(),
            CacheEntry {
                value,
                inserted_at: Instant::now(),
            },
        );
    }

    /// Number of live entries (expired entries still count until read).
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
