//! Time-bounded memoization in front of outbound API calls.
//!
//! Entries expire lazily: staleness is checked only when a key is read, and
//! a stale entry is superseded by the next successful fetch. Map access is
//! serialized by a mutex that is never held across the producer's `.await`,
//! so two overlapping misses on the same key may both run their producer.
//! The later write wins.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

/// Default time-to-live for cached responses.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

impl<V> CacheEntry<V> {
    fn is_fresh(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// TTL cache keyed by logical request identity.
pub struct RequestCache<V> {
    entries: Mutex<HashMap<String, CacheEntry<V>>>,
    ttl: Duration,
}

impl<V: Clone> RequestCache<V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the live value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<V> {
        let entries = self.entries.lock();
        entries
            .get(key)
            .filter(|entry| entry.is_fresh(Instant::now()))
            .map(|entry| entry.value.clone())
    }

    /// Store `value` under `key`, replacing any previous entry.
    pub fn insert(&self, key: impl Into<String>, value: V) {
        let entry = CacheEntry {
            value,
            expires_at: Instant::now() + self.ttl,
        };
        self.entries.lock().insert(key.into(), entry);
    }

    /// Return the live value for `key`, or run `producer` and cache its result.
    ///
    /// A failing producer leaves the cache untouched and its error is
    /// returned as is. No retries happen here.
    pub async fn get_or_fetch<F, Fut, E>(&self, key: &str, producer: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(key) {
            tracing::debug!(key = %key, "Cache hit");
            return Ok(value);
        }

        tracing::debug!(key = %key, "Cache miss");
        let value = producer().await?;
        self.insert(key, value.clone());
        Ok(value)
    }

    /// Drop every entry unconditionally.
    pub fn clear(&self) {
        let mut entries = self.entries.lock();
        let dropped = entries.len();
        entries.clear();
        tracing::info!(dropped, "Request cache cleared");
    }

    /// Drop entries whose TTL has passed. Returns how many were removed.
    ///
    /// Never called automatically; long-lived processes can run it
    /// periodically to bound memory.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|_, entry| entry.is_fresh(now));
        before - entries.len()
    }

    /// Number of stored entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl<V: Clone> Default for RequestCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

/// Build a deterministic cache key from an operation name and its parameters.
///
/// `cache_key("search", &["alien", "2"])` yields `search_alien_2`.
pub fn cache_key(operation: &str, params: &[&dyn std::fmt::Display]) -> String {
    let mut key = operation.to_string();
    for param in params {
        key.push('_');
        key.push_str(&param.to_string());
    }
    key
}
