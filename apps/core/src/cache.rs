//! In-memory, time-expiring cache for analysis results.
//!
//! Entries expire lazily: staleness is checked on read, there is no
//! background sweep. `put` always overwrites. The cache lives only for the
//! current process; nothing is persisted across restarts.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};
use lru::LruCache;
use tracing::debug;

/// Time source for expiry checks. Injectable so tests can control the clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

struct CacheEntry<T> {
    payload: T,
    stored_at: DateTime<Utc>,
}

/// Keyed cache of analysis payloads with a fixed TTL and an LRU size bound.
pub struct AnalysisCache<T> {
    entries: Mutex<LruCache<String, CacheEntry<T>>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<T: Clone> AnalysisCache<T> {
    /// Creates a cache using the system clock.
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self::with_clock(ttl, capacity, Arc::new(SystemClock))
    }

    /// Creates a cache with an explicit time source.
    pub fn with_clock(ttl: Duration, capacity: usize, clock: Arc<dyn Clock>) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            ttl,
            clock,
        }
    }

    /// Returns the payload stored under `key`, if present and fresh.
    ///
    /// An entry older than the TTL is treated as absent and dropped on
    /// observation.
    pub fn get(&self, key: &str) -> Option<T> {
        let now = self.clock.now();
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(entry) = entries.get(key) {
            if now.signed_duration_since(entry.stored_at) <= self.ttl {
                return Some(entry.payload.clone());
            }
            debug!(key, "cache entry expired");
            entries.pop(key);
        }
        None
    }

    /// Stores `payload` under `key`, replacing any previous entry.
    pub fn put(&self, key: &str, payload: T) {
        let entry = CacheEntry {
            payload,
            stored_at: self.clock.now(),
        };
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.put(key.to_string(), entry);
    }

    /// Number of entries currently held, fresh or not.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
