//! In-memory key/value cache with per-entry time-to-live.
//!
//! Expiry is lazy: entries are checked against the clock on read and dropped
//! when stale. There is no sweeper task. The cache holds at most `capacity`
//! entries; inserting past the bound evicts the least-recently-inserted key.
//!
//! The cache is in-memory and resets on application restart.

mod clock;

pub use clock::{Clock, SystemClock};

#[cfg(test)]
pub(crate) use clock::ManualClock;

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use log::{debug, warn};

/// Default maximum number of entries.
pub const DEFAULT_CAPACITY: usize = 100;

/// Default time-to-live for cached quotes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(30);

#[derive(Debug)]
struct CacheEntry<V> {
    value: V,
    /// `None` when `now + ttl` is past the representable range.
    expires_at: Option<Instant>,
}

impl<V> CacheEntry<V> {
    fn is_fresh(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(at) => now < at,
            None => true,
        }
    }
}

#[derive(Debug)]
struct CacheState<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
    /// Keys in insertion order, oldest first.
    order: VecDeque<K>,
}

impl<K: Eq + Hash + Clone, V> CacheState<K, V> {
    fn remove(&mut self, key: &K) -> Option<CacheEntry<V>> {
        let entry = self.entries.remove(key)?;
        self.order.retain(|k| k != key);
        Some(entry)
    }
}

/// Thread-safe TTL cache.
pub struct ExpiringCache<K, V> {
    state: Mutex<CacheState<K, V>>,
    capacity: usize,
    clock: Arc<dyn Clock>,
}

impl<K, V> ExpiringCache<K, V>
where
    K: Eq + Hash + Clone + std::fmt::Debug,
    V: Clone,
{
    /// Create a cache with the default capacity and the system clock.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_clock(capacity, Arc::new(SystemClock))
    }

    /// Create a cache reading time from `clock`.
    pub fn with_clock(capacity: usize, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Mutex::new(CacheState {
                entries: HashMap::new(),
                order: VecDeque::new(),
            }),
            capacity: capacity.max(1),
            clock,
        }
    }

    /// Lock the state mutex, recovering from poison if necessary.
    ///
    /// A poisoned cache can at worst hold a stale entry, which expires anyway.
    fn lock_state(&self) -> MutexGuard<'_, CacheState<K, V>> {
        self.state.lock().unwrap_or_else(|poisoned| {
            warn!("Expiring cache mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Return the value for `key` if present and not expired.
    pub fn get(&self, key: &K) -> Option<V> {
        let now = self.clock.now();
        let mut state = self.lock_state();

        let expired = match state.entries.get(key) {
            Some(entry) if entry.is_fresh(now) => return Some(entry.value.clone()),
            Some(_) => true,
            None => false,
        };

        if expired {
            debug!("Cache entry {:?} expired", key);
            state.remove(key);
        }
        None
    }

    /// Store `value` under `key` until `now + ttl`, replacing any previous entry.
    pub fn put(&self, key: K, value: V, ttl: Duration) {
        let expires_at = self.clock.now().checked_add(ttl);
        let mut state = self.lock_state();

        state.remove(&key);
        state.order.push_back(key.clone());
        state.entries.insert(key, CacheEntry { value, expires_at });

        while state.entries.len() > self.capacity {
            let Some(oldest) = state.order.pop_front() else {
                break;
            };
            debug!("Cache over capacity, evicting {:?}", oldest);
            state.entries.remove(&oldest);
        }
    }

    /// Remove `key` regardless of expiry.
    pub fn invalidate(&self, key: &K) {
        self.lock_state().remove(key);
    }

    /// Number of stored entries, including ones that expired but were not read since.
    pub fn len(&self) -> usize {
        self.lock_state().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<K, V> Default for ExpiringCache<K, V>
where
    K: Eq + Hash + Clone + std::fmt::Debug,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
