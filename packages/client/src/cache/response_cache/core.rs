//! Core ResponseCache structure and initialization

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use hashbrown::HashMap;

use crate::cache::cache_key::CacheKey;
use crate::telemetry::CacheStats;
use crate::transport::HttpResponse;

pub(crate) type EntryMap = HashMap<CacheKey, HttpResponse>;

/// In-memory HTTP response cache
#[derive(Debug)]
pub struct ResponseCache {
    /// Main cache storage (key -> response)
    pub(crate) entries: RwLock<EntryMap>,
    /// Whether reads may be served from / stored into the cache
    pub(crate) enabled: AtomicBool,
    pub(crate) stats: CacheStats,
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseCache {
    /// Create an empty, enabled cache
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            enabled: AtomicBool::new(true),
            stats: CacheStats::default(),
        }
    }

    /// Create an empty cache with the given on/off state
    #[must_use]
    pub fn with_enabled(enabled: bool) -> Self {
        let cache = Self::new();
        cache.enabled.store(enabled, Ordering::Relaxed);
        cache
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Turn caching back on
    pub fn enable(&self) {
        self.enabled.store(true, Ordering::Relaxed);
        tracing::debug!(target: "cachet::cache", "Cache enabled");
    }

    /// Turn caching off and clear every entry
    pub fn disable(&self) -> usize {
        self.enabled.store(false, Ordering::Relaxed);
        let cleared = self.drop_all();
        tracing::debug!(target: "cachet::cache", cleared, "Cache disabled");
        cleared
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }

    /// All keys, sorted
    pub fn keys(&self) -> Vec<CacheKey> {
        let mut keys: Vec<CacheKey> = self.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    // Critical sections never leave the map half-updated, so a poisoned lock
    // still guards a consistent map.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, EntryMap> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, EntryMap> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}
