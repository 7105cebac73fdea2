//! Cache operations: lookup, store and the drop primitives
//!
//! All operations are total; none of them can fail.

use super::core::ResponseCache;
use crate::cache::cache_key::CacheKey;
use crate::transport::HttpResponse;

impl ResponseCache {
    /// Look up the response stored for `key`
    pub fn get(&self, key: &str) -> Option<HttpResponse> {
        let found = self.read().get(key).cloned();
        if found.is_some() {
            self.stats.record_hit();
        } else {
            self.stats.record_miss();
        }
        found
    }

    /// Look up without counting a hit or miss
    pub fn peek(&self, key: &str) -> Option<HttpResponse> {
        self.read().get(key).cloned()
    }

    /// Store `response` under `key`, replacing any previous entry
    pub fn set(&self, key: CacheKey, response: HttpResponse) {
        let replaced = self.write().insert(key.clone(), response).is_some();
        self.stats.record_set();
        tracing::trace!(target: "cachet::cache", key = %key, replaced, "Cache entry stored");
    }

    /// Remove exactly `key`; returns whether an entry was removed
    pub fn drop_exact(&self, key: &str) -> bool {
        let removed = self.write().remove(key).is_some();
        if removed {
            self.stats.record_drops(1);
        }
        removed
    }

    /// Remove every entry; returns how many were removed
    pub fn drop_all(&self) -> usize {
        let removed = {
            let mut entries = self.write();
            let count = entries.len();
            entries.clear();
            count
        };
        self.stats.record_drops(removed as u64);
        removed
    }

    /// Remove every key for which `predicate` holds.
    ///
    /// Returns the removed keys in sorted order. Selection and removal happen
    /// under one write lock, so no concurrent `set` can slip in between.
    pub fn drop_matching<F>(&self, predicate: F) -> Vec<CacheKey>
    where
        F: Fn(&str) -> bool,
    {
        let mut removed: Vec<CacheKey> = {
            let mut entries = self.write();
            let doomed: Vec<CacheKey> = entries
                .keys()
                .filter(|key| predicate(key.as_str()))
                .cloned()
                .collect();
            for key in &doomed {
                entries.remove(key);
            }
            doomed
        };
        removed.sort();
        self.stats.record_drops(removed.len() as u64);
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated(keys: &[&str]) -> ResponseCache {
        let cache = ResponseCache::new();
        for key in keys {
            cache.set(CacheKey::from_raw(*key), HttpResponse::ok(key.to_string()));
        }
        cache
    }

    #[test]
    fn set_then_get_returns_stored_response() {
        let cache = ResponseCache::new();
        let response = HttpResponse::ok("payload").with_header("etag", "\"v1\"");
        cache.set(CacheKey::from_raw("https://h.example/a"), response.clone());
        assert_eq!(cache.get("https://h.example/a"), Some(response));
        assert_eq!(cache.get("https://h.example/b"), None);
    }

    #[test]
    fn set_overwrites() {
        let cache = ResponseCache::new();
        let key = CacheKey::from_raw("k");
        cache.set(key.clone(), HttpResponse::ok("one"));
        cache.set(key, HttpResponse::ok("two"));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("k").map(|r| r.text()), Some("two".to_string()));
    }

    #[test]
    fn drop_exact_is_a_noop_for_missing_keys() {
        let cache = populated(&["a", "a/1", "b"]);
        assert!(cache.drop_exact("a"));
        assert!(!cache.drop_exact("a"));
        assert_eq!(
            cache.keys(),
            vec![CacheKey::from_raw("a/1"), CacheKey::from_raw("b")]
        );
    }

    #[test]
    fn drop_all_empties_the_store() {
        let cache = populated(&["a", "b", "c"]);
        assert_eq!(cache.drop_all(), 3);
        assert!(cache.is_empty());
        assert_eq!(cache.drop_all(), 0);
    }

    #[test]
    fn drop_matching_returns_sorted_removed_keys() {
        let cache = populated(&["x/2", "y", "x/1"]);
        let removed = cache.drop_matching(|key| key.starts_with("x/"));
        assert_eq!(
            removed,
            vec![CacheKey::from_raw("x/1"), CacheKey::from_raw("x/2")]
        );
        assert_eq!(cache.keys(), vec![CacheKey::from_raw("y")]);
    }

    #[test]
    fn disable_clears_and_enable_restores_switch() {
        let cache = populated(&["a", "b"]);
        assert!(cache.is_enabled());
        assert_eq!(cache.disable(), 2);
        assert!(!cache.is_enabled());
        assert!(cache.is_empty());
        cache.enable();
        assert!(cache.is_enabled());
    }

    #[test]
    fn stats_track_hits_misses_and_drops() {
        let cache = populated(&["a", "b"]);
        cache.get("a");
        cache.get("zzz");
        cache.drop_exact("b");
        let stats = cache.stats().snapshot();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.sets, 2);
        assert_eq!(stats.drops, 1);
    }
}
