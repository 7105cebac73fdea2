//! Invalidation policy
//!
//! Decides which cached keys go stale after a write:
//! - `directive`: what to drop (nothing, one key, a resource subtree, a regex)
//! - `matcher`: the key predicate a directive compiles to
//! - `policy`: the default directive for each verb

pub mod directive;
pub mod matcher;
pub mod policy;

pub use directive::Directive;
pub use matcher::Matcher;
pub use policy::default_directive;

use crate::cache::{CacheKey, ResponseCache};
use crate::error::Result;
use crate::logging::Logger;

/// Remove every key selected by `directive`; returns the removed keys, sorted.
pub fn apply(cache: &ResponseCache, directive: &Directive) -> Vec<CacheKey> {
    match directive {
        Directive::None => Vec::new(),
        Directive::Exact(key) => {
            if cache.drop_exact(key.as_str()) {
                vec![key.clone()]
            } else {
                Vec::new()
            }
        }
        _ => {
            let matcher = Matcher::from(directive);
            cache.drop_matching(|key| matcher.matches(key))
        }
    }
}

/// [`apply`], then write one CACHE DROP event per removed key.
///
/// # Errors
///
/// Returns `Error::Io` if the log sink rejects an event. The keys are
/// already gone by then.
pub fn apply_logged(
    cache: &ResponseCache,
    logger: &Logger,
    directive: &Directive,
) -> Result<Vec<CacheKey>> {
    let removed = apply(cache, directive);
    if !removed.is_empty() {
        tracing::debug!(
            target: "cachet::invalidation",
            directive = %directive,
            removed = removed.len(),
            "Invalidated cache entries"
        );
    }
    for key in &removed {
        logger.cache_drop(key)?;
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::HttpResponse;

    fn cache_with(keys: &[&str]) -> ResponseCache {
        let cache = ResponseCache::new();
        for key in keys {
            cache.set(CacheKey::from_raw(*key), HttpResponse::ok(key.to_string()));
        }
        cache
    }

    fn raw(keys: &[&str]) -> Vec<CacheKey> {
        keys.iter().map(|k| CacheKey::from_raw(*k)).collect()
    }

    #[test]
    fn exact_scope() {
        let cache = cache_with(&["A", "A/1", "B"]);
        let removed = apply(&cache, &Directive::Exact(CacheKey::from_raw("A")));
        assert_eq!(removed, raw(&["A"]));
        assert_eq!(cache.keys(), raw(&["A/1", "B"]));
    }

    #[test]
    fn prefix_scope_spares_siblings() {
        let cache = cache_with(&[
            "projects/",
            "projects/x/",
            "projects/x/users/",
            "projects_archive/",
        ]);
        let removed = apply(&cache, &Directive::prefix("projects/"));
        assert_eq!(
            removed,
            raw(&["projects/", "projects/x/", "projects/x/users/"])
        );
        assert_eq!(cache.keys(), raw(&["projects_archive/"]));
    }

    #[test]
    fn pattern_scope() {
        let cache = cache_with(&[
            "https://h.example/a/users/",
            "https://h.example/b/users/",
            "https://h.example/a/",
        ]);
        let removed = apply(&cache, &Directive::pattern("/users/$").unwrap());
        assert_eq!(
            removed,
            raw(&["https://h.example/a/users/", "https://h.example/b/users/"])
        );
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn none_drops_nothing_and_all_drops_everything() {
        let cache = cache_with(&["a", "b"]);
        assert!(apply(&cache, &Directive::None).is_empty());
        assert_eq!(cache.len(), 2);
        assert_eq!(apply(&cache, &Directive::All), raw(&["a", "b"]));
        assert!(cache.is_empty());
    }

    #[test]
    fn apply_logged_writes_one_drop_per_key() {
        let cache = cache_with(&["a/", "a/1/", "a/2/", "b/"]);
        let buffer = crate::logging::SharedBuffer::new();
        let logger = Logger::new();
        logger.start(buffer.clone());

        let removed = apply_logged(&cache, &logger, &Directive::prefix("a/")).unwrap();
        assert_eq!(removed.len(), 3);

        let events = crate::logging::parse_log(&buffer.contents()).unwrap();
        let dropped: Vec<_> = events.iter().filter_map(|e| e.url.clone()).collect();
        assert_eq!(dropped, vec!["a/", "a/1/", "a/2/"]);
        assert!(
            events
                .iter()
                .all(|e| e.category == crate::logging::Category::CacheDrop)
        );
    }
}
