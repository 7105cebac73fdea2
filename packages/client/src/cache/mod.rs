//! In-memory HTTP response cache
//!
//! This module provides the cache store the dispatcher reads and invalidates:
//! - Canonical URL cache keys (`cache_key`)
//! - A lock-guarded key/response map with get/set/drop primitives (`response_cache`)
//! - Whole-store snapshots to and from disk (`snapshot`)
//!
//! Entries never expire on their own; they live until dropped, cleared, or
//! the store goes away.

pub mod cache_key;
pub mod response_cache;
pub mod snapshot;

pub use cache_key::CacheKey;
pub use response_cache::ResponseCache;
pub use snapshot::SNAPSHOT_VERSION;
