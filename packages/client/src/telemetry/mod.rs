//! Telemetry and statistics for the cache engine

pub mod cache_stats;

pub use cache_stats::{CacheStats, CacheStatsSnapshot};
