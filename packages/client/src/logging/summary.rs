//! Aggregations over a recorded log

use std::collections::BTreeMap;

use super::event::{Category, LogEvent};

/// Request counts by verb plus timing statistics
///
/// A request answered from the cache counts like one that reached the
/// transport; only the latter carry timings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestLogSummary {
    /// HTTP and CACHE HIT events per verb
    pub counts: BTreeMap<String, usize>,
    /// `None` when no event carried an elapsed time
    pub timing: Option<TimingSummary>,
}

impl RequestLogSummary {
    /// Requests logged for `verb`
    pub fn count(&self, verb: &str) -> usize {
        self.counts.get(verb).copied().unwrap_or(0)
    }

    /// Requests logged for all verbs
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Elapsed-time statistics in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSummary {
    pub count: usize,
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

/// Cache activity counts
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CacheLogSummary {
    pub hits: usize,
    pub sets: usize,
    pub drops: usize,
    /// `hits / (hits + sets)`; `None` when no cached read was logged
    pub hit_rate: Option<f64>,
}

/// Summarize request activity in `events`. Never fails; an empty log gives
/// empty counts and no timing.
pub fn request_log_summary(events: &[LogEvent]) -> RequestLogSummary {
    let mut counts = BTreeMap::new();
    let requests = events
        .iter()
        .filter(|e| matches!(e.category, Category::Http | Category::CacheHit));
    for event in requests {
        let verb = event.verb.clone().unwrap_or_else(|| "UNKNOWN".to_string());
        *counts.entry(verb).or_insert(0) += 1;
    }

    let timings: Vec<f64> = events.iter().filter_map(|e| e.elapsed).collect();
    let timing = if timings.is_empty() {
        None
    } else {
        let min = timings.iter().copied().fold(f64::INFINITY, f64::min);
        let max = timings.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        #[allow(clippy::cast_precision_loss)]
        let mean = timings.iter().sum::<f64>() / timings.len() as f64;
        Some(TimingSummary {
            count: timings.len(),
            min,
            mean,
            max,
        })
    };

    RequestLogSummary { counts, timing }
}

/// Summarize cache activity in `events`
pub fn cache_log_summary(events: &[LogEvent]) -> CacheLogSummary {
    let count = |category: Category| events.iter().filter(|e| e.category == category).count();
    let hits = count(Category::CacheHit);
    let sets = count(Category::CacheSet);
    let drops = count(Category::CacheDrop);

    #[allow(clippy::cast_precision_loss)]
    let hit_rate = (hits + sets > 0).then(|| hits as f64 / (hits + sets) as f64);

    CacheLogSummary {
        hits,
        sets,
        drops,
        hit_rate,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use http::Method;

    use super::*;
    use crate::cache::CacheKey;

    fn http(method: Method, millis: u64) -> LogEvent {
        LogEvent::http(
            &method,
            &CacheKey::from_raw("https://h.example/"),
            Duration::from_millis(millis),
            200,
        )
    }

    #[test]
    fn empty_log_summarizes_to_nothing() {
        let summary = request_log_summary(&[]);
        assert!(summary.counts.is_empty());
        assert_eq!(summary.total(), 0);
        assert_eq!(summary.count("GET"), 0);
        assert_eq!(summary.timing, None);

        let cache = cache_log_summary(&[]);
        assert_eq!(cache, CacheLogSummary::default());
    }

    #[test]
    fn counts_by_verb_and_timing() {
        let key = CacheKey::from_raw("https://h.example/");
        let events = vec![
            http(Method::GET, 100),
            http(Method::GET, 300),
            LogEvent::cache_set(&key),
            http(Method::PUT, 200),
            LogEvent::message("not a request"),
        ];
        let summary = request_log_summary(&events);
        assert_eq!(summary.count("GET"), 2);
        assert_eq!(summary.count("PUT"), 1);
        assert_eq!(summary.total(), 3);

        let timing = summary.timing.unwrap();
        assert_eq!(timing.count, 3);
        assert!((timing.min - 0.1).abs() < 1e-9);
        assert!((timing.max - 0.3).abs() < 1e-9);
        assert!((timing.mean - 0.2).abs() < 1e-9);
    }

    #[test]
    fn cache_hits_count_toward_their_verb_without_timing() {
        let key = CacheKey::from_raw("https://h.example/");
        let events = vec![
            http(Method::GET, 100),
            LogEvent::cache_set(&key),
            LogEvent::cache_hit(&Method::GET, &key),
            LogEvent::cache_hit(&Method::GET, &key),
            http(Method::POST, 300),
            LogEvent::cache_drop(&key),
        ];
        let summary = request_log_summary(&events);
        assert_eq!(summary.count("GET"), 3);
        assert_eq!(summary.count("POST"), 1);
        assert_eq!(summary.total(), 4);
        assert_eq!(summary.timing.map(|t| t.count), Some(2));
    }

    #[test]
    fn cache_summary_counts_and_rate() {
        let key = CacheKey::from_raw("https://h.example/");
        let events = vec![
            LogEvent::cache_set(&key),
            LogEvent::cache_hit(&Method::GET, &key),
            LogEvent::cache_hit(&Method::GET, &key),
            LogEvent::cache_hit(&Method::GET, &key),
            LogEvent::cache_drop(&key),
        ];
        let summary = cache_log_summary(&events);
        assert_eq!(summary.hits, 3);
        assert_eq!(summary.sets, 1);
        assert_eq!(summary.drops, 1);
        assert_eq!(summary.hit_rate, Some(0.75));
    }
}
