//! Log event model

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, SubsecRound, Utc};
use http::Method;
use serde::{Deserialize, Serialize};

use crate::cache::CacheKey;

/// Kind of a log event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Http,
    CacheSet,
    CacheHit,
    CacheDrop,
    Message,
    Error,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Http,
        Category::CacheSet,
        Category::CacheHit,
        Category::CacheDrop,
        Category::Message,
        Category::Error,
    ];

    /// Label used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Http => "HTTP",
            Category::CacheSet => "CACHE SET",
            Category::CacheHit => "CACHE HIT",
            Category::CacheDrop => "CACHE DROP",
            Category::Message => "MESSAGE",
            Category::Error => "ERROR",
        }
    }

    pub fn is_cache(&self) -> bool {
        matches!(
            self,
            Category::CacheSet | Category::CacheHit | Category::CacheDrop
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category `{s}`"))
    }
}

/// Fractional-second digits kept on event timestamps (microseconds)
pub const TIMESTAMP_DIGITS: u16 = 6;

/// One immutable entry of the event log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
    pub timestamp: DateTime<Utc>,
    pub category: Category,
    /// HTTP verb, for HTTP and CACHE HIT events
    pub verb: Option<String>,
    /// Request URL or cache key
    pub url: Option<String>,
    /// Elapsed seconds, for HTTP events
    pub elapsed: Option<f64>,
    pub message: String,
}

impl LogEvent {
    pub fn new(category: Category, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now().trunc_subsecs(TIMESTAMP_DIGITS),
            category,
            verb: None,
            url: None,
            elapsed: None,
            message: message.into(),
        }
    }

    /// A completed transport call; the message is the response status
    pub fn http(method: &Method, key: &CacheKey, elapsed: Duration, status: u16) -> Self {
        Self {
            verb: Some(method.as_str().to_string()),
            url: Some(key.to_string()),
            elapsed: Some(elapsed.as_secs_f64()),
            ..Self::new(Category::Http, status.to_string())
        }
    }

    pub fn cache_set(key: &CacheKey) -> Self {
        Self::new(Category::CacheSet, "").with_url(key.as_str())
    }

    /// A read served from the cache; carries the verb it answered
    pub fn cache_hit(method: &Method, key: &CacheKey) -> Self {
        Self {
            verb: Some(method.as_str().to_string()),
            ..Self::new(Category::CacheHit, "").with_url(key.as_str())
        }
    }

    pub fn cache_drop(key: &CacheKey) -> Self {
        Self::new(Category::CacheDrop, "").with_url(key.as_str())
    }

    pub fn message(text: impl Into<String>) -> Self {
        Self::new(Category::Message, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Category::Error, text)
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp.trunc_subsecs(TIMESTAMP_DIGITS);
        self
    }

    /// Label such as `HTTP GET` or `CACHE HIT`
    pub fn label(&self) -> String {
        match (&self.category, &self.verb) {
            (Category::Http, Some(verb)) => format!("HTTP {verb}"),
            (category, _) => category.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_parse_from_their_labels() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        assert!("CACHE MISS".parse::<Category>().is_err());
    }

    #[test]
    fn http_event_carries_verb_and_elapsed() {
        let key = CacheKey::from_raw("https://h.example/");
        let event = LogEvent::http(&Method::PATCH, &key, Duration::from_millis(250), 204);
        assert_eq!(event.label(), "HTTP PATCH");
        assert_eq!(event.elapsed, Some(0.25));
        assert_eq!(event.message, "204");
        assert_eq!(event.url.as_deref(), Some("https://h.example/"));
    }

    #[test]
    fn cache_hit_carries_verb_but_no_elapsed() {
        let key = CacheKey::from_raw("https://h.example/");
        let event = LogEvent::cache_hit(&Method::GET, &key);
        assert_eq!(event.label(), "CACHE HIT");
        assert_eq!(event.verb.as_deref(), Some("GET"));
        assert_eq!(event.elapsed, None);
    }

    #[test]
    fn timestamps_keep_microseconds() {
        let precise = DateTime::parse_from_rfc3339("2026-10-18T09:30:00.123456789Z")
            .unwrap()
            .with_timezone(&Utc);
        let event = LogEvent::message("tick").with_timestamp(precise);
        assert_eq!(event.timestamp.timestamp_subsec_nanos(), 123_456_000);
        assert_eq!(LogEvent::message("now").timestamp.timestamp_subsec_nanos() % 1_000, 0);
    }
}
