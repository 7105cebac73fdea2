//! Cache key canonicalization
//!
//! A cache key is the request URL reduced to a canonical string: lowercase
//! scheme and host, default port removed, fragment stripped and query pairs
//! sorted by name.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::KeyConfig;
use crate::error::{self, Result};

/// Canonical request URL identifying a cache entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheKey(String);

impl CacheKey {
    /// Canonicalize `url` with the default key options
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidUrl` if `url` is not an absolute URL.
    pub fn parse(url: &str) -> Result<Self> {
        Self::parse_with(url, &KeyConfig::default())
    }

    /// Canonicalize `url` with explicit key options
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidUrl` if `url` is not an absolute URL.
    pub fn parse_with(url: &str, config: &KeyConfig) -> Result<Self> {
        canonicalize(url, config)
            .map(Self)
            .map_err(|e| error::invalid_url(url, e))
    }

    /// Canonicalize `url` if it parses, otherwise keep it verbatim.
    ///
    /// Used by explicit drop calls so keys that were never URLs (or were
    /// restored from an old snapshot) can still be addressed.
    pub fn lenient(url: &str) -> Self {
        Self::parse(url).unwrap_or_else(|_| Self::from_raw(url))
    }

    /// Wrap a string that is already a key, without canonicalizing it
    pub fn from_raw(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

fn canonicalize(url: &str, config: &KeyConfig) -> std::result::Result<String, url::ParseError> {
    let mut parsed = Url::parse(url.trim())?;

    if config.strip_fragment {
        parsed.set_fragment(None);
    }

    if config.sort_query {
        let mut pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
        if pairs.is_empty() {
            parsed.set_query(None);
        } else {
            // Stable: repeated names keep their relative order
            pairs.sort_by(|a, b| a.0.cmp(&b.0));
            parsed.query_pairs_mut().clear().extend_pairs(pairs.iter());
        }
    }

    Ok(parsed.into())
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CacheKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<CacheKey> for String {
    fn from(key: CacheKey) -> Self {
        key.0
    }
}
