//! Invalidation directives

use std::fmt;

use regex::Regex;

use crate::cache::CacheKey;
use crate::error::Result;

/// Which cached keys to remove after a write
#[derive(Debug, Clone, Default)]
pub enum Directive {
    /// Drop nothing
    #[default]
    None,
    /// Drop exactly this key
    Exact(CacheKey),
    /// Drop this key and every key hierarchically below it
    Prefix(CacheKey),
    /// Drop every key the regex matches anywhere (unanchored)
    Pattern(Regex),
    /// Drop every key
    All,
}

impl Directive {
    /// Exact directive for `url`, canonicalized when it parses as a URL
    pub fn exact(url: &str) -> Self {
        Self::Exact(CacheKey::lenient(url))
    }

    /// Prefix directive for `url`, canonicalized when it parses as a URL
    pub fn prefix(url: &str) -> Self {
        Self::Prefix(CacheKey::lenient(url))
    }

    /// Pattern directive
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPattern` if `pattern` is not a valid regex.
    pub fn pattern(pattern: &str) -> Result<Self> {
        Ok(Self::Pattern(Regex::new(pattern)?))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl PartialEq for Directive {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None) | (Self::All, Self::All) => true,
            (Self::Exact(a), Self::Exact(b)) | (Self::Prefix(a), Self::Prefix(b)) => a == b,
            (Self::Pattern(a), Self::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl Eq for Directive {}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Exact(key) => write!(f, "exact({key})"),
            Self::Prefix(key) => write!(f, "prefix({key})"),
            Self::Pattern(re) => write!(f, "pattern({})", re.as_str()),
            Self::All => f.write_str("all"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = Directive::pattern("projects/(unclosed").unwrap_err();
        assert!(matches!(err, crate::Error::InvalidPattern(_)));
    }

    #[test]
    fn constructors_canonicalize_urls() {
        assert_eq!(
            Directive::exact("HTTPS://H.example/a?b=1&a=2"),
            Directive::Exact(CacheKey::from_raw("https://h.example/a?a=2&b=1"))
        );
        assert_eq!(
            Directive::prefix("projects/"),
            Directive::Prefix(CacheKey::from_raw("projects/"))
        );
    }

    #[test]
    fn patterns_compare_by_source() {
        assert_eq!(
            Directive::pattern("a.*").unwrap(),
            Directive::pattern("a.*").unwrap()
        );
        assert_ne!(Directive::pattern("a.*").unwrap(), Directive::None);
    }
}
