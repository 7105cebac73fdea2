//! Default invalidation by verb
//!
//! | Verb                 | Default directive |
//! |----------------------|-------------------|
//! | GET, HEAD, OPTIONS   | none              |
//! | POST                 | exact(url)        |
//! | PUT, PATCH, DELETE   | prefix(url)       |
//!
//! A cached POST never invalidates; the dispatcher stores its response instead.

use http::Method;

use super::directive::Directive;
use crate::cache::CacheKey;

/// Directive applied after a successful `method` request to `key`
pub fn default_directive(method: &Method, key: &CacheKey) -> Directive {
    if *method == Method::POST {
        Directive::Exact(key.clone())
    } else if *method == Method::PUT || *method == Method::PATCH || *method == Method::DELETE {
        Directive::Prefix(key.clone())
    } else {
        Directive::None
    }
}
