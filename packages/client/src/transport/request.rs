//! Outgoing request description handed to the transport

use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, Method};

/// A request as the transport sees it.
///
/// Headers and body are forwarded untouched; the engine only reads the method
/// and URL.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    /// URL exactly as the caller supplied it
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Body as UTF-8 text, lossily
    pub fn body_text(&self) -> Option<String> {
        self.body
            .as_ref()
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }
}
