//! Fluent request builder
//!
//! ```
//! use cachet_client::dispatcher::Dispatcher;
//! use cachet_client::invalidation::Directive;
//! use cachet_client::transport::MockTransport;
//! use http::{Method, header};
//!
//! let dispatcher = Dispatcher::new(MockTransport::echo());
//! let response = dispatcher
//!     .request(Method::PUT, "https://api.example.com/projects/7/")
//!     .header(header::CONTENT_TYPE, header::HeaderValue::from_static("application/json"))
//!     .body(r#"{"name":"seven"}"#)
//!     .drop_with(Directive::None)
//!     .send()
//!     .unwrap();
//! assert!(response.is_success());
//! ```

use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, Method};

use super::core::Dispatcher;
use crate::error::Result;
use crate::invalidation::Directive;
use crate::transport::{HttpRequest, HttpResponse, Transport};

/// How a request interacts with the cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Serve from the cache, store on miss
    Read,
    /// Always send, store the response, never invalidate
    CachedWrite,
    /// Always send, then invalidate; `None` means the verb default
    Write(Option<Directive>),
}

impl Mode {
    /// Default mode for `method`: GET reads, everything else writes
    pub fn for_method(method: &Method) -> Self {
        if *method == Method::GET {
            Mode::Read
        } else {
            Mode::Write(None)
        }
    }
}

/// A request being assembled against a [`Dispatcher`]
#[derive(Debug)]
pub struct RequestBuilder<'a, T> {
    dispatcher: &'a Dispatcher<T>,
    request: HttpRequest,
    mode: Mode,
}

impl<'a, T: Transport> RequestBuilder<'a, T> {
    pub(crate) fn new(dispatcher: &'a Dispatcher<T>, method: Method, url: &str) -> Self {
        let mode = Mode::for_method(&method);
        Self {
            dispatcher,
            request: HttpRequest::new(method, url),
            mode,
        }
    }

    /// Append a header, forwarded untouched to the transport
    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.request.headers.append(name, value);
        self
    }

    /// Merge `headers` into the request
    #[must_use]
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.request.headers.extend(headers);
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.request.body = Some(body.into());
        self
    }

    /// Override the invalidation applied after a successful write.
    ///
    /// Turns a read into a write: a GET sent with an explicit directive
    /// bypasses the cache and invalidates instead.
    #[must_use]
    pub fn drop_with(mut self, directive: Directive) -> Self {
        self.mode = Mode::Write(Some(directive));
        self
    }

    /// Store the response like a GET instead of invalidating
    #[must_use]
    pub fn cached(mut self) -> Self {
        self.mode = Mode::CachedWrite;
        self
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Send the request through the dispatcher
    ///
    /// # Errors
    ///
    /// - `Error::InvalidUrl` if the URL cannot be turned into a cache key
    /// - `Error::Transport` with the transport's error, unchanged
    /// - `Error::Io` if the log sink rejects an event
    pub fn send(self) -> Result<HttpResponse> {
        self.dispatcher.execute(self.request, self.mode)
    }
}

impl<T: Transport> Dispatcher<T> {
    /// Start building a `method` request to `url`
    pub fn request(&self, method: Method, url: &str) -> RequestBuilder<'_, T> {
        RequestBuilder::new(self, method, url)
    }
}
