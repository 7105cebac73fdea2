//! Transport contract
//!
//! The engine never speaks HTTP itself. Anything that can perform a verb on a
//! URL and hand back a response (or a [`TransportError`]) plugs in through
//! [`Transport`].

use std::sync::Arc;

pub mod mock;
pub mod request;
pub mod response;

pub use mock::MockTransport;
pub use request::HttpRequest;
pub use response::HttpResponse;

use crate::error::TransportError;

/// Performs a single HTTP exchange.
///
/// Implementations must not cache or retry on their own account; the
/// dispatcher relies on every call reaching the network.
pub trait Transport: Send + Sync {
    /// Perform `request` and return the response, or fail with a transport error.
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request)
    }
}

/// Adapts a closure into a [`Transport`]
///
/// ```
/// use cachet_client::error::TransportError;
/// use cachet_client::transport::{FnTransport, HttpRequest, HttpResponse, Transport};
/// use http::{Method, StatusCode};
///
/// let transport = FnTransport(|req: &HttpRequest| -> Result<HttpResponse, TransportError> {
///     Ok(HttpResponse::new(StatusCode::OK, format!("{} {}", req.method, req.url)))
/// });
/// let response = transport.send(&HttpRequest::new(Method::GET, "https://example.com/")).unwrap();
/// assert_eq!(response.text(), "GET https://example.com/");
/// ```
pub struct FnTransport<F>(pub F);

impl<F> Transport for FnTransport<F>
where
    F: Fn(&HttpRequest) -> Result<HttpResponse, TransportError> + Send + Sync,
{
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (self.0)(request)
    }
}
