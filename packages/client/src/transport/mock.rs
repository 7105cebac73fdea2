//! Scripted in-process transport
//!
//! Serves canned responses keyed by method and URL and records every request
//! it receives, so callers can assert exactly how often the network would
//! have been hit.

use std::sync::{Mutex, PoisonError};

use hashbrown::HashMap;
use http::{Method, StatusCode};

use super::{HttpRequest, HttpResponse, Transport};
use crate::error::TransportError;

/// What to answer for a request with no scripted route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fallback {
    /// 404 with an empty body
    NotFound,
    /// 200 with body `"<METHOD> <url>"`
    Echo,
}

type Route = Result<HttpResponse, TransportError>;

/// Transport that answers from a route table
#[derive(Debug)]
pub struct MockTransport {
    routes: Mutex<HashMap<(Method, String), Route>>,
    calls: Mutex<Vec<HttpRequest>>,
    fallback: Fallback,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    /// Unscripted requests get `404 Not Found`
    #[must_use]
    pub fn new() -> Self {
        Self {
            routes: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            fallback: Fallback::NotFound,
        }
    }

    /// Unscripted requests get `200 OK` echoing the method and URL
    #[must_use]
    pub fn echo() -> Self {
        Self {
            fallback: Fallback::Echo,
            ..Self::new()
        }
    }

    /// Script a response for `method url`
    #[must_use]
    pub fn route(self, method: Method, url: &str, response: HttpResponse) -> Self {
        self.respond(method, url, response);
        self
    }

    /// Script a failure for `method url`
    #[must_use]
    pub fn fail(self, method: Method, url: &str, error: TransportError) -> Self {
        self.set_route(method, url, Err(error));
        self
    }

    /// Replace the scripted response for `method url`
    pub fn respond(&self, method: Method, url: &str, response: HttpResponse) {
        self.set_route(method, url, Ok(response));
    }

    fn set_route(&self, method: Method, url: &str, route: Route) {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((method, url.to_string()), route);
    }

    /// Total number of requests received
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Number of requests received for `method url`
    pub fn calls_to(&self, method: &Method, url: &str) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| r.method == *method && r.url == url)
            .count()
    }

    /// Every request received, in order
    pub fn calls(&self) -> Vec<HttpRequest> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        let scripted = self
            .routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(request.method.clone(), request.url.clone()))
            .cloned();

        match scripted {
            Some(Ok(response)) => Ok(if response.url.is_empty() {
                response.with_url(request.url.clone())
            } else {
                response
            }),
            Some(Err(error)) => Err(error),
            None => Ok(match self.fallback {
                Fallback::NotFound => HttpResponse::new(StatusCode::NOT_FOUND, ""),
                Fallback::Echo => HttpResponse::ok(format!("{} {}", request.method, request.url)),
            }
            .with_url(request.url.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_routes_win_over_fallback() {
        let transport = MockTransport::echo().route(
            Method::GET,
            "https://api.example.com/items/",
            HttpResponse::ok("[1,2,3]"),
        );

        let hit = transport
            .send(&HttpRequest::new(Method::GET, "https://api.example.com/items/"))
            .unwrap();
        assert_eq!(hit.text(), "[1,2,3]");
        assert_eq!(hit.url, "https://api.example.com/items/");

        let echoed = transport
            .send(&HttpRequest::new(Method::PUT, "https://api.example.com/items/"))
            .unwrap();
        assert_eq!(echoed.text(), "PUT https://api.example.com/items/");
        assert_eq!(transport.call_count(), 2);
        assert_eq!(
            transport.calls_to(&Method::GET, "https://api.example.com/items/"),
            1
        );
    }

    #[test]
    fn unscripted_requests_are_not_found_by_default() {
        let transport = MockTransport::new();
        let response = transport
            .send(&HttpRequest::new(Method::GET, "https://api.example.com/missing"))
            .unwrap();
        assert_eq!(response.status, 404);
    }

    #[test]
    fn scripted_failures_are_returned() {
        let transport = MockTransport::new().fail(
            Method::GET,
            "https://down.example.com/",
            TransportError::Connect("refused".to_string()),
        );
        let err = transport
            .send(&HttpRequest::new(Method::GET, "https://down.example.com/"))
            .unwrap_err();
        assert_eq!(err, TransportError::Connect("refused".to_string()));
    }
}
