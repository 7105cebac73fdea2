//! # Cachet engine
//!
//! Client-side HTTP response cache with verb-driven invalidation.
//!
//! ## Features
//!
//! - **Read-through caching** of GET (and opt-in POST) responses keyed by canonical URL
//! - **Verb-driven invalidation**: POST drops its URL, PUT/PATCH/DELETE drop the
//!   URL and everything below it, with per-call overrides
//! - **Structured event log** that can be read back and summarized
//! - **Snapshots** of the whole cache to and from disk
//!
//! The network is reached only through the [`Transport`] trait.
//!
//! ## Usage
//!
//! ```
//! use cachet_client::prelude::*;
//! use http::Method;
//!
//! let transport = MockTransport::new()
//!     .route(Method::GET, "https://api.example.com/projects/", HttpResponse::ok("[]"));
//! let dispatcher = Dispatcher::new(transport);
//!
//! let first = dispatcher.get("https://api.example.com/projects/")?;
//! let second = dispatcher.get("https://api.example.com/projects/")?;
//! assert_eq!(first, second);
//! assert_eq!(dispatcher.transport().call_count(), 1);
//! # Ok::<(), cachet_client::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod cache;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod invalidation;
pub mod logging;
pub mod telemetry;
pub mod transport;

pub mod prelude;

pub use crate::cache::{CacheKey, ResponseCache};
pub use crate::config::{ClientConfig, KeyConfig, LogTarget};
pub use crate::dispatcher::{Dispatcher, RequestBuilder};
pub use crate::error::{Error, Result, TransportError};
pub use crate::invalidation::Directive;
pub use crate::logging::{LogEvent, Logger};
pub use crate::transport::{HttpRequest, HttpResponse, MockTransport, Transport};
