//! Verb-aware request dispatch
//!
//! - `core`: the `Dispatcher` and its read/write state machines
//! - `builder`: fluent per-request builder (headers, body, invalidation override)
//! - `verbs`: one-call helpers for each verb plus explicit invalidation

pub mod builder;
pub mod core;
pub mod verbs;

pub use builder::{Mode, RequestBuilder};
pub use self::core::Dispatcher;
