//! Error types for the cache engine
//!
//! Transport failures are carried through unchanged inside [`Error::Transport`];
//! everything else (bad URLs, bad patterns, snapshot and log I/O) is raised by
//! the engine itself.

pub mod classification;
pub mod constructors;
pub mod types;

pub use constructors::*;
pub use types::{Error, Result, TransportError};
