//! Response cache modules
//!
//! - `core`: ResponseCache struct, lock handling and the on/off switch
//! - `operations`: get/set and the drop primitives
//!
//! Every operation goes through a single `RwLock`, so concurrent sessions
//! sharing a cache never lose updates.

pub mod core;
pub mod operations;

pub use self::core::ResponseCache;
