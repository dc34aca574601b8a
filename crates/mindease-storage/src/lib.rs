//! # MindEase Storage
//!
//! The persistence adapter shared by the mood journal and the session
//! layer: a small asynchronous key-value contract plus two adapters.
//!
//! - [`FileStore`]: durable, one JSON document per key under a root
//!   directory (the localStorage analog for registered users)
//! - [`MemoryStore`]: process-lifetime only, used for guest sessions
//!   and tests
//!
//! Values are opaque strings; the owning component serializes.

pub mod error;
pub mod file;
pub mod kv;
pub mod memory;

pub use error::{StorageError, StorageResult};
pub use file::FileStore;
pub use kv::KeyValueStore;
pub use memory::MemoryStore;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
