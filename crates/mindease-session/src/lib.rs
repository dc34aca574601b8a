//! # MindEase Session
//!
//! Mock identity for the companion: login, signup, guest sessions, and
//! the sign-out eviction of every durable record. Identity is a local
//! mock; the only load-bearing bit is the guest flag the journal reads
//! to decide persistence.

pub mod error;
pub mod manager;
pub mod types;

pub use error::{SessionError, SessionResult};
pub use manager::SessionManager;
pub use types::User;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
