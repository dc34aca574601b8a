//! # MindEase Core
//!
//! Chat domain types and the rule-based conversational engine: keyword
//! classification, pre-authored reply pools, and a welcome-seeded
//! conversation log with a composing state machine.

pub mod chat;
pub mod greeting;
pub mod input;
pub mod types;

pub use chat::{classify, Category, ChatEngine, EngineConfig, EngineError, EntropySource, Randomness};
pub use input::{InputError, InputSource};
pub use types::{Message, MessageId, Sender};

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
