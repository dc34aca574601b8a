pub mod classifier;
pub mod engine;
pub mod random;
pub mod replies;

pub use classifier::{classify, Category};
pub use engine::{ChatEngine, EngineConfig, EngineError};
pub use random::{EntropySource, Randomness, Scripted};
pub use replies::{pool, select_reply, welcome_message};
