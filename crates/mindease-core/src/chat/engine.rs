//! The conversation engine.
//!
//! State machine: `Idle -> Composing -> Idle`. A non-empty utterance
//! appends a user message and starts the composing interval; the bot
//! reply lands when the interval elapses. At most one reply is in
//! flight per engine; `reset` cancels the pending reply so nothing is
//! appended to a cleared log.

use std::time::Duration;

use parking_lot::Mutex;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::chat::classifier::classify;
use crate::chat::random::{EntropySource, Randomness};
use crate::chat::replies::{select_reply, welcome_message};
use crate::types::Message;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Utterance is empty")]
    EmptyUtterance,

    #[error("A reply is already being composed")]
    ReplyInFlight,

    #[error("Cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// Pacing bounds for the artificial composing delay, in milliseconds.
/// The reply lands after a uniform interval in `[delay_min_ms, delay_max_ms)`.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub delay_min_ms: u64,
    pub delay_max_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            delay_min_ms: 1000,
            delay_max_ms: 3000,
        }
    }
}

struct EngineState {
    log: Vec<Message>,
    composing: bool,
    /// Replaced on every reset; pending replies hold a clone.
    cancel: CancellationToken,
}

/// Rule-based conversational engine over a welcome-seeded message log.
pub struct ChatEngine {
    state: Mutex<EngineState>,
    rng: Mutex<Box<dyn Randomness>>,
    config: EngineConfig,
}

impl ChatEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_randomness(config, EntropySource::new())
    }

    /// Build an engine with an explicit randomness source (tests).
    pub fn with_randomness(config: EngineConfig, rng: impl Randomness + 'static) -> Self {
        Self {
            state: Mutex::new(EngineState {
                log: vec![welcome_message()],
                composing: false,
                cancel: CancellationToken::new(),
            }),
            rng: Mutex::new(Box::new(rng)),
            config,
        }
    }

    /// Snapshot of the conversation log, insertion order.
    pub fn messages(&self) -> Vec<Message> {
        self.state.lock().log.clone()
    }

    /// True while a reply is being composed; callers gate submissions
    /// and show the typing indicator on this.
    pub fn is_composing(&self) -> bool {
        self.state.lock().composing
    }

    /// Append the user's utterance, compose for a randomized interval,
    /// then append and return the bot reply.
    pub async fn converse(&self, utterance: &str) -> Result<Message> {
        let trimmed = utterance.trim();
        if trimmed.is_empty() {
            return Err(EngineError::EmptyUtterance);
        }

        let cancel = {
            let mut state = self.state.lock();
            if state.composing {
                return Err(EngineError::ReplyInFlight);
            }
            state.log.push(Message::user(trimmed));
            state.composing = true;
            state.cancel.clone()
        };

        let category = classify(trimmed);
        let (reply, delay_ms) = {
            let mut rng = self.rng.lock();
            let reply = select_reply(category, rng.as_mut());
            let delay_ms = rng.delay_ms(self.config.delay_min_ms, self.config.delay_max_ms);
            (reply, delay_ms)
        };
        debug!(%category, delay_ms, "composing reply");

        tokio::select! {
            _ = cancel.cancelled() => {
                // reset() already restored the log and cleared the flag
                return Err(EngineError::Cancelled);
            }
            _ = tokio::time::sleep(Duration::from_millis(delay_ms)) => {}
        }

        let mut state = self.state.lock();
        if cancel.is_cancelled() {
            // reset raced the end of the delay
            return Err(EngineError::Cancelled);
        }
        let message = Message::bot(reply);
        state.log.push(message.clone());
        state.composing = false;
        Ok(message)
    }

    /// Drop the conversation and start over from the welcome message.
    /// A pending reply is cancelled and will never be appended.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        state.cancel.cancel();
        state.cancel = CancellationToken::new();
        state.log = vec![welcome_message()];
        state.composing = false;
        debug!("conversation reset");
    }
}

impl Default for ChatEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::classifier::Category;
    use crate::chat::random::Scripted;
    use crate::chat::replies::pool;
    use crate::types::Sender;
    use std::sync::Arc;

    fn scripted_engine(picks: &[usize], delays: &[u64]) -> ChatEngine {
        ChatEngine::with_randomness(
            EngineConfig::default(),
            Scripted::new(picks.iter().copied(), delays.iter().copied()),
        )
    }

    #[test]
    fn test_log_is_seeded_with_welcome() {
        let engine = ChatEngine::default();
        let messages = engine.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id, "welcome");
        assert_eq!(messages[0].sender, Sender::Bot);
        assert!(!engine.is_composing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_converse_appends_user_and_bot() {
        let engine = scripted_engine(&[1], &[1500]);

        let reply = engine.converse("I feel anxious").await.unwrap();
        assert_eq!(reply.sender, Sender::Bot);
        assert_eq!(reply.content, pool(Category::Anxious)[1]);

        let messages = engine.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].sender, Sender::User);
        assert_eq!(messages[1].content, "I feel anxious");
        assert_eq!(messages[2].id, reply.id);
        assert!(!engine.is_composing());
    }

    #[tokio::test]
    async fn test_empty_utterance_rejected() {
        let engine = ChatEngine::default();
        assert!(matches!(
            engine.converse("   ").await,
            Err(EngineError::EmptyUtterance)
        ));
        assert_eq!(engine.messages().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_converse_rejected_while_composing() {
        let engine = Arc::new(scripted_engine(&[0, 0], &[2000, 2000]));

        let pending = {
            let engine = Arc::clone(&engine);
            tokio::spawn(async move { engine.converse("hello there").await })
        };
        tokio::task::yield_now().await;
        assert!(engine.is_composing());

        // only one user message may land until the first reply resolves
        assert!(matches!(
            engine.converse("second message").await,
            Err(EngineError::ReplyInFlight)
        ));
        assert_eq!(engine.messages().len(), 2);

        pending.await.unwrap().unwrap();
        assert_eq!(engine.messages().len(), 3);
        assert!(!engine.is_composing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_cancels_pending_reply() {
        let engine = Arc::new(scripted_engine(&[0], &[2500]));

        let pending = {
            let engine = Arc::clone(&engine);
            tokio::spawn(async move { engine.converse("tell me about my day").await })
        };
        tokio::task::yield_now().await;
        assert!(engine.is_composing());

        engine.reset();
        assert!(matches!(
            pending.await.unwrap(),
            Err(EngineError::Cancelled)
        ));

        // no orphaned bot append after the reset
        let messages = engine.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id, "welcome");
        assert!(!engine.is_composing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_engine_usable_after_reset() {
        let engine = scripted_engine(&[0, 2], &[1000, 1000]);

        engine.converse("hi").await.unwrap();
        engine.reset();
        let reply = engine.converse("I feel sad").await.unwrap();
        assert_eq!(reply.content, pool(Category::Sad)[2]);
        assert_eq!(engine.messages().len(), 3);
    }
}
