//! Text input sources.
//!
//! Utterances may come from typed text or from a speech-to-text
//! capability; the engine only ever sees the final string. Capture
//! failures (denied microphone, unsupported platform) stay on this side
//! of the boundary and never reach the engine.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Input capture permission denied")]
    PermissionDenied,

    #[error("Input capture is not supported here")]
    Unsupported,

    #[error("Input source closed")]
    Closed,

    #[error("Input capture failed: {0}")]
    Capture(String),
}

/// Anything that can hand the engine one utterance of plain text.
#[async_trait]
pub trait InputSource: Send {
    async fn capture(&mut self) -> Result<String, InputError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct Queued(VecDeque<String>);

    #[async_trait]
    impl InputSource for Queued {
        async fn capture(&mut self) -> Result<String, InputError> {
            self.0.pop_front().ok_or(InputError::Closed)
        }
    }

    #[tokio::test]
    async fn test_source_drains_then_closes() {
        let mut source = Queued(VecDeque::from(["hello".to_string()]));
        assert_eq!(source.capture().await.unwrap(), "hello");
        assert!(matches!(source.capture().await, Err(InputError::Closed)));
    }
}
