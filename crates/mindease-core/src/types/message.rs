use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique message identifier
pub type MessageId = String;

/// Who authored a message in the conversation log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}

/// One immutable entry in the conversation log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a user-authored message
    pub fn user(content: impl Into<String>) -> Self {
        Self::with_id(format!("user_{}", Uuid::new_v4()), content, Sender::User)
    }

    /// Create a bot-authored message
    pub fn bot(content: impl Into<String>) -> Self {
        Self::with_id(format!("bot_{}", Uuid::new_v4()), content, Sender::Bot)
    }

    pub(crate) fn with_id(
        id: impl Into<MessageId>,
        content: impl Into<String>,
        sender: Sender,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            sender,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let msg = Message::user("Hello");
        assert_eq!(msg.sender, Sender::User);
        assert_eq!(msg.content, "Hello");
        assert!(msg.id.starts_with("user_"));
    }

    #[test]
    fn test_bot_message() {
        let msg = Message::bot("Hi there");
        assert_eq!(msg.sender, Sender::Bot);
        assert!(msg.id.starts_with("bot_"));
    }

    #[test]
    fn test_sender_serializes_lowercase() {
        let msg = Message::user("x");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"sender\":\"user\""));

        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sender, Sender::User);
    }
}
