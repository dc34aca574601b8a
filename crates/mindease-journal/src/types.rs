use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One immutable mood sample on the 1-5 scale
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoodEntry {
    pub id: String,
    pub mood: u8,
    #[serde(default)]
    pub notes: String,
    pub timestamp: DateTime<Utc>,
}

impl MoodEntry {
    pub(crate) fn new(mood: u8, notes: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: format!("mood_{}", Uuid::new_v4()),
            mood,
            notes: notes.into(),
            timestamp,
        }
    }

    /// Display emoji for the five-step scale
    pub fn emoji(&self) -> &'static str {
        match self.mood {
            1 => "😢",
            2 => "😔",
            3 => "😐",
            4 => "🙂",
            5 => "😊",
            _ => "😐",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_id_prefix() {
        let entry = MoodEntry::new(4, "walked outside", Utc::now());
        assert!(entry.id.starts_with("mood_"));
        assert_eq!(entry.mood, 4);
    }

    #[test]
    fn test_emoji_scale() {
        assert_eq!(MoodEntry::new(1, "", Utc::now()).emoji(), "😢");
        assert_eq!(MoodEntry::new(5, "", Utc::now()).emoji(), "😊");
    }

    #[test]
    fn test_serializes_with_iso_timestamp() {
        let entry = MoodEntry::new(3, "ok day", Utc::now());
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"mood\":3"));
        assert!(json.contains("\"timestamp\":\""));

        let back: MoodEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
