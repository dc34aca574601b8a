//! Keyword classification of user utterances.
//!
//! This is deliberately not natural-language understanding: an utterance
//! lands in the first category whose trigger words it contains, checked
//! case-insensitively in a fixed priority order.

/// Classification bucket for an utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Sad,
    Anxious,
    Thoughts,
    Day,
    Exercise,
    Default,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Sad => write!(f, "sad"),
            Category::Anxious => write!(f, "anxious"),
            Category::Thoughts => write!(f, "thoughts"),
            Category::Day => write!(f, "day"),
            Category::Exercise => write!(f, "exercise"),
            Category::Default => write!(f, "default"),
        }
    }
}

/// Trigger words in priority order; the first matching category wins.
const PRIORITY: &[(Category, &[&str])] = &[
    (Category::Sad, &["sad", "down", "depressed", "unhappy"]),
    (Category::Anxious, &["anxious", "worried", "nervous", "stress"]),
    (Category::Thoughts, &["thought", "thinking", "mind"]),
    (Category::Day, &["day", "today", "happened"]),
    (Category::Exercise, &["exercise", "technique", "cbt", "help me"]),
];

/// Map an utterance to its response category. Never fails; anything
/// without a trigger word falls through to [`Category::Default`].
pub fn classify(utterance: &str) -> Category {
    let lower = utterance.to_lowercase();
    for (category, triggers) in PRIORITY {
        if triggers.iter().any(|trigger| lower.contains(trigger)) {
            return *category;
        }
    }
    Category::Default
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_words_match() {
        assert_eq!(classify("I feel so depressed lately"), Category::Sad);
        assert_eq!(classify("work has me stressed"), Category::Anxious);
        assert_eq!(classify("I can't stop thinking"), Category::Thoughts);
        assert_eq!(classify("guess what happened"), Category::Day);
        assert_eq!(classify("can you help me?"), Category::Exercise);
    }

    #[test]
    fn test_priority_order() {
        // "sad" is checked before "anxious" and "day"
        assert_eq!(classify("I feel sad about my anxious day"), Category::Sad);
        // "anxious" beats "thought"
        assert_eq!(classify("anxious thoughts"), Category::Anxious);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("I am SAD"), Category::Sad);
        assert_eq!(classify("Worried about tomorrow"), Category::Anxious);
    }

    #[test]
    fn test_fallback_to_default() {
        assert_eq!(classify(""), Category::Default);
        assert_eq!(classify("xyz"), Category::Default);
    }

    #[test]
    fn test_substring_matching() {
        // trigger words also match inside larger words
        assert_eq!(classify("it saddens me"), Category::Sad);
        assert_eq!(classify("remind me later"), Category::Thoughts);
    }
}
