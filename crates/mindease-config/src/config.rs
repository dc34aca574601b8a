use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub version: String,
    pub storage: StorageConfig,
    pub keys: StorageKeys,
    pub chat: ChatConfig,
    pub journal: JournalConfig,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            storage: StorageConfig::default(),
            keys: StorageKeys::default(),
            chat: ChatConfig::default(),
            journal: JournalConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Read a value by dotted key
    pub fn get_value(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            ["version"] => Some(self.version.clone()),
            ["storage", "path"] => self.storage.path.clone(),
            ["keys", "user"] => Some(self.keys.user.clone()),
            ["keys", "mood_log"] => Some(self.keys.mood_log.clone()),
            ["keys", "chat_history"] => Some(self.keys.chat_history.clone()),
            ["chat", "reply_delay_min_ms"] => Some(self.chat.reply_delay_min_ms.to_string()),
            ["chat", "reply_delay_max_ms"] => Some(self.chat.reply_delay_max_ms.to_string()),
            ["journal", "default_window_days"] => {
                Some(self.journal.default_window_days.to_string())
            }
            ["journal", "streak_horizon_days"] => {
                Some(self.journal.streak_horizon_days.to_string())
            }
            ["logging", "level"] => Some(self.logging.level.to_string()),
            ["logging", "file"] => self.logging.file.clone(),
            _ => None,
        }
    }

    /// Write a value by dotted key
    pub fn set_value(&mut self, key: &str, value: &str) -> ConfigResult<()> {
        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            ["storage", "path"] => {
                self.storage.path = Some(value.to_string());
            }
            ["keys", "user"] => {
                self.keys.user = value.to_string();
            }
            ["keys", "mood_log"] => {
                self.keys.mood_log = value.to_string();
            }
            ["keys", "chat_history"] => {
                self.keys.chat_history = value.to_string();
            }
            ["chat", "reply_delay_min_ms"] => {
                self.chat.reply_delay_min_ms = value.parse().map_err(|_| {
                    ConfigError::Validation(format!("Invalid number: {}", value))
                })?;
            }
            ["chat", "reply_delay_max_ms"] => {
                self.chat.reply_delay_max_ms = value.parse().map_err(|_| {
                    ConfigError::Validation(format!("Invalid number: {}", value))
                })?;
            }
            ["journal", "default_window_days"] => {
                self.journal.default_window_days = value.parse().map_err(|_| {
                    ConfigError::Validation(format!("Invalid number: {}", value))
                })?;
            }
            ["journal", "streak_horizon_days"] => {
                self.journal.streak_horizon_days = value.parse().map_err(|_| {
                    ConfigError::Validation(format!("Invalid number: {}", value))
                })?;
            }
            ["logging", "level"] => {
                self.logging.level = value.parse()?;
            }
            ["logging", "file"] => {
                self.logging.file = Some(value.to_string());
            }
            _ => return Err(ConfigError::KeyNotFound(key.to_string())),
        }
        Ok(())
    }
}

/// Storage location for the file-backed adapter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    /// Root directory; None falls back to ~/.mindease/data
    pub path: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: Some("~/.mindease/data".to_string()),
        }
    }
}

/// Names of the durable records. Explicit configuration rather than
/// hard-coded globals; the defaults match the historical record names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageKeys {
    pub user: String,
    pub mood_log: String,
    pub chat_history: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            user: "mindease_user".to_string(),
            mood_log: "mindease_mood_logs".to_string(),
            chat_history: "mindease_chat_history".to_string(),
        }
    }
}

/// Conversational pacing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatConfig {
    /// Composing delay lower bound (inclusive)
    pub reply_delay_min_ms: u64,
    /// Composing delay upper bound (exclusive)
    pub reply_delay_max_ms: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_min_ms: 1000,
            reply_delay_max_ms: 3000,
        }
    }
}

/// Journal statistics windows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JournalConfig {
    pub default_window_days: u32,
    pub streak_horizon_days: u32,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            default_window_days: 7,
            streak_horizon_days: 30,
        }
    }
}

/// Log level
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::Info
    }
}

impl std::str::FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::Validation(format!("Invalid log level: {}", s))),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub file: Option<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.keys.mood_log, "mindease_mood_logs");
        assert_eq!(config.chat.reply_delay_min_ms, 1000);
        assert_eq!(config.chat.reply_delay_max_ms, 3000);
        assert_eq!(config.journal.default_window_days, 7);
    }

    #[test]
    fn test_get_set_value() {
        let mut config = Config::default();
        assert_eq!(
            config.get_value("keys.mood_log").as_deref(),
            Some("mindease_mood_logs")
        );

        config.set_value("chat.reply_delay_max_ms", "5000").unwrap();
        assert_eq!(config.chat.reply_delay_max_ms, 5000);

        assert!(config.set_value("nope.nothing", "x").is_err());
        assert!(config.set_value("chat.reply_delay_min_ms", "abc").is_err());
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("noisy".parse::<LogLevel>().is_err());
    }
}
