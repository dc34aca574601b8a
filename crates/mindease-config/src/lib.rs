//! # MindEase Config
//!
//! Explicit configuration for the companion: storage root and record
//! keys, conversational pacing bounds, journal windows, and logging.

pub mod config;
pub mod manager;

pub use config::{
    ChatConfig, Config, ConfigError, ConfigResult, JournalConfig, LogLevel, LoggingConfig,
    StorageConfig, StorageKeys,
};
pub use manager::ConfigManager;

use std::path::PathBuf;

/// MindEase home directory (~/.mindease)
pub fn mindease_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".mindease"))
}

/// Default configuration file path
pub fn default_config_path() -> Option<PathBuf> {
    mindease_dir().map(|dir| dir.join("config.json"))
}

/// Default root for the file-backed store
pub fn default_data_dir() -> Option<PathBuf> {
    mindease_dir().map(|dir| dir.join("data"))
}

/// Default log file path
pub fn default_log_path() -> Option<PathBuf> {
    mindease_dir().map(|dir| dir.join("logs").join("mindease.log"))
}

/// Create the MindEase directory layout
pub async fn init_mindease_dirs() -> ConfigResult<()> {
    if let Some(root) = mindease_dir() {
        tokio::fs::create_dir_all(&root).await?;
        tokio::fs::create_dir_all(root.join("data")).await?;
        tokio::fs::create_dir_all(root.join("logs")).await?;
    }
    Ok(())
}

/// Expand a leading ~ to the user's home directory
pub fn expand_tilde(path: &str) -> Option<PathBuf> {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir().map(|home| home.join(rest))
    } else {
        Some(PathBuf::from(path))
    }
}
