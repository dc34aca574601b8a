use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::config::{Config, ConfigError, ConfigResult};

/// JSON-file-backed configuration manager
#[derive(Clone)]
pub struct ConfigManager {
    path: PathBuf,
    config: Arc<RwLock<Config>>,
}

impl ConfigManager {
    /// Load configuration, writing the defaults when the file is absent
    pub async fn load(path: &Path) -> ConfigResult<Self> {
        let config = if path.exists() {
            info!("Loading config from {:?}", path);
            let content = tokio::fs::read_to_string(path).await?;
            let config: Config = serde_json::from_str(&content)?;
            Self::validate(&config)?;
            config
        } else {
            info!("Config file not found, creating default config at {:?}", path);
            let default_config = Config::default();
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            let content = serde_json::to_string_pretty(&default_config)?;
            tokio::fs::write(path, &content).await?;
            default_config
        };

        Ok(Self {
            path: path.to_path_buf(),
            config: Arc::new(RwLock::new(config)),
        })
    }

    /// Load from the default location
    pub async fn load_default() -> ConfigResult<Self> {
        let config_path = Self::default_config_path()?;
        Self::load(&config_path).await
    }

    /// Default config path (~/.mindease/config.json)
    pub fn default_config_path() -> ConfigResult<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ConfigError::InvalidPath("Could not find home directory".to_string()))?;
        Ok(home.join(".mindease").join("config.json"))
    }

    /// Build a manager around an existing config (tests)
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(config)),
        }
    }

    /// Shared handle to the configuration
    pub fn get(&self) -> Arc<RwLock<Config>> {
        Arc::clone(&self.config)
    }

    /// Persist the current configuration
    pub async fn save(&self) -> ConfigResult<()> {
        let config = self.config.read().await;
        let content = serde_json::to_string_pretty(&*config)?;
        drop(config);

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, content).await?;
        info!("Config saved to {:?}", self.path);
        Ok(())
    }

    /// Apply a mutation and persist the result
    pub async fn update<F>(&self, f: F) -> ConfigResult<()>
    where
        F: FnOnce(&mut Config),
    {
        let mut config = self.config.write().await;
        f(&mut config);
        Self::validate(&config)?;
        drop(config);
        self.save().await
    }

    /// Reject configurations the engine or journal cannot run with
    pub fn validate(config: &Config) -> ConfigResult<()> {
        if config.chat.reply_delay_max_ms < config.chat.reply_delay_min_ms {
            return Err(ConfigError::Validation(
                "chat.reply_delay_max_ms must be >= chat.reply_delay_min_ms".to_string(),
            ));
        }

        if config.journal.streak_horizon_days == 0 {
            return Err(ConfigError::Validation(
                "journal.streak_horizon_days must be greater than 0".to_string(),
            ));
        }

        for (name, key) in [
            ("keys.user", &config.keys.user),
            ("keys.mood_log", &config.keys.mood_log),
            ("keys.chat_history", &config.keys.chat_history),
        ] {
            if key.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{} must not be empty", name)));
            }
        }

        Ok(())
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        let manager = ConfigManager::load(&config_path).await.unwrap();
        let config = manager.get().read().await.clone();

        assert!(config_path.exists());
        assert_eq!(config.keys.user, "mindease_user");
        assert_eq!(config.chat.reply_delay_min_ms, 1000);
    }

    #[tokio::test]
    async fn test_update_persists() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        let manager = ConfigManager::load(&config_path).await.unwrap();
        manager
            .update(|config| config.journal.default_window_days = 14)
            .await
            .unwrap();

        let reloaded = ConfigManager::load(&config_path).await.unwrap();
        let config = reloaded.get().read().await.clone();
        assert_eq!(config.journal.default_window_days, 14);
    }

    #[tokio::test]
    async fn test_validation() {
        let mut config = Config::default();
        config.chat.reply_delay_max_ms = 500;
        assert!(ConfigManager::validate(&config).is_err());

        config.chat.reply_delay_max_ms = 3000;
        assert!(ConfigManager::validate(&config).is_ok());

        config.keys.mood_log = String::new();
        assert!(ConfigManager::validate(&config).is_err());
    }
}
