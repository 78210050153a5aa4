//! Application configuration stored as `config.yaml` in the data directory.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "config.yaml";

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Serialize(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "IO error: {msg}"),
            ConfigError::Serialize(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the authentication API
    pub api_base_url: String,
    /// Timeout applied to each auth request
    pub request_timeout_secs: u64,
    /// How long the UI waits for input before redrawing
    pub tick_rate_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: 15,
            tick_rate_ms: 100,
        }
    }
}

impl AppConfig {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE_NAME)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    /// Load the config, falling back to defaults when the file is missing or unreadable.
    pub fn load_or_default(data_dir: &Path) -> Self {
        let path = Self::path(data_dir);
        if !path.exists() {
            return Self::default();
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config, using defaults");
                return Self::default();
            }
        };

        match serde_saphyr::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to parse config, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) -> Result<(), ConfigError> {
        let yaml = serde_saphyr::to_string(self)
            .map_err(|e| ConfigError::Serialize(format!("Failed to serialize config: {e}")))?;

        std::fs::create_dir_all(data_dir)
            .map_err(|e| ConfigError::Io(format!("Failed to create data directory: {e}")))?;
        std::fs::write(Self::path(data_dir), yaml)
            .map_err(|e| ConfigError::Io(format!("Failed to write config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(dir.path());
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            api_base_url: "https://gym.example.com".to_string(),
            request_timeout_secs: 5,
            tick_rate_ms: 250,
        };
        config.save(dir.path()).unwrap();

        assert_eq!(AppConfig::load_or_default(dir.path()), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            AppConfig::path(dir.path()),
            "api_base_url: http://10.0.0.2:5000\n",
        )
        .unwrap();

        let config = AppConfig::load_or_default(dir.path());
        assert_eq!(config.api_base_url, "http://10.0.0.2:5000");
        assert_eq!(config.tick_rate_ms, 100);
    }

    #[test]
    fn test_garbage_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(AppConfig::path(dir.path()), "[[[ not yaml").unwrap();
        assert_eq!(AppConfig::load_or_default(dir.path()), AppConfig::default());
    }

    #[test]
    fn test_tick_rate_never_zero() {
        let config = AppConfig {
            tick_rate_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(1));
    }
}
