//! Configuration management for the ATS checker

use crate::error::{AtsCheckerError, Result};
use crate::input::file_detector::MAX_FILE_BYTES;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub input: InputConfig,
    pub rewrite: RewriteConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    pub max_file_bytes: u64,
    pub enable_cache: bool,
}

/// Settings for the OpenAI-compatible chat-completions endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewriteConfig {
    pub endpoint: String,
    pub model: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    pub timeout_secs: u64,
    pub temperature: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputConfig {
                max_file_bytes: MAX_FILE_BYTES,
                enable_cache: true,
            },
            rewrite: RewriteConfig {
                endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
                model: "gpt-4o-mini".to_string(),
                api_key_env: "OPENAI_API_KEY".to_string(),
                timeout_secs: 120,
                temperature: 0.4,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load from the default location, creating it with defaults on first use.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                AtsCheckerError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            AtsCheckerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("ats-checker")
            .join("config.toml")
    }

    /// API key for the rewrite service, read from the configured variable.
    pub fn rewrite_api_key(&self) -> Option<String> {
        std::env::var(&self.rewrite.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_first_load_writes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_edited_values_survive_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.output.format = OutputFormat::Json;
        config.input.max_file_bytes = 1024;
        config.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.output.format, OutputFormat::Json);
        assert_eq!(reloaded.input.max_file_bytes, 1024);
    }

    #[test]
    fn test_malformed_file_is_configuration_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "input = 3").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, AtsCheckerError::Configuration(_)));
    }

    #[test]
    fn test_default_size_cap_matches_upload_limit() {
        assert_eq!(Config::default().input.max_file_bytes, 2 * 1024 * 1024);
    }
}
