//! Configuration for the filter builder
//!
//! This module provides the client settings (endpoints, retry and timeout)
//! and logging defaults shared by the client crate and the command line.

use std::time::Duration;
use serde::{Serialize, Deserialize};

use crate::error::{CoreError, Result};

/// Settings for talking to the synopsis service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Full URL of the synopsis endpoint
    pub synopsis_url: String,

    /// Base URL of the account API (current user lookup)
    pub api_base: String,

    /// Total attempts per synopsis fetch, including the first
    pub max_attempts: u32,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            synopsis_url: "http://localhost:3001/synopsis".to_string(),
            api_base: "http://localhost:3001".to_string(),
            max_attempts: 3,
            request_timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    /// Per-request timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// URL of the current-user endpoint
    pub fn current_user_url(&self) -> String {
        format!("{}/current-user", self.api_base.trim_end_matches('/'))
    }

    /// Check the settings are usable
    pub fn validate(&self) -> Result<()> {
        if self.synopsis_url.trim().is_empty() {
            return Err(CoreError::ConfigError("synopsis_url must not be empty".to_string()));
        }
        if self.max_attempts == 0 {
            return Err(CoreError::ConfigError("max_attempts must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Top level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Synopsis service client settings
    pub client: ClientConfig,

    /// Log level
    pub log_level: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        FormConfig {
            client: ClientConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl FormConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: &str) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let config: FormConfig = serde_json::from_reader(file)?;
        config.client.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_file(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Create a development configuration
    pub fn development() -> Self {
        let mut config = Self::default();
        config.log_level = "debug".to_string();
        config
    }

    /// Create a testing configuration
    pub fn testing() -> Self {
        let mut config = Self::default();
        config.log_level = "debug".to_string();
        config.client.request_timeout_secs = 5;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();

        assert_eq!(config.client.max_attempts, 3);
        assert_eq!(config.client.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.log_level, "info");
        assert!(config.client.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        assert_eq!(FormConfig::development().log_level, "debug");

        let config = FormConfig::testing();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.client.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_current_user_url() {
        let mut client = ClientConfig::default();
        client.api_base = "https://api.example.com/".to_string();
        assert_eq!(client.current_user_url(), "https://api.example.com/current-user");
    }

    #[test]
    fn test_validate() {
        let mut client = ClientConfig::default();
        client.max_attempts = 0;
        assert!(matches!(client.validate(), Err(CoreError::ConfigError(_))));

        let mut client = ClientConfig::default();
        client.synopsis_url = "  ".to_string();
        assert!(client.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: FormConfig =
            serde_json::from_str(r#"{"client": {"synopsis_url": "https://data.example.com/synopsis"}}"#)
                .unwrap();

        assert_eq!(config.client.synopsis_url, "https://data.example.com/synopsis");
        assert_eq!(config.client.max_attempts, 3);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_file_io() {
        let mut config = FormConfig::default();
        config.client.max_attempts = 5;

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        config.to_file(path).unwrap();
        let loaded = FormConfig::from_file(path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_from_file_rejects_invalid_settings() {
        let mut config = FormConfig::default();
        config.client.max_attempts = 0;

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();
        config.to_file(path).unwrap();

        assert!(FormConfig::from_file(path).is_err());
    }
}
