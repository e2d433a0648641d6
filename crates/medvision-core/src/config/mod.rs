//! Configuration management for MedVision.
//!
//! Configuration is loaded from the platform config directory with sensible
//! defaults. Every section implements `Default`, so a missing file or a
//! partial file is always valid input. The loaded `Config` is read once at
//! startup and never changed afterwards.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for MedVision.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Gemini model endpoint settings
    pub gemini: GeminiConfig,

    /// Sampling parameters sent with every request
    pub generation: GenerationConfig,

    /// Content-safety threshold applied to every harm category
    pub safety: SafetyConfig,

    /// Upload limits
    pub limits: LimitsConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories:
    /// - macOS: ~/Library/Application Support/com.medvision.medvision/config.toml
    /// - Linux: ~/.config/medvision/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\medvision\config\config.toml
    ///
    /// Falls back to ~/.medvision/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "medvision", "medvision")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".medvision").join("config.toml")
            })
    }

    /// Maximum accepted upload size in bytes.
    pub fn max_upload_bytes(&self) -> u64 {
        self.limits.max_upload_mb.saturating_mul(1024 * 1024)
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::safety::HarmBlockThreshold;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.gemini.model, "gemini-1.5-pro-latest");
        assert_eq!(config.gemini.api_key, "${GOOGLE_API_KEY}");
        assert_eq!(config.limits.max_upload_mb, 20);
        assert_eq!(
            config.safety.threshold,
            HarmBlockThreshold::BlockMediumAndAbove
        );
    }

    #[test]
    fn test_config_to_toml() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[gemini]"));
        assert!(toml.contains("[generation]"));
        assert!(toml.contains("BLOCK_MEDIUM_AND_ABOVE"));
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[gemini]\nmodel = \"gemini-1.5-flash\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.gemini.model, "gemini-1.5-flash");
        assert_eq!(config.gemini.timeout_ms, 120_000);
        assert_eq!(config.generation.max_output_tokens, 8192);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[generation]\ntop_p = 1.5\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("top_p"));
    }

    #[test]
    fn test_load_rejects_unknown_threshold() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[safety]\nthreshold = \"BLOCK_EVERYTHING\"\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_max_upload_bytes() {
        let config = Config::default();
        assert_eq!(config.max_upload_bytes(), 20 * 1024 * 1024);
    }
}
