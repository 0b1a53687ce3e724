//! Configuration management for the registry client.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use crate::types::Environment;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default lifetime of cached search results (24 hours).
pub const DEFAULT_RESULT_TTL_SECS: u64 = 86_400;

/// Default lifetime of a cached session token (55 minutes).
pub const DEFAULT_SESSION_TTL_SECS: u64 = 3_300;

/// How long the remote service keeps a session token valid.
pub const REMOTE_SESSION_LIFETIME_SECS: u64 = 3_600;

/// Longest accepted lifetime of a cached search result (365 days).
pub const MAX_RESULT_TTL_SECS: u64 = 31_536_000;

/// Main client configuration.
///
/// This is loaded from `~/.config/regon/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Registry API key
    pub api_key: String,
    /// Remote environment
    pub environment: Environment,
    /// Caching settings
    pub cache: CacheConfig,
}

impl RegistryConfig {
    /// Build a configuration for the given credentials with default cache settings.
    #[must_use]
    pub fn new(api_key: impl Into<String>, environment: Environment) -> Self {
        Self {
            api_key: api_key.into(),
            environment,
            cache: CacheConfig::default(),
        }
    }

    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file.
    pub fn load_from(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `GUS_REGON_API_KEY`: API key
    /// - `GUS_ENVIRONMENT`: `test` or `production`
    /// - `GUS_CACHE_ENABLED`: Enable caching (true/false)
    /// - `GUS_CACHE_TTL`: Result cache TTL in seconds
    /// - `GUS_SESSION_TTL`: Session token cache TTL in seconds
    /// - `GUS_CACHE_DIR`: Directory for the file-backed cache
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;
        config.apply_env_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup function.
    ///
    /// Unparseable booleans and numbers are ignored; an unknown environment
    /// name is an error because silently talking to the wrong service is worse.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("GUS_REGON_API_KEY") {
            self.api_key = key;
            tracing::debug!("Override api_key from env");
        }

        if let Some(val) = lookup("GUS_ENVIRONMENT") {
            self.environment = val.parse()?;
            tracing::debug!("Override environment from env: {}", self.environment);
        }

        if let Some(val) = lookup("GUS_CACHE_ENABLED") {
            if let Ok(enabled) = val.parse() {
                self.cache.enabled = enabled;
                tracing::debug!("Override cache.enabled from env: {}", enabled);
            }
        }

        if let Some(val) = lookup("GUS_CACHE_TTL") {
            if let Ok(ttl) = val.parse() {
                self.cache.ttl_secs = ttl;
                tracing::debug!("Override cache.ttl_secs from env: {}", ttl);
            }
        }

        if let Some(val) = lookup("GUS_SESSION_TTL") {
            if let Ok(ttl) = val.parse() {
                self.cache.session_ttl_secs = ttl;
                tracing::debug!("Override cache.session_ttl_secs from env: {}", ttl);
            }
        }

        if let Some(dir) = lookup("GUS_CACHE_DIR") {
            tracing::debug!("Override cache.directory from env: {}", dir);
            self.cache.directory = Some(PathBuf::from(dir));
        }

        Ok(())
    }

    /// Check values that serde cannot constrain.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] for an empty API key, a result TTL
    /// of zero or above [`MAX_RESULT_TTL_SECS`], or a session TTL that does not
    /// expire before the remote session does.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api_key".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if self.cache.ttl_secs == 0 || self.cache.ttl_secs > MAX_RESULT_TTL_SECS {
            return Err(ConfigError::InvalidValue {
                field: "cache.ttl_secs".to_string(),
                reason: format!(
                    "must be between 1 and {MAX_RESULT_TTL_SECS} seconds, got {}",
                    self.cache.ttl_secs
                ),
            });
        }

        if self.cache.session_ttl_secs == 0
            || self.cache.session_ttl_secs >= REMOTE_SESSION_LIFETIME_SECS
        {
            return Err(ConfigError::InvalidValue {
                field: "cache.session_ttl_secs".to_string(),
                reason: format!(
                    "must be between 1 and {} seconds, got {}",
                    REMOTE_SESSION_LIFETIME_SECS - 1,
                    self.cache.session_ttl_secs
                ),
            });
        }

        Ok(())
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> ConfigResult<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration to an explicit file.
    pub fn save_to(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let config_dir = path.parent().ok_or_else(|| ConfigError::InvalidValue {
            field: "config_path".to_string(),
            reason: "no parent directory".to_string(),
        })?;

        fs::create_dir_all(config_dir)?;
        tracing::debug!("Saving config to {}", path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/regon/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs = ProjectDirs::from("pl", "regon", "regon").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Directory for the file-backed cache.
    ///
    /// Uses `cache.directory` when set, otherwise `~/.cache/regon`.
    pub fn cache_dir(&self) -> ConfigResult<PathBuf> {
        if let Some(dir) = &self.cache.directory {
            return Ok(dir.clone());
        }
        let dirs = ProjectDirs::from("pl", "regon", "regon").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.cache_dir().to_path_buf())
    }
}

/// Caching settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Whether session tokens and search results are cached
    pub enabled: bool,
    /// Search result TTL in seconds
    pub ttl_secs: u64,
    /// Session token TTL in seconds (must stay below the remote session lifetime)
    pub session_ttl_secs: u64,
    /// Directory for the file-backed cache
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl CacheConfig {
    /// Search result TTL.
    #[must_use]
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    /// Session token TTL.
    #[must_use]
    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_secs: DEFAULT_RESULT_TTL_SECS,
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            directory: None,
        }
    }
}
