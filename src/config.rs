//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable overriding `storage.data_dir`
pub const ENV_DATA_DIR: &str = "MARKETING_BOT_DATA_DIR";
/// Environment variable overriding `generator.delay_ms`
pub const ENV_GENERATE_DELAY_MS: &str = "MARKETING_BOT_GENERATE_DELAY_MS";
/// Environment variable overriding `logging.level`
pub const ENV_LOG_LEVEL: &str = "MARKETING_BOT_LOG_LEVEL";
/// Environment variable overriding `logging.format`
pub const ENV_LOG_FORMAT: &str = "MARKETING_BOT_LOG_FORMAT";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the file backend keeps its data
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("marketing-bot").to_string_lossy().to_string())
        .unwrap_or_else(|| "./marketing_bot_data".to_string())
}

fn default_file_name() -> String {
    "store.json".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            file_name: default_file_name(),
        }
    }
}

impl StorageConfig {
    /// Full path of the store file, with a leading `~` expanded
    pub fn store_path(&self) -> PathBuf {
        let dir = match self.data_dir.strip_prefix("~/") {
            Some(rest) => dirs::home_dir()
                .map(|home| home.join(rest))
                .unwrap_or_else(|| PathBuf::from(&self.data_dir)),
            None => PathBuf::from(&self.data_dir),
        };
        dir.join(&self.file_name)
    }
}

/// Content generation settings
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Simulated processing time before a result is shown
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_delay_ms() -> u64 {
    2500
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            default_config_path(),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from `lookup`, keyed by environment variable name
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(data_dir) = lookup(ENV_DATA_DIR) {
            self.storage.data_dir = data_dir;
        }

        if let Some(delay) = lookup(ENV_GENERATE_DELAY_MS) {
            match delay.parse() {
                Ok(ms) => self.generator.delay_ms = ms,
                Err(_) => tracing::warn!("Ignoring invalid {}: {:?}", ENV_GENERATE_DELAY_MS, delay),
            }
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            self.logging.format = format;
        }
    }
}

/// `<config dir>/marketing-bot/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("marketing-bot").join("config.toml"))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Marketing Bot Configuration
#
# Environment variables override these settings:
# - MARKETING_BOT_DATA_DIR
# - MARKETING_BOT_GENERATE_DELAY_MS
# - MARKETING_BOT_LOG_LEVEL
# - MARKETING_BOT_LOG_FORMAT

[storage]
# Directory holding the store file
data_dir = "~/.local/share/marketing-bot"

# Store file name inside data_dir
file_name = "store.json"

[generator]
# Simulated generation time in the web UI (ms)
delay_ms = 2500

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.generator.delay_ms, 2500);
        assert_eq!(config.storage.file_name, "store.json");
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.storage.data_dir, "~/.local/share/marketing-bot");
        assert_eq!(config.generator.delay_ms, 2500);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = Config::parse("[generator]\ndelay_ms = 10\n").unwrap();
        assert_eq!(config.generator.delay_ms, 10);
        assert_eq!(config.storage.file_name, "store.json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_DATA_DIR, "/tmp/mb"),
            (ENV_GENERATE_DELAY_MS, "0"),
            (ENV_LOG_FORMAT, "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.storage.data_dir, "/tmp/mb");
        assert_eq!(config.generator.delay_ms, 0);
        assert!(config.logging.is_json());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.storage.store_path(), PathBuf::from("/tmp/mb/store.json"));
    }

    #[test]
    fn test_invalid_delay_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == ENV_GENERATE_DELAY_MS).then(|| "soon".to_string()));
        assert_eq!(config.generator.delay_ms, 2500);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.logging.level, "debug");

        std::fs::write(&path, "[logging\n").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
        assert!(matches!(
            Config::load(&dir.path().join("missing.toml")),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_home_expansion() {
        let storage = StorageConfig {
            data_dir: "~/mb".to_string(),
            file_name: "s.json".to_string(),
        };
        if let Some(home) = dirs::home_dir() {
            assert_eq!(storage.store_path(), home.join("mb").join("s.json"));
        }
    }
}
