//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Catalog storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Insert the demo menu when the catalog is empty at startup
    #[serde(default)]
    pub seed_demo_menu: bool,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("gofood").to_string_lossy().to_string())
        .unwrap_or_else(|| "./gofood_data".to_string())
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            seed_demo_menu: false,
        }
    }
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3333
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty` for development or `json` for production
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "gofood=info,tower_http=debug".to_string()
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

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("gofood").join("config.toml")),
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

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply `GOFOOD_*` overrides read through `lookup`
    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(data_dir) = lookup("GOFOOD_DATA_DIR") {
            self.storage.data_dir = data_dir;
        }

        if let Some(host) = lookup("GOFOOD_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("GOFOOD_PORT") {
            match port.parse() {
                Ok(p) => self.api.port = p,
                Err(_) => tracing::warn!("Ignoring invalid GOFOOD_PORT: {}", port),
            }
        }

        if let Some(level) = lookup("GOFOOD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("GOFOOD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
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
    format!(
        r#"# GoFood Configuration
#
# Environment variables override these settings:
# - GOFOOD_DATA_DIR
# - GOFOOD_HOST
# - GOFOOD_PORT
# - GOFOOD_LOG_LEVEL
# - GOFOOD_LOG_FORMAT

[storage]
# Directory holding db.json
data_dir = {data_dir:?}

# Insert the demo menu when the catalog is empty at startup
seed_demo_menu = false

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 3333

# Allowed CORS origins (empty = any origin)
cors_origins = []

[logging]
# Filter directives: trace, debug, info, warn, error (per target allowed)
level = "gofood=info,tower_http=debug"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#,
        data_dir = default_data_dir()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.api.port, 3333);
        assert_eq!(config.api.host, "0.0.0.0");
        assert!(config.api.cors_origins.is_empty());
        assert!(!config.storage.seed_demo_menu);
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_default_config_data_dir_is_usable() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.storage.data_dir, default_data_dir());
        assert!(!config.storage.data_dir.starts_with('~'));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse("[api]\nport = 8080\n").unwrap();
        assert_eq!(config.api.port, 8080);
        assert_eq!(config.api.host, "0.0.0.0");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("GOFOOD_DATA_DIR", "/tmp/foods"),
            ("GOFOOD_PORT", "4000"),
            ("GOFOOD_LOG_FORMAT", "JSON"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_env_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.storage.data_dir, "/tmp/foods");
        assert_eq!(config.api.port, 4000);
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_invalid_port_override_ignored() {
        let mut config = Config::default();
        config.apply_env_overrides(|key| (key == "GOFOOD_PORT").then(|| "http".to_string()));
        assert_eq!(config.api.port, 3333);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Path::new("/nonexistent/gofood.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
