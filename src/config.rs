//! Application settings loaded from an optional TOML file and the environment.
//!
//! Settings resolve in three layers: built-in defaults, then an optional
//! `civilforge.toml` configuration file, then `CIVILFORGE_*` environment
//! variables. The server bind address (`HOST`/`PORT`) is read separately by
//! the server binary.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Error raised while loading settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },

    #[error("invalid api_prefix '{prefix}': must start with '/' and not be the bare root")]
    InvalidApiPrefix { prefix: String },
}

/// Application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Service display name
    #[serde(default = "default_app_name")]
    pub app_name: String,
    /// Environment identifier (dev/stage/prod)
    #[serde(default = "default_environment")]
    pub environment: String,
    /// Base API prefix; must start with `/` and not be `/` itself
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
    /// Semantic version reported by the backend
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_app_name() -> String {
    "CivilForge".to_string()
}

fn default_environment() -> String {
    "dev".to_string()
}

fn default_api_prefix() -> String {
    "/api".to_string()
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            environment: default_environment(),
            api_prefix: default_api_prefix(),
            version: default_version(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    ///
    /// Missing keys fall back to their defaults, so a partial file is fine.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;

        let settings: Settings = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            source: e,
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Resolve settings from the default file locations and the environment.
    ///
    /// Searches for `civilforge.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. Parent directory
    ///
    /// A missing file is not an error (defaults apply); a malformed file is,
    /// as is an `api_prefix` that the router cannot mount.
    /// Environment variables override whatever the file provided.
    ///
    /// # Environment Variables
    /// - `CIVILFORGE_APP_NAME`: Service display name
    /// - `CIVILFORGE_ENVIRONMENT`: Environment identifier (dev/stage/prod)
    /// - `CIVILFORGE_API_PREFIX`: Base API prefix (default: `/api`)
    /// - `CIVILFORGE_VERSION`: Version label reported by `/health`
    pub fn load() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("civilforge.toml"),
            PathBuf::from("config/civilforge.toml"),
            PathBuf::from("../civilforge.toml"),
        ];

        let mut settings = Settings::default();
        for path in &search_paths {
            if path.exists() {
                settings = Self::from_file(path)?;
                break;
            }
        }

        settings.apply_env_overrides();
        settings.validate()?;
        Ok(settings)
    }

    /// Reject an `api_prefix` the router cannot mount.
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.api_prefix.starts_with('/') || self.api_prefix == "/" {
            return Err(ConfigError::InvalidApiPrefix {
                prefix: self.api_prefix.clone(),
            });
        }
        Ok(())
    }

    /// Apply `CIVILFORGE_*` environment variable overrides in place.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(app_name) = env::var("CIVILFORGE_APP_NAME") {
            self.app_name = app_name;
        }
        if let Ok(environment) = env::var("CIVILFORGE_ENVIRONMENT") {
            self.environment = environment;
        }
        if let Ok(api_prefix) = env::var("CIVILFORGE_API_PREFIX") {
            self.api_prefix = api_prefix;
        }
        if let Ok(version) = env::var("CIVILFORGE_VERSION") {
            self.version = version;
        }
    }
}
