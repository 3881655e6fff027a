use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default file name looked up in the working directory.
pub const CONFIG_FILE: &str = "Liftlog.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Invalid(#[from] toml::de::Error),
}

/// Server settings read from `Liftlog.toml`, all optional on disk.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    name: String,
    host: String,
    port: u16,
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&config)?)
    }

    /// Loads `Liftlog.toml` from `dir` when present, otherwise defaults.
    pub fn load_or_default(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = dir.as_ref().join(CONFIG_FILE);
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub const fn port(&self) -> u16 {
        self.port
    }

    #[must_use]
    pub fn export(&self) -> String {
        // Serialization for config never fails, so `unwrap` is fine here.
        toml::to_string_pretty(&self).unwrap()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "LiftLog".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}
