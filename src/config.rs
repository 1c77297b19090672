use crate::connection::ConnectionParams;
use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "dbconn.toml";

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error occurred while reading config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error occurred
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Main configuration structure for dbconn
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Database connection configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Database connection configuration
///
/// Every field is optional in the file; missing ones take the same defaults
/// as [`ConnectionParams::default`].
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database host
    pub host: String,
    /// Database port
    pub port: u16,
    /// Database user
    pub user: String,
    /// Literal password, used when `password_env` is unset or missing
    pub password: String,
    /// Environment variable containing the password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_env: Option<String>,
    /// Database to select after connecting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        let params = ConnectionParams::default();
        Self {
            host: params.host,
            port: params.port,
            user: params.user,
            password: params.password,
            password_env: None,
            database: params.database,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}

impl DatabaseConfig {
    /// Resolve the password, preferring the `password_env` variable when it is set
    #[must_use]
    pub fn resolve_password(&self) -> String {
        let Some(password_env) = &self.password_env else {
            return self.password.clone();
        };

        debug!(
            "Reading password from environment variable: {}",
            password_env
        );
        match env::var(password_env) {
            Ok(password) => password,
            Err(VarError::NotPresent) => {
                warn!(
                    "Environment variable {} not found, falling back to configured password",
                    password_env
                );
                self.password.clone()
            }
            Err(VarError::NotUnicode(_)) => {
                warn!(
                    "Environment variable {} is not valid UTF-8, falling back to configured password",
                    password_env
                );
                self.password.clone()
            }
        }
    }

    /// Build connection parameters from this configuration
    #[must_use]
    pub fn params(&self) -> ConnectionParams {
        ConnectionParams {
            host: self.host.clone(),
            port: self.port,
            user: self.user.clone(),
            password: self.resolve_password(),
            database: self.database.clone(),
        }
    }
}
