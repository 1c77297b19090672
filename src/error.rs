use thiserror::Error;

/// Custom error types for `dbconn` commands
#[derive(Error, Debug)]
pub enum DbConnError {
    /// Refused to overwrite an existing configuration file
    #[error("Configuration file already exists: {path} (use --force to overwrite)")]
    ConfigExists {
        /// The path that already exists
        path: String,
    },

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML serialization error wrapper
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Result type alias for `dbconn` operations
pub type Result<T> = std::result::Result<T, DbConnError>;
