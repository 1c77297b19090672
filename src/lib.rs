//! `dbconn` - A small MySQL connection factory
//!
//! Opens one connection from host/user/password/database credentials and
//! hands it to the caller, or returns `None` after reporting why it could not.

#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    missing_docs,
    rust_2018_idioms
)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

/// Command line interface definitions
pub mod cli;
/// Command handlers for the CLI
pub mod commands;
/// Configuration management for dbconn
pub mod config;
pub mod connection;
/// Error types for CLI commands
pub mod error;

pub use config::{Config, DatabaseConfig};
pub use connection::{
    get_connection, get_connection_with, try_connect, Connection, ConnectionError,
    ConnectionParams,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
