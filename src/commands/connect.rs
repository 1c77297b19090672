//! Connection check command

use crate::config::{Config, DatabaseConfig};
use crate::connection::get_connection_with;
use anyhow::Result;
use tracing::{debug, info, warn};

/// Values given on the command line, each overriding the configuration
#[derive(Debug, Default, Clone)]
pub struct ConnectOverrides {
    /// Configuration file to start from
    pub config: Option<String>,
    /// Server host
    pub host: Option<String>,
    /// Server port
    pub port: Option<u16>,
    /// User to authenticate as
    pub user: Option<String>,
    /// Environment variable holding the password
    pub password_env: Option<String>,
    /// Database to select
    pub database: Option<String>,
}

/// Resolve the effective database configuration for a connect command
pub fn resolve_config(overrides: &ConnectOverrides) -> Result<DatabaseConfig> {
    let mut database = match &overrides.config {
        Some(path) => {
            debug!("Loading configuration from {}", path);
            Config::from_file(path)
                .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", path, e))?
                .database
        }
        None => DatabaseConfig::default(),
    };

    if let Some(host) = &overrides.host {
        database.host.clone_from(host);
    }
    if let Some(port) = overrides.port {
        database.port = port;
    }
    if let Some(user) = &overrides.user {
        database.user.clone_from(user);
    }
    if overrides.password_env.is_some() {
        database.password_env.clone_from(&overrides.password_env);
    }
    if overrides.database.is_some() {
        database.database.clone_from(&overrides.database);
    }

    Ok(database)
}

/// Handle the connect command
pub async fn handle_connect(overrides: &ConnectOverrides) -> Result<()> {
    let config = resolve_config(overrides)?;
    let params = config.params();
    info!("Checking connection to {}", params.address());

    let Some(conn) = get_connection_with(&params).await else {
        return Err(anyhow::anyhow!(
            "Could not connect to {} as {}",
            params.address(),
            params.user
        ));
    };

    if let Err(e) = conn.close().await {
        warn!("Connection opened but did not close cleanly: {}", e);
    }

    Ok(())
}
