use crate::config::Config;
use crate::error::{DbConnError, Result};
use std::fs;
use std::path::Path;

/// Handle the init command
#[allow(clippy::disallowed_methods)]
pub fn handle_init(output: &str, force: bool) -> Result<()> {
    let config_path = Path::new(output);
    if config_path.exists() && !force {
        return Err(DbConnError::ConfigExists {
            path: output.to_string(),
        });
    }

    let config_content = toml::to_string_pretty(&Config::default())?;
    fs::write(config_path, config_content)?;

    println!("Successfully initialized dbconn configuration");
    println!("Configuration saved to: {}", config_path.display());
    println!("Set `password_env` to read the password from an environment variable");

    Ok(())
}
