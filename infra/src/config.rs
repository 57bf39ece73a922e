//! Configuration loading
//!
//! Reads `.env` files, then the environment-specific TOML file when one
//! exists, falling back to environment variables otherwise.

use std::path::Path;

use vc_shared::{AppConfig, Environment};

use crate::InfrastructureError;

/// Load the application configuration for the current environment
pub fn load_config() -> Result<AppConfig, InfrastructureError> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env();
    dotenvy::from_filename(environment.env_file()).ok();

    let path = Path::new(environment.config_file());
    if path.exists() {
        tracing::info!(environment = %environment, file = %path.display(), "Loading configuration file");
        return load_config_file(path);
    }

    tracing::debug!(environment = %environment, "No configuration file, reading environment variables");
    let config = AppConfig::from_env();
    config
        .validate_code
        .validate()
        .map_err(InfrastructureError::Config)?;
    Ok(config)
}

/// Load and validate configuration from an explicit file
pub fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, InfrastructureError> {
    let config: AppConfig = ::config::Config::builder()
        .add_source(::config::File::from(path.as_ref()))
        .build()?
        .try_deserialize()?;

    config
        .validate_code
        .validate()
        .map_err(InfrastructureError::Config)?;
    Ok(config)
}
