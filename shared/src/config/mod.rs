//! Configuration module
//!
//! - `environment` - Environment detection and logging configuration
//! - `validate_code` - Per-type verification code settings

pub mod environment;
pub mod validate_code;

use serde::{Deserialize, Serialize};

pub use environment::{Environment, LogFormat, LoggingConfig};
pub use validate_code::{ImageCodeConfig, SmsCodeConfig, ValidateCodeConfig, MAX_EXPIRE_IN_SECONDS};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Verification code configuration
    #[serde(default)]
    pub validate_code: ValidateCodeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            logging: LoggingConfig::default(),
            validate_code: ValidateCodeConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            logging: LoggingConfig::from_env(environment),
            validate_code: ValidateCodeConfig::from_env(),
        }
    }
}
