//! Shared configuration and common types for the verification code engine
//!
//! This crate provides functionality used across the workspace:
//! - Configuration types (environment, logging, verification codes)
//! - Error response structures and error codes
//! - Phone number utilities used when delivering SMS codes

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment, ImageCodeConfig, LogFormat, LoggingConfig, SmsCodeConfig,
    ValidateCodeConfig,
};
pub use errors::{error_codes, ErrorResponse, IntoErrorResponse};
pub use utils::phone;
