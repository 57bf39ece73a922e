//! # Infrastructure Layer
//!
//! Concrete collaborators for the verification code engine in `vc_core`.
//!
//! ## Modules
//!
//! - **session**: In-memory session attribute store
//! - **generators**: Numeric SMS codes and SVG image captchas
//! - **senders**: Image JSON response and SMS delivery
//! - **sms**: SMS gateway abstraction with mock and failover gateways
//! - **config**: Configuration file and environment loading
//! - **telemetry**: Tracing subscriber initialisation
//! - **bootstrap**: Wires everything into a `ProcessorRegistry`

pub mod bootstrap;
pub mod config;
pub mod generators;
pub mod senders;
pub mod session;
pub mod sms;
pub mod telemetry;

pub use bootstrap::bootstrap;
pub use crate::config::{load_config, load_config_file};
pub use generators::{ImageCodeGenerator, SmsCodeGenerator};
pub use senders::{ImageCodeSender, SmsCodeSender};
pub use session::MemorySessionStore;
pub use sms::{FailoverSmsGateway, MockSmsGateway, SmsGateway};
pub use telemetry::init_tracing;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Invalid configuration values
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be read or parsed
    #[error("Configuration source error: {0}")]
    ConfigSource(#[from] ::config::ConfigError),

    /// Tracing subscriber could not be installed
    #[error("Telemetry error: {0}")]
    Telemetry(String),
}
