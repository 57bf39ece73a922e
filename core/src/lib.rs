//! # Verification Code Core
//!
//! Domain types and the lifecycle engine for short-lived verification codes
//! bound to a client session: type-based dispatch to generators and senders,
//! session-scoped storage, single-use consumption and expiry checks.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
