//! Domain entities

pub mod validate_code;

pub use validate_code::ValidateCode;
