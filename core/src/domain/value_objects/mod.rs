//! Value objects representing immutable domain concepts.

pub mod code_type;

pub use code_type::{CodeType, SESSION_KEY_PREFIX};
