//! Verification code lifecycle engine
//!
//! This module provides:
//! - Request context and response slot abstraction
//! - Session store, generator and sender traits
//! - Generator dispatch by code type
//! - Per-type processors that create, store, send, validate and consume codes
//! - Processor registry resolved by code type or name

mod context;
mod generator;
mod processor;
mod registry;
mod traits;

#[cfg(test)]
mod tests;

pub use context::{CodeRequest, CodeResponse, RequestContext};
pub use generator::{GeneratorRegistry, GeneratorRegistryBuilder};
pub use processor::CodeProcessor;
pub use registry::{ProcessorRegistry, ProcessorRegistryBuilder};
pub use traits::{CodeGenerator, CodeSender, SessionStore};
