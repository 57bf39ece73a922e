//! Business services containing the verification code lifecycle.

pub mod validate_code;

// Re-export commonly used types
pub use validate_code::{
    CodeGenerator, CodeProcessor, CodeRequest, CodeResponse, CodeSender, GeneratorRegistry,
    ProcessorRegistry, RequestContext, SessionStore,
};
