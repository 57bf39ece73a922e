//! Collaborator traits: session storage, code generation and delivery

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::ValidateCode;
use crate::errors::{CodeResult, SessionError};

use super::context::RequestContext;

/// Per-session key/value storage
///
/// Attributes are scoped by session id; different sessions never share
/// entries. Implementations do not need to expire entries on their own.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store a value, replacing any previous value under the same key
    async fn set_attribute(&self, session_id: &str, key: &str, value: Value) -> Result<(), SessionError>;

    /// Read a value, `None` when absent
    async fn get_attribute(&self, session_id: &str, key: &str) -> Result<Option<Value>, SessionError>;

    /// Remove a value; removing an absent key is not an error
    async fn remove_attribute(&self, session_id: &str, key: &str) -> Result<(), SessionError>;
}

/// Produces a fresh code for one code type
///
/// The generator decides the code's expiry.
pub trait CodeGenerator: Send + Sync {
    fn generate(&self, ctx: &dyn RequestContext) -> CodeResult<ValidateCode>;
}

/// Delivers a generated code to the client
#[async_trait]
pub trait CodeSender: Send + Sync {
    /// Deliver the code; a failure aborts code creation
    async fn send(&self, ctx: &dyn RequestContext, code: &ValidateCode) -> CodeResult<()>;
}
