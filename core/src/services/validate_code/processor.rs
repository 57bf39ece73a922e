//! Verification code lifecycle: generate, store, send, then validate and consume

use std::sync::Arc;

use crate::domain::{CodeType, ValidateCode};
use crate::errors::{CodeResult, SessionError, ValidateCodeError};

use super::context::RequestContext;
use super::generator::GeneratorRegistry;
use super::traits::{CodeSender, SessionStore};

/// Processor permanently bound to one code type
///
/// Holds at most one live code per type per session: `create` overwrites the
/// session slot, a successful `validate` or an expired code empties it, and a
/// mismatch leaves it untouched.
///
/// Validation is a read-check-remove sequence with no lock around it. Two
/// concurrent validations of the same still-valid code can both succeed.
pub struct CodeProcessor {
    kind: CodeType,
    generators: Arc<GeneratorRegistry>,
    sender: Arc<dyn CodeSender>,
}

impl CodeProcessor {
    /// Create a processor for `kind`
    ///
    /// # Arguments
    ///
    /// * `kind` - Code type this processor handles
    /// * `generators` - Shared generator dispatch table
    /// * `sender` - Delivery channel for this code type
    pub fn new(kind: CodeType, generators: Arc<GeneratorRegistry>, sender: Arc<dyn CodeSender>) -> Self {
        Self {
            kind,
            generators,
            sender,
        }
    }

    pub fn kind(&self) -> CodeType {
        self.kind
    }

    /// Session attribute key for this processor's code type
    pub fn session_key(&self) -> String {
        self.kind.session_key()
    }

    /// Generate a code, store it in the session and deliver it
    ///
    /// A send failure is returned as-is; the code already written to the
    /// session stays there.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Code stored and delivered
    /// * `Err(ValidateCodeError)` - Generation, storage or delivery failed
    pub async fn create(&self, ctx: &dyn RequestContext, session: &dyn SessionStore) -> CodeResult<()> {
        let code = self.generators.generate(self.kind, ctx)?;

        tracing::info!(
            kind = %self.kind,
            session_id = ctx.session_id(),
            expire_time = %code.expire_time,
            event = "code_generated",
            "Generated verification code"
        );

        self.save(ctx, session, &code).await?;

        if let Err(e) = self.sender.send(ctx, &code).await {
            tracing::error!(
                kind = %self.kind,
                session_id = ctx.session_id(),
                error = %e,
                event = "code_send_failed",
                "Failed to deliver verification code"
            );
            return Err(e);
        }

        tracing::debug!(
            kind = %self.kind,
            session_id = ctx.session_id(),
            event = "code_sent",
            "Verification code delivered"
        );
        Ok(())
    }

    /// Check the submitted code against the one stored in the session
    ///
    /// The stored code is removed on success and when it has expired. On a
    /// mismatch it is kept, so the client may retry until expiry.
    pub async fn validate(&self, ctx: &dyn RequestContext, session: &dyn SessionStore) -> CodeResult<()> {
        let kind = self.kind;
        let session_key = self.session_key();
        let session_id = ctx.session_id();

        let code_in_session = self.load(ctx, session, &session_key).await?;

        let code_in_request = ctx
            .parameter(kind.param_name_on_validate())
            .map_err(|source| {
                tracing::warn!(
                    kind = %kind,
                    session_id,
                    error = %source,
                    event = "code_parameter_unreadable",
                    "Failed to read submitted verification code"
                );
                ValidateCodeError::ParameterRead { kind, source }
            })?
            .unwrap_or_default();

        if code_in_request.trim().is_empty() {
            tracing::warn!(kind = %kind, session_id, event = "code_empty", "Submitted verification code is empty");
            return Err(ValidateCodeError::EmptySubmittedCode { kind });
        }

        let Some(code_in_session) = code_in_session else {
            tracing::warn!(kind = %kind, session_id, event = "code_missing", "No verification code in session");
            return Err(ValidateCodeError::NoStoredCode { kind });
        };

        if code_in_session.is_expired() {
            session.remove_attribute(session_id, &session_key).await?;
            tracing::warn!(
                kind = %kind,
                session_id,
                expire_time = %code_in_session.expire_time,
                event = "code_expired",
                "Verification code expired and was removed"
            );
            return Err(ValidateCodeError::CodeExpired { kind });
        }

        if !code_in_session.matches(&code_in_request) {
            tracing::warn!(kind = %kind, session_id, event = "code_mismatch", "Verification code mismatch");
            return Err(ValidateCodeError::CodeMismatch { kind });
        }

        session.remove_attribute(session_id, &session_key).await?;
        tracing::info!(kind = %kind, session_id, event = "code_verified", "Verification code accepted");
        Ok(())
    }

    async fn save(&self, ctx: &dyn RequestContext, session: &dyn SessionStore, code: &ValidateCode) -> CodeResult<()> {
        let session_key = self.session_key();
        let value = serde_json::to_value(code.for_session()).map_err(|e| SessionError::Corrupted {
            key: session_key.clone(),
            message: e.to_string(),
        })?;

        session
            .set_attribute(ctx.session_id(), &session_key, value)
            .await
            .map_err(|e| {
                tracing::error!(
                    kind = %self.kind,
                    session_id = ctx.session_id(),
                    error = %e,
                    event = "code_storage_failed",
                    "Failed to store verification code in session"
                );
                ValidateCodeError::from(e)
            })
    }

    async fn load(
        &self,
        ctx: &dyn RequestContext,
        session: &dyn SessionStore,
        session_key: &str,
    ) -> CodeResult<Option<ValidateCode>> {
        let Some(value) = session.get_attribute(ctx.session_id(), session_key).await? else {
            return Ok(None);
        };

        serde_json::from_value(value).map(Some).map_err(|e| {
            ValidateCodeError::Session(SessionError::Corrupted {
                key: session_key.to_string(),
                message: e.to_string(),
            })
        })
    }
}

impl std::fmt::Debug for CodeProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeProcessor")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
