//! Image captcha delivery

use async_trait::async_trait;
use serde_json::json;
use vc_core::{CodeResponse, CodeResult, CodeSender, CodeType, RequestContext, ValidateCode, ValidateCodeError};

/// Writes the captcha as a JSON body into the request's response
#[derive(Debug, Clone, Default)]
pub struct ImageCodeSender;

impl ImageCodeSender {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CodeSender for ImageCodeSender {
    async fn send(&self, ctx: &dyn RequestContext, code: &ValidateCode) -> CodeResult<()> {
        let image = code.image.as_deref().ok_or_else(|| ValidateCodeError::SendFailed {
            kind: CodeType::Image,
            message: "no rendered image attached to the code".to_string(),
        })?;

        ctx.write_response(CodeResponse::json(json!({
            "type": CodeType::Image,
            "image": image,
            "expireIn": code.expire_in_seconds(),
        })));

        tracing::debug!(session_id = %ctx.session_id(), "Image captcha written to response");
        Ok(())
    }
}
