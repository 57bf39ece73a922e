//! SMS code delivery over an [`SmsGateway`]

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};
use vc_core::{CodeResult, CodeSender, CodeType, RequestContext, ValidateCode, ValidateCodeError};
use vc_shared::phone::{is_valid_mobile, mask_mobile, normalize_mobile};

use crate::sms::SmsGateway;

/// Request parameter carrying the destination number
pub const MOBILE_PARAMETER: &str = "mobile";

/// Sends the code to the `mobile` request parameter
pub struct SmsCodeSender {
    gateway: Arc<dyn SmsGateway>,
}

impl SmsCodeSender {
    pub fn new(gateway: Arc<dyn SmsGateway>) -> Self {
        Self { gateway }
    }

    fn read_mobile(ctx: &dyn RequestContext) -> CodeResult<String> {
        let mobile = ctx
            .parameter(MOBILE_PARAMETER)
            .map_err(|source| ValidateCodeError::ParameterRead {
                kind: CodeType::Sms,
                source,
            })?
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| ValidateCodeError::MissingParameter {
                name: MOBILE_PARAMETER.to_string(),
            })?;

        if !is_valid_mobile(&mobile) {
            return Err(ValidateCodeError::SendFailed {
                kind: CodeType::Sms,
                message: format!("invalid mobile number {}", mask_mobile(&mobile)),
            });
        }
        Ok(normalize_mobile(&mobile))
    }
}

#[async_trait]
impl CodeSender for SmsCodeSender {
    async fn send(&self, ctx: &dyn RequestContext, code: &ValidateCode) -> CodeResult<()> {
        let mobile = Self::read_mobile(ctx)?;

        match self
            .gateway
            .send_code(&mobile, &code.code, code.expire_in_seconds())
            .await
        {
            Ok(message_id) => {
                info!(
                    provider = self.gateway.provider_name(),
                    mobile = %mask_mobile(&mobile),
                    message_id = %message_id,
                    "SMS verification code sent"
                );
                Ok(())
            }
            Err(message) => {
                error!(
                    provider = self.gateway.provider_name(),
                    mobile = %mask_mobile(&mobile),
                    error = %message,
                    "SMS gateway rejected verification code"
                );
                Err(ValidateCodeError::SendFailed {
                    kind: CodeType::Sms,
                    message,
                })
            }
        }
    }
}

impl std::fmt::Debug for SmsCodeSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmsCodeSender")
            .field("provider", &self.gateway.provider_name())
            .finish()
    }
}
