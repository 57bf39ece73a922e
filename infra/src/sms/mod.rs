//! SMS delivery channel
//!
//! The SMS sender hands codes to an [`SmsGateway`]. Concrete providers live
//! outside this crate; a mock gateway and a failover wrapper are provided.

use async_trait::async_trait;

pub mod failover_gateway;
pub mod mock_gateway;

pub use failover_gateway::FailoverSmsGateway;
pub use mock_gateway::MockSmsGateway;

/// SMS provider capable of delivering a verification code
#[async_trait]
pub trait SmsGateway: Send + Sync {
    /// Send a text message, returning the provider's message id
    async fn send_sms(&self, mobile: &str, message: &str) -> Result<String, String>;

    /// Send a verification code using the standard message text
    async fn send_code(&self, mobile: &str, code: &str, expire_in_seconds: i64) -> Result<String, String> {
        let message = format_code_message(code, expire_in_seconds);
        self.send_sms(mobile, &message).await
    }

    /// Provider name used in logs
    fn provider_name(&self) -> &str;

    /// Health check; defaults to available
    async fn is_available(&self) -> bool {
        true
    }
}

/// Text of the SMS carrying a verification code
pub fn format_code_message(code: &str, expire_in_seconds: i64) -> String {
    let minutes = (expire_in_seconds.max(0) + 59) / 60;
    format!(
        "Your verification code is {}. It expires in {} minute(s). | 您的验证码是{}，{}分钟内有效。",
        code, minutes, code, minutes
    )
}
