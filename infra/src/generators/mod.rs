//! Code generators for each supported code type

use chrono::Duration;
use vc_core::{CodeResult, CodeType, ValidateCode, ValidateCodeError};

pub mod image_code;
pub mod sms_code;

pub use image_code::ImageCodeGenerator;
pub use sms_code::SmsCodeGenerator;

/// Code expiring `expire_in` seconds from now
fn expiring_code(kind: CodeType, code: String, expire_in: i64) -> CodeResult<ValidateCode> {
    Duration::try_seconds(expire_in)
        .and_then(|lifetime| ValidateCode::try_new(code, lifetime))
        .ok_or(ValidateCodeError::InvalidExpiry {
            kind,
            seconds: expire_in,
        })
}
