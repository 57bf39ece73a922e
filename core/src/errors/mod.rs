//! Verification code error types.
//!
//! Every failure is request-scoped and returned to the transport layer
//! unchanged. Messages carry English and Chinese text separated by ` | `.

use thiserror::Error;
use vc_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};

use crate::domain::CodeType;

/// Failure to bind a request parameter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    #[error("parameter {name} is not valid UTF-8 after decoding")]
    InvalidEncoding { name: String },
}

/// Failure of the session store collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("session store unavailable: {0}")]
    Unavailable(String),

    #[error("session attribute {key} is unreadable: {message}")]
    Corrupted { key: String, message: String },
}

/// Errors raised by code creation, delivery and validation
#[derive(Error, Debug)]
pub enum ValidateCodeError {
    #[error("Unknown verification code type: {name} | 未知的验证码类型: {name}")]
    UnknownCodeType { name: String },

    #[error("Verification code generator {name} does not exist | 验证码生成器{name}不存在")]
    GeneratorNotFound { name: String },

    #[error("Verification code processor {name} does not exist | 验证码处理器{name}不存在")]
    ProcessorNotFound { name: String },

    #[error("Failed to read the {kind} verification code value | 获取{kind}验证码的值失败")]
    ParameterRead {
        kind: CodeType,
        #[source]
        source: ParameterError,
    },

    #[error("{kind} verification code must not be empty | {kind}验证码的值不能为空")]
    EmptySubmittedCode { kind: CodeType },

    #[error("{kind} verification code does not exist | {kind}验证码不存在")]
    NoStoredCode { kind: CodeType },

    #[error("{kind} verification code has expired | {kind}验证码已过期")]
    CodeExpired { kind: CodeType },

    #[error("{kind} verification code does not match | {kind}验证码不匹配")]
    CodeMismatch { kind: CodeType },

    #[error("Required parameter {name} is missing | 缺少必需参数{name}")]
    MissingParameter { name: String },

    #[error("Failed to send {kind} verification code: {message} | {kind}验证码发送失败")]
    SendFailed { kind: CodeType, message: String },

    #[error("Invalid {kind} verification code lifetime of {seconds} seconds | {kind}验证码有效期{seconds}秒无效")]
    InvalidExpiry { kind: CodeType, seconds: i64 },

    #[error("Session store failure: {0} | 会话存储失败")]
    Session(#[from] SessionError),
}

impl ValidateCodeError {
    /// Stable error code for clients
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCodeType { .. } | Self::ProcessorNotFound { .. } => {
                error_codes::CODE_TYPE_UNKNOWN
            }
            Self::GeneratorNotFound { .. } | Self::InvalidExpiry { .. } => error_codes::INTERNAL_ERROR,
            Self::ParameterRead { .. } | Self::MissingParameter { .. } => error_codes::BAD_REQUEST,
            Self::EmptySubmittedCode { .. } => error_codes::CODE_REQUIRED,
            Self::NoStoredCode { .. } => error_codes::CODE_NOT_FOUND,
            Self::CodeExpired { .. } => error_codes::CODE_EXPIRED,
            Self::CodeMismatch { .. } => error_codes::CODE_INVALID,
            Self::SendFailed { .. } => error_codes::SEND_FAILED,
            Self::Session(_) => error_codes::SESSION_ERROR,
        }
    }

    /// Code type the failure refers to, when there is one
    pub fn kind(&self) -> Option<CodeType> {
        match self {
            Self::ParameterRead { kind, .. }
            | Self::EmptySubmittedCode { kind }
            | Self::NoStoredCode { kind }
            | Self::CodeExpired { kind }
            | Self::CodeMismatch { kind }
            | Self::InvalidExpiry { kind, .. }
            | Self::SendFailed { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Whether the failure was caused by the client's input rather than a collaborator
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            Self::GeneratorNotFound { .. }
                | Self::InvalidExpiry { .. }
                | Self::SendFailed { .. }
                | Self::Session(_)
        )
    }
}

impl IntoErrorResponse for ValidateCodeError {
    fn to_error_response(&self) -> ErrorResponse {
        let response = ErrorResponse::new(self.error_code(), self.to_string());
        match self.kind() {
            Some(kind) => response.add_detail("type", kind),
            None => response,
        }
    }
}

impl From<ValidateCodeError> for ErrorResponse {
    fn from(error: ValidateCodeError) -> Self {
        error.to_error_response()
    }
}

pub type CodeResult<T> = Result<T, ValidateCodeError>;

#[cfg(test)]
mod tests;
