//! Unit tests for verification code error types

use vc_shared::errors::IntoErrorResponse;
use vc_shared::ErrorResponse;

use crate::domain::CodeType;
use crate::errors::{ParameterError, SessionError, ValidateCodeError};

#[test]
fn test_messages_name_the_code_type() {
    let error = ValidateCodeError::CodeExpired { kind: CodeType::Sms };
    let message = error.to_string();
    assert!(message.contains("SMS verification code has expired"));
    assert!(message.contains("SMS验证码已过期"));

    let error = ValidateCodeError::CodeMismatch { kind: CodeType::Image };
    assert!(error.to_string().contains("IMAGE verification code does not match"));
}

#[test]
fn test_lookup_errors_name_the_component() {
    let error = ValidateCodeError::GeneratorNotFound {
        name: CodeType::Image.generator_name(),
    };
    assert!(error.to_string().contains("imageGenerator"));

    let error = ValidateCodeError::ProcessorNotFound {
        name: "emailProcessor".to_string(),
    };
    assert!(error.to_string().contains("验证码处理器emailProcessor不存在"));
}

#[test]
fn test_error_codes() {
    assert_eq!(
        ValidateCodeError::EmptySubmittedCode { kind: CodeType::Sms }.error_code(),
        "VERIFICATION_CODE_REQUIRED"
    );
    assert_eq!(
        ValidateCodeError::NoStoredCode { kind: CodeType::Sms }.error_code(),
        "VERIFICATION_CODE_NOT_FOUND"
    );
    assert_eq!(
        ValidateCodeError::UnknownCodeType { name: "x".into() }.error_code(),
        "VERIFICATION_CODE_TYPE_UNKNOWN"
    );
    assert_eq!(
        ValidateCodeError::Session(SessionError::Unavailable("down".into())).error_code(),
        "SESSION_ERROR"
    );
}

#[test]
fn test_client_error_classification() {
    assert!(ValidateCodeError::CodeMismatch { kind: CodeType::Sms }.is_client_error());
    assert!(ValidateCodeError::MissingParameter { name: "mobile".into() }.is_client_error());
    assert!(!ValidateCodeError::SendFailed {
        kind: CodeType::Sms,
        message: "gateway down".into(),
    }
    .is_client_error());
    assert!(!ValidateCodeError::GeneratorNotFound { name: "smsGenerator".into() }.is_client_error());

    let invalid_expiry = ValidateCodeError::InvalidExpiry {
        kind: CodeType::Image,
        seconds: i64::MAX,
    };
    assert!(!invalid_expiry.is_client_error());
    assert_eq!(invalid_expiry.error_code(), "INTERNAL_ERROR");
    assert_eq!(invalid_expiry.kind(), Some(CodeType::Image));
}

#[test]
fn test_parameter_read_keeps_source() {
    let error = ValidateCodeError::ParameterRead {
        kind: CodeType::Image,
        source: ParameterError::InvalidEncoding { name: "imageCode".into() },
    };
    let source = std::error::Error::source(&error).expect("source present");
    assert!(source.to_string().contains("imageCode"));
}

#[test]
fn test_error_response_conversion() {
    let error = ValidateCodeError::CodeExpired { kind: CodeType::Image };
    let response = error.to_error_response();
    assert_eq!(response.error, "VERIFICATION_CODE_EXPIRED");
    assert!(response.message.contains("验证码已过期"));
    let details = response.details.expect("type detail");
    assert_eq!(details.get("type"), Some(&serde_json::json!("IMAGE")));

    let response: ErrorResponse = ValidateCodeError::UnknownCodeType { name: "fax".into() }.into();
    assert!(response.details.is_none());
}
