//! Unit tests for generator and processor lookup

use chrono::Duration;
use std::sync::Arc;

use crate::domain::CodeType;
use crate::errors::ValidateCodeError;
use crate::services::validate_code::{CodeRequest, GeneratorRegistry, ProcessorRegistry};

use super::mocks::{scripted_processor, RecordingSender, ScriptedGenerator};

fn sms_only_registry() -> ProcessorRegistry {
    let sender = Arc::new(RecordingSender::new(false));
    ProcessorRegistry::builder()
        .register(scripted_processor(CodeType::Sms, &["4821"], Duration::minutes(5), sender))
        .build()
}

#[test]
fn test_find_by_kind() {
    let registry = sms_only_registry();

    let processor = registry.find_by_kind(CodeType::Sms).unwrap();
    assert_eq!(processor.kind(), CodeType::Sms);

    match registry.find_by_kind(CodeType::Image) {
        Err(ValidateCodeError::ProcessorNotFound { name }) => assert_eq!(name, "imageProcessor"),
        other => panic!("Expected ProcessorNotFound, got {:?}", other.map(|p| p.kind())),
    }
}

#[test]
fn test_find_by_name_is_case_insensitive() {
    let registry = sms_only_registry();

    for name in ["sms", "SMS", "Sms"] {
        let processor = registry.find_by_name(name).unwrap();
        assert_eq!(processor.kind(), CodeType::Sms);
    }
}

#[test]
fn test_find_by_unknown_name() {
    let registry = sms_only_registry();

    match registry.find_by_name("Email") {
        Err(ValidateCodeError::ProcessorNotFound { name }) => assert_eq!(name, "emailProcessor"),
        other => panic!("Expected ProcessorNotFound, got {:?}", other.map(|p| p.kind())),
    }
    assert!(matches!(
        registry.find_by_name("image"),
        Err(ValidateCodeError::ProcessorNotFound { .. })
    ));
}

#[test]
fn test_registry_listing() {
    let registry = sms_only_registry();
    assert_eq!(registry.kinds(), vec![CodeType::Sms]);
    assert_eq!(registry.len(), 1);
    assert!(!registry.is_empty());
    assert!(ProcessorRegistry::builder().build().is_empty());
}

#[test]
fn test_generator_registry_dispatch() {
    let generators = GeneratorRegistry::builder()
        .register(CodeType::Image, ScriptedGenerator::new(&["ABCD"], Duration::seconds(60)))
        .build();
    let request = CodeRequest::new("s1", "");

    assert!(generators.contains(CodeType::Image));
    assert_eq!(generators.kinds(), vec![CodeType::Image]);

    let code = generators.generate(CodeType::Image, &request).unwrap();
    assert_eq!(code.code, "ABCD");

    match generators.generate(CodeType::Sms, &request) {
        Err(ValidateCodeError::GeneratorNotFound { name }) => assert_eq!(name, "smsGenerator"),
        other => panic!("Expected GeneratorNotFound, got {:?}", other),
    }
}
