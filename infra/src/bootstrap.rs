//! Wiring of generators, senders and processors

use std::sync::Arc;

use tracing::info;
use vc_core::{CodeProcessor, CodeType, GeneratorRegistry, ProcessorRegistry};
use vc_shared::ValidateCodeConfig;

use crate::generators::{ImageCodeGenerator, SmsCodeGenerator};
use crate::senders::{ImageCodeSender, SmsCodeSender};
use crate::sms::SmsGateway;
use crate::InfrastructureError;

/// Build the processor registry for every code type
///
/// The returned registry is immutable; share it behind an `Arc`.
pub fn bootstrap(
    config: &ValidateCodeConfig,
    sms_gateway: Arc<dyn SmsGateway>,
) -> Result<ProcessorRegistry, InfrastructureError> {
    config.validate().map_err(InfrastructureError::Config)?;

    let generators = Arc::new(
        GeneratorRegistry::builder()
            .register(CodeType::Sms, SmsCodeGenerator::new(config.sms.clone()))
            .register(CodeType::Image, ImageCodeGenerator::new(config.image.clone()))
            .build(),
    );

    let provider = sms_gateway.provider_name().to_string();
    let registry = ProcessorRegistry::builder()
        .register(CodeProcessor::new(
            CodeType::Sms,
            generators.clone(),
            Arc::new(SmsCodeSender::new(sms_gateway)),
        ))
        .register(CodeProcessor::new(
            CodeType::Image,
            generators,
            Arc::new(ImageCodeSender::new()),
        ))
        .build();

    info!(
        kinds = ?registry.kinds(),
        sms_provider = %provider,
        "Verification code processors ready"
    );

    Ok(registry)
}
