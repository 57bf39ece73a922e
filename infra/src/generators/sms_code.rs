//! Numeric SMS code generator

use rand::Rng;
use vc_core::{CodeGenerator, CodeResult, CodeType, RequestContext, ValidateCode};
use vc_shared::SmsCodeConfig;

use super::expiring_code;

/// Generates random numeric codes of a configured length
#[derive(Debug, Clone)]
pub struct SmsCodeGenerator {
    config: SmsCodeConfig,
}

impl SmsCodeGenerator {
    pub fn new(config: SmsCodeConfig) -> Self {
        Self { config }
    }

    fn random_digits(length: usize) -> String {
        let mut rng = rand::thread_rng();
        (0..length)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect()
    }
}

impl CodeGenerator for SmsCodeGenerator {
    fn generate(&self, _ctx: &dyn RequestContext) -> CodeResult<ValidateCode> {
        let code = Self::random_digits(self.config.length);
        expiring_code(CodeType::Sms, code, self.config.expire_in)
    }
}
