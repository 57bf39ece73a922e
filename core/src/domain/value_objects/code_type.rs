//! Supported verification code kinds

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidateCodeError;

/// Prefix of every session attribute that holds a verification code
pub const SESSION_KEY_PREFIX: &str = "SESSION_KEY_FOR_CODE_";

/// Verification code kind
///
/// Each kind carries the name of the request parameter in which the client
/// submits its answer on validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CodeType {
    /// Numeric code delivered by SMS
    Sms,
    /// Captcha rendered as an image
    Image,
}

impl CodeType {
    /// Every supported kind
    pub const ALL: [CodeType; 2] = [CodeType::Sms, CodeType::Image];

    /// Upper-case symbolic name
    pub fn name(&self) -> &'static str {
        match self {
            CodeType::Sms => "SMS",
            CodeType::Image => "IMAGE",
        }
    }

    /// Name of the request parameter holding the submitted code
    pub fn param_name_on_validate(&self) -> &'static str {
        match self {
            CodeType::Sms => "smsCode",
            CodeType::Image => "imageCode",
        }
    }

    /// Case-insensitive lookup by name
    pub fn resolve(name: &str) -> Result<Self, ValidateCodeError> {
        let trimmed = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidateCodeError::UnknownCodeType {
                name: name.to_string(),
            })
    }

    /// Session attribute key for this kind
    pub fn session_key(&self) -> String {
        format!("{}{}", SESSION_KEY_PREFIX, self.name())
    }

    /// Display name of the generator bound to this kind
    pub fn generator_name(&self) -> String {
        format!("{}Generator", self.name().to_lowercase())
    }

    /// Display name of the processor bound to this kind
    pub fn processor_name(&self) -> String {
        format!("{}Processor", self.name().to_lowercase())
    }
}

impl fmt::Display for CodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CodeType {
    type Err = ValidateCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}
