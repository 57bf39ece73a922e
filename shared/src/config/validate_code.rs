//! Verification code generation settings

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Longest accepted code lifetime in seconds (one day)
pub const MAX_EXPIRE_IN_SECONDS: i64 = 86_400;

/// Settings for image captcha codes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImageCodeConfig {
    /// Number of characters drawn on the captcha
    #[serde(default = "default_image_length")]
    pub length: usize,

    /// Default image width in pixels (a `width` request parameter overrides it)
    #[serde(default = "default_image_width")]
    pub width: u32,

    /// Default image height in pixels (a `height` request parameter overrides it)
    #[serde(default = "default_image_height")]
    pub height: u32,

    /// Seconds until the code expires
    #[serde(default = "default_expire_in")]
    pub expire_in: i64,
}

impl Default for ImageCodeConfig {
    fn default() -> Self {
        Self {
            length: default_image_length(),
            width: default_image_width(),
            height: default_image_height(),
            expire_in: default_expire_in(),
        }
    }
}

impl ImageCodeConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            length: env_or("VALIDATE_CODE_IMAGE_LENGTH", defaults.length),
            width: env_or("VALIDATE_CODE_IMAGE_WIDTH", defaults.width),
            height: env_or("VALIDATE_CODE_IMAGE_HEIGHT", defaults.height),
            expire_in: env_or("VALIDATE_CODE_IMAGE_EXPIRE_IN", defaults.expire_in),
        }
    }
}

/// Settings for numeric SMS codes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SmsCodeConfig {
    /// Number of digits
    #[serde(default = "default_sms_length")]
    pub length: usize,

    /// Seconds until the code expires
    #[serde(default = "default_expire_in")]
    pub expire_in: i64,
}

impl Default for SmsCodeConfig {
    fn default() -> Self {
        Self {
            length: default_sms_length(),
            expire_in: default_expire_in(),
        }
    }
}

impl SmsCodeConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            length: env_or("VALIDATE_CODE_SMS_LENGTH", defaults.length),
            expire_in: env_or("VALIDATE_CODE_SMS_EXPIRE_IN", defaults.expire_in),
        }
    }
}

/// Per-type verification code configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ValidateCodeConfig {
    #[serde(default)]
    pub image: ImageCodeConfig,

    #[serde(default)]
    pub sms: SmsCodeConfig,
}

impl ValidateCodeConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            image: ImageCodeConfig::from_env(),
            sms: SmsCodeConfig::from_env(),
        }
    }

    /// Reject empty codes and lifetimes outside `1..=MAX_EXPIRE_IN_SECONDS`
    pub fn validate(&self) -> Result<(), String> {
        if self.image.length == 0 {
            return Err("validate_code.image.length must be greater than 0".to_string());
        }
        if self.image.width == 0 || self.image.height == 0 {
            return Err("validate_code.image width and height must be greater than 0".to_string());
        }
        if !(1..=MAX_EXPIRE_IN_SECONDS).contains(&self.image.expire_in) {
            return Err(format!(
                "validate_code.image.expire_in must be between 1 and {} seconds",
                MAX_EXPIRE_IN_SECONDS
            ));
        }
        if self.sms.length == 0 {
            return Err("validate_code.sms.length must be greater than 0".to_string());
        }
        if !(1..=MAX_EXPIRE_IN_SECONDS).contains(&self.sms.expire_in) {
            return Err(format!(
                "validate_code.sms.expire_in must be between 1 and {} seconds",
                MAX_EXPIRE_IN_SECONDS
            ));
        }
        Ok(())
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

fn default_image_length() -> usize {
    4
}

fn default_image_width() -> u32 {
    67
}

fn default_image_height() -> u32 {
    23
}

fn default_sms_length() -> usize {
    6
}

fn default_expire_in() -> i64 {
    60
}
