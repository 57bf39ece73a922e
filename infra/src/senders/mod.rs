//! Code delivery channels
//!
//! - `image_sender` - Writes the rendered captcha into the response
//! - `sms_sender` - Delivers the code to the submitted mobile number

pub mod image_sender;
pub mod sms_sender;

pub use image_sender::ImageCodeSender;
pub use sms_sender::SmsCodeSender;
