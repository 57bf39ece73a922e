//! Mock SMS gateway for development and testing
//!
//! Logs messages instead of sending them and keeps the last message per
//! mobile number so tests can read the delivered code back.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use uuid::Uuid;
use vc_shared::phone::mask_mobile;

use super::SmsGateway;

/// Mock SMS gateway
#[derive(Clone, Default)]
pub struct MockSmsGateway {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Last message sent to each mobile number
    messages: Arc<Mutex<HashMap<String, String>>>,
    /// Whether to simulate failures
    simulate_failure: bool,
}

impl MockSmsGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gateway that rejects every message
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::default()
        }
    }

    /// Get the total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Last message sent to `mobile`
    pub fn last_message(&self, mobile: &str) -> Option<String> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(mobile)
            .cloned()
    }
}

#[async_trait]
impl SmsGateway for MockSmsGateway {
    async fn send_sms(&self, mobile: &str, message: &str) -> Result<String, String> {
        if self.simulate_failure {
            warn!(
                provider = "mock",
                mobile = %mask_mobile(mobile),
                "Mock SMS gateway simulating failure"
            );
            return Err("Simulated SMS sending failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(mobile.to_string(), message.to_string());

        info!(
            target: "sms_gateway",
            provider = "mock",
            mobile = %mask_mobile(mobile),
            message_id = %message_id,
            count,
            "SMS sent successfully (mock)"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }

    async fn is_available(&self) -> bool {
        !self.simulate_failure
    }
}
