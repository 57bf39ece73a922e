//! SMS gateway that falls back to a backup provider
//!
//! After a primary failure every message goes to the backup until
//! `failover_timeout` has passed, then the primary is tried again.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use super::SmsGateway;

#[derive(Debug, Clone, Default)]
struct FailoverState {
    using_backup: bool,
    last_primary_failure: Option<Instant>,
    primary_failure_count: u32,
}

/// Primary/backup SMS gateway pair
pub struct FailoverSmsGateway {
    primary: Arc<dyn SmsGateway>,
    backup: Arc<dyn SmsGateway>,
    state: RwLock<FailoverState>,
    failover_timeout: Duration,
}

impl FailoverSmsGateway {
    /// Create a failover gateway
    ///
    /// # Arguments
    ///
    /// * `primary` - Gateway tried first
    /// * `backup` - Gateway used while the primary is considered down
    /// * `failover_timeout` - How long to stay on the backup after a primary failure
    pub fn new(primary: Arc<dyn SmsGateway>, backup: Arc<dyn SmsGateway>, failover_timeout: Duration) -> Self {
        info!(
            primary = primary.provider_name(),
            backup = backup.provider_name(),
            "Initializing failover SMS gateway"
        );
        Self {
            primary,
            backup,
            state: RwLock::new(FailoverState::default()),
            failover_timeout,
        }
    }

    /// Number of consecutive primary failures
    pub async fn primary_failure_count(&self) -> u32 {
        self.state.read().await.primary_failure_count
    }

    /// Whether messages currently go to the backup
    pub async fn is_using_backup(&self) -> bool {
        self.state.read().await.using_backup
    }

    async fn should_try_primary(&self) -> bool {
        let state = self.state.read().await;
        if !state.using_backup {
            return true;
        }
        state
            .last_primary_failure
            .map_or(true, |last_failure| last_failure.elapsed() > self.failover_timeout)
    }

    async fn record_primary_failure(&self) {
        let mut state = self.state.write().await;
        state.primary_failure_count += 1;
        state.last_primary_failure = Some(Instant::now());
        if !state.using_backup {
            warn!(
                primary = self.primary.provider_name(),
                backup = self.backup.provider_name(),
                "Primary SMS gateway failed, switching to backup"
            );
            state.using_backup = true;
        }
    }

    async fn record_primary_success(&self) {
        let mut state = self.state.write().await;
        if state.using_backup {
            info!(
                primary = self.primary.provider_name(),
                "Primary SMS gateway recovered"
            );
        }
        *state = FailoverState::default();
    }
}

#[async_trait]
impl SmsGateway for FailoverSmsGateway {
    async fn send_sms(&self, mobile: &str, message: &str) -> Result<String, String> {
        if self.should_try_primary().await {
            match self.primary.send_sms(mobile, message).await {
                Ok(message_id) => {
                    self.record_primary_success().await;
                    return Ok(message_id);
                }
                Err(e) => {
                    error!(
                        provider = self.primary.provider_name(),
                        error = %e,
                        "Primary SMS gateway failed"
                    );
                    self.record_primary_failure().await;
                }
            }
        }

        self.backup.send_sms(mobile, message).await.map_err(|e| {
            error!(
                provider = self.backup.provider_name(),
                error = %e,
                "Backup SMS gateway also failed"
            );
            format!(
                "Both primary ({}) and backup ({}) SMS gateways failed: {}",
                self.primary.provider_name(),
                self.backup.provider_name(),
                e
            )
        })
    }

    fn provider_name(&self) -> &str {
        "Failover"
    }

    async fn is_available(&self) -> bool {
        self.primary.is_available().await || self.backup.is_available().await
    }
}
