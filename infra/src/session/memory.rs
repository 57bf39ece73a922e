//! In-process session store
//!
//! Attributes live until they are removed, overwritten, or the whole session
//! is invalidated. Nothing is swept in the background.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use vc_core::{SessionError, SessionStore};

type Attributes = HashMap<String, Value>;

/// Session store backed by a map of session id to attributes
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, Attributes>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every attribute of a session
    pub async fn invalidate(&self, session_id: &str) {
        if self.sessions.write().await.remove(session_id).is_some() {
            debug!(session_id, "Session invalidated");
        }
    }

    /// Number of attributes held for a session
    pub async fn attribute_count(&self, session_id: &str) -> usize {
        self.sessions
            .read()
            .await
            .get(session_id)
            .map_or(0, |attributes| attributes.len())
    }

    /// Number of sessions holding at least one attribute
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn set_attribute(&self, session_id: &str, key: &str, value: Value) -> Result<(), SessionError> {
        self.sessions
            .write()
            .await
            .entry(session_id.to_string())
            .or_default()
            .insert(key.to_string(), value);
        Ok(())
    }

    async fn get_attribute(&self, session_id: &str, key: &str) -> Result<Option<Value>, SessionError> {
        Ok(self
            .sessions
            .read()
            .await
            .get(session_id)
            .and_then(|attributes| attributes.get(key))
            .cloned())
    }

    async fn remove_attribute(&self, session_id: &str, key: &str) -> Result<(), SessionError> {
        let mut sessions = self.sessions.write().await;
        if let Some(attributes) = sessions.get_mut(session_id) {
            attributes.remove(key);
            if attributes.is_empty() {
                sessions.remove(session_id);
            }
        }
        Ok(())
    }
}
