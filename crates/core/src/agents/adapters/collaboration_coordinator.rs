//! Collaboration coordinator agent.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use ak_protocol::agent_models::AgentConfig;
use async_trait::async_trait;
use tracing::{info, warn};

use crate::agents::base::{Agent, AgentError};
use crate::clients::CacheClient;

/// Agent that coordinates live collaboration sessions.
///
/// Sessions are held in an in-process map while the agent runs. On shutdown
/// the map is flushed to the shared cache (when one is wired) so a
/// restarted coordinator can pick the sessions back up.
pub struct CollaborationCoordinatorAgent {
    config: AgentConfig,
    cache: Option<Arc<dyn CacheClient>>,
    /// Session mapping: session_id -> participant ids
    sessions: Mutex<HashMap<String, Vec<String>>>,
}

impl CollaborationCoordinatorAgent {
    /// Create a new collaboration coordinator agent.
    ///
    /// # Arguments
    ///
    /// * `config` - The agent configuration; `id` must be non-empty
    /// * `cache` - Optional shared cache for persisting sessions
    pub fn new(
        config: AgentConfig,
        cache: Option<Arc<dyn CacheClient>>,
    ) -> Result<Self, AgentError> {
        if config.id.trim().is_empty() {
            return Err(AgentError::InvalidConfig(
                "agent id must not be empty".to_string(),
            ));
        }
        Ok(Self {
            config,
            cache,
            sessions: Mutex::new(HashMap::new()),
        })
    }

    /// Open a collaboration session with the given participants.
    pub fn open_session(&self, session_id: &str, participants: Vec<String>) {
        self.sessions
            .lock()
            .unwrap()
            .insert(session_id.to_string(), participants);
    }

    /// Close a collaboration session; absent sessions are ignored.
    pub fn close_session(&self, session_id: &str) {
        self.sessions.lock().unwrap().remove(session_id);
    }

    /// Number of currently open sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    fn sessions_key(&self) -> String {
        format!("collab:{}:sessions", self.config.id)
    }
}

#[async_trait]
impl Agent for CollaborationCoordinatorAgent {
    fn config(&self) -> &AgentConfig {
        &self.config
    }

    async fn initialize(&self) -> Result<(), AgentError> {
        if let Some(cache) = &self.cache {
            if let Some(raw) = cache.get(&self.sessions_key()).await? {
                match serde_json::from_str::<HashMap<String, Vec<String>>>(&raw) {
                    Ok(restored) => {
                        info!(
                            agent_id = %self.config.id,
                            session_count = restored.len(),
                            "restored collaboration sessions"
                        );
                        *self.sessions.lock().unwrap() = restored;
                    }
                    Err(e) => {
                        // A corrupt snapshot is dropped rather than blocking startup
                        warn!(agent_id = %self.config.id, error = %e, "discarding unreadable session snapshot");
                        cache.delete(&self.sessions_key()).await?;
                    }
                }
            }
        }
        info!(agent_id = %self.config.id, "collaboration coordinator initialized");
        Ok(())
    }

    async fn shutdown(&self) -> Result<(), AgentError> {
        let sessions = {
            let mut guard = self.sessions.lock().unwrap();
            std::mem::take(&mut *guard)
        };
        if let Some(cache) = &self.cache {
            let raw = serde_json::to_string(&sessions)
                .map_err(|e| AgentError::CacheError(e.to_string()))?;
            cache.set(&self.sessions_key(), raw).await?;
        }
        info!(
            agent_id = %self.config.id,
            session_count = sessions.len(),
            "collaboration coordinator shut down"
        );
        Ok(())
    }
}
