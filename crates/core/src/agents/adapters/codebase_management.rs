//! Codebase management agent backed by the shared cache.

use std::sync::{Arc, Mutex};

use ak_protocol::agent_models::AgentConfig;
use async_trait::async_trait;
use tracing::{debug, info};

use crate::agents::base::{Agent, AgentError};
use crate::clients::CacheClient;

/// Agent that keeps a codebase analysis index fresh.
///
/// The analysis cursor (the last fully analyzed revision) survives restarts
/// through the shared cache when one is wired; without a cache the agent
/// starts from a clean slate every time.
pub struct CodebaseManagementAgent {
    config: AgentConfig,
    cache: Option<Arc<dyn CacheClient>>,
    cursor: Mutex<Option<String>>,
}

impl CodebaseManagementAgent {
    /// Create a new codebase management agent.
    ///
    /// # Arguments
    ///
    /// * `config` - The agent configuration; `id` must be non-empty
    /// * `cache` - Optional shared cache for persisting the analysis cursor
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
            cursor: Mutex::new(None),
        })
    }

    /// Record that analysis has caught up to the given revision.
    pub fn record_analyzed(&self, revision: &str) {
        *self.cursor.lock().unwrap() = Some(revision.to_string());
    }

    /// The most recently analyzed revision, if any.
    pub fn last_analyzed(&self) -> Option<String> {
        self.cursor.lock().unwrap().clone()
    }

    fn cursor_key(&self) -> String {
        format!("codebase:{}:cursor", self.config.id)
    }
}

#[async_trait]
impl Agent for CodebaseManagementAgent {
    fn config(&self) -> &AgentConfig {
        &self.config
    }

    async fn initialize(&self) -> Result<(), AgentError> {
        if let Some(cache) = &self.cache {
            if let Some(revision) = cache.get(&self.cursor_key()).await? {
                debug!(agent_id = %self.config.id, %revision, "restored analysis cursor");
                *self.cursor.lock().unwrap() = Some(revision);
            }
        }
        info!(agent_id = %self.config.id, "codebase management agent initialized");
        Ok(())
    }

    async fn shutdown(&self) -> Result<(), AgentError> {
        let cursor = self.cursor.lock().unwrap().take();
        if let (Some(cache), Some(revision)) = (&self.cache, cursor) {
            cache.set(&self.cursor_key(), revision).await?;
        }
        info!(agent_id = %self.config.id, "codebase management agent shut down");
        Ok(())
    }
}
