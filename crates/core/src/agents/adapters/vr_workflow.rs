//! VR workflow agent.

use std::sync::atomic::{AtomicBool, Ordering};

use ak_protocol::agent_models::AgentConfig;
use async_trait::async_trait;
use tracing::info;

use crate::agents::base::{Agent, AgentError};

/// Agent that drives VR workflow execution.
///
/// The scene binding is config-driven and internal to the agent; the only
/// external wiring is the DeepSeek credential used for workflow planning.
pub struct VrWorkflowAgent {
    config: AgentConfig,
    api_key: String,
    initialized: AtomicBool,
}

impl VrWorkflowAgent {
    /// Create a new VR workflow agent.
    ///
    /// # Arguments
    ///
    /// * `config` - The agent configuration; `id` must be non-empty
    /// * `api_key` - DeepSeek API credential; must be non-blank
    pub fn new(config: AgentConfig, api_key: impl Into<String>) -> Result<Self, AgentError> {
        if config.id.trim().is_empty() {
            return Err(AgentError::InvalidConfig(
                "agent id must not be empty".to_string(),
            ));
        }
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(AgentError::InvalidConfig(
                "DeepSeek API key must not be blank".to_string(),
            ));
        }
        Ok(Self {
            config,
            api_key,
            initialized: AtomicBool::new(false),
        })
    }
}

#[async_trait]
impl Agent for VrWorkflowAgent {
    fn config(&self) -> &AgentConfig {
        &self.config
    }

    async fn initialize(&self) -> Result<(), AgentError> {
        self.initialized.store(true, Ordering::SeqCst);
        info!(
            agent_id = %self.config.id,
            key_len = self.api_key.len(),
            "vr workflow agent initialized"
        );
        Ok(())
    }

    async fn shutdown(&self) -> Result<(), AgentError> {
        // Shutdown of a never-initialized agent has no scene state to tear down
        if !self.initialized.swap(false, Ordering::SeqCst) {
            return Err(AgentError::ShutdownFailed(
                "agent was never initialized".to_string(),
            ));
        }
        info!(agent_id = %self.config.id, "vr workflow agent shut down");
        Ok(())
    }
}
