//! Quantum workflow agent.

use std::sync::Mutex;

use ak_protocol::agent_models::AgentConfig;
use async_trait::async_trait;
use tracing::{info, warn};

use crate::agents::base::{Agent, AgentError};

/// Agent that submits and tracks quantum workflow jobs.
///
/// Requires both a Qiskit credential (circuit execution) and a DeepSeek
/// credential (workflow planning). Jobs queued while the agent runs are
/// abandoned on shutdown; a warning records how many were dropped.
pub struct QuantumWorkflowAgent {
    config: AgentConfig,
    qiskit_api_key: String,
    deepseek_api_key: String,
    queued_jobs: Mutex<Vec<String>>,
}

impl QuantumWorkflowAgent {
    /// Create a new quantum workflow agent.
    ///
    /// # Arguments
    ///
    /// * `config` - The agent configuration; `id` must be non-empty
    /// * `qiskit_api_key` - Qiskit API credential; must be non-blank
    /// * `deepseek_api_key` - DeepSeek API credential; must be non-blank
    pub fn new(
        config: AgentConfig,
        qiskit_api_key: impl Into<String>,
        deepseek_api_key: impl Into<String>,
    ) -> Result<Self, AgentError> {
        if config.id.trim().is_empty() {
            return Err(AgentError::InvalidConfig(
                "agent id must not be empty".to_string(),
            ));
        }
        let qiskit_api_key = qiskit_api_key.into();
        if qiskit_api_key.trim().is_empty() {
            return Err(AgentError::InvalidConfig(
                "Qiskit API key must not be blank".to_string(),
            ));
        }
        let deepseek_api_key = deepseek_api_key.into();
        if deepseek_api_key.trim().is_empty() {
            return Err(AgentError::InvalidConfig(
                "DeepSeek API key must not be blank".to_string(),
            ));
        }
        Ok(Self {
            config,
            qiskit_api_key,
            deepseek_api_key,
            queued_jobs: Mutex::new(Vec::new()),
        })
    }

    /// Queue a workflow job for execution.
    pub fn submit_job(&self, job_id: &str) {
        self.queued_jobs.lock().unwrap().push(job_id.to_string());
    }

    /// Number of jobs waiting for execution.
    pub fn queued_job_count(&self) -> usize {
        self.queued_jobs.lock().unwrap().len()
    }
}

#[async_trait]
impl Agent for QuantumWorkflowAgent {
    fn config(&self) -> &AgentConfig {
        &self.config
    }

    async fn initialize(&self) -> Result<(), AgentError> {
        info!(
            agent_id = %self.config.id,
            qiskit_key_len = self.qiskit_api_key.len(),
            deepseek_key_len = self.deepseek_api_key.len(),
            "quantum workflow agent initialized"
        );
        Ok(())
    }

    async fn shutdown(&self) -> Result<(), AgentError> {
        let dropped = {
            let mut jobs = self.queued_jobs.lock().unwrap();
            std::mem::take(&mut *jobs)
        };
        if !dropped.is_empty() {
            warn!(
                agent_id = %self.config.id,
                dropped_jobs = dropped.len(),
                "shutting down with jobs still queued"
            );
        }
        info!(agent_id = %self.config.id, "quantum workflow agent shut down");
        Ok(())
    }
}
