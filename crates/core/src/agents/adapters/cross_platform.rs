//! Cross-platform optimization agent.

use std::collections::HashMap;
use std::sync::Mutex;

use ak_protocol::agent_models::AgentConfig;
use async_trait::async_trait;
use tracing::info;

use crate::agents::base::{Agent, AgentError};

/// Agent that tunes build and runtime settings per target platform.
///
/// The profile table is built on initialize and torn down on shutdown; it
/// needs no external wiring.
pub struct CrossPlatformOptimizationAgent {
    config: AgentConfig,
    profiles: Mutex<HashMap<String, String>>,
}

impl CrossPlatformOptimizationAgent {
    /// Create a new cross-platform optimization agent.
    ///
    /// # Arguments
    ///
    /// * `config` - The agent configuration; `id` must be non-empty
    pub fn new(config: AgentConfig) -> Result<Self, AgentError> {
        if config.id.trim().is_empty() {
            return Err(AgentError::InvalidConfig(
                "agent id must not be empty".to_string(),
            ));
        }
        Ok(Self {
            config,
            profiles: Mutex::new(HashMap::new()),
        })
    }

    /// The optimization profile for a platform, if the agent is initialized
    /// and knows the platform.
    pub fn profile(&self, platform: &str) -> Option<String> {
        self.profiles.lock().unwrap().get(platform).cloned()
    }

    /// Number of loaded platform profiles.
    pub fn profile_count(&self) -> usize {
        self.profiles.lock().unwrap().len()
    }
}

#[async_trait]
impl Agent for CrossPlatformOptimizationAgent {
    fn config(&self) -> &AgentConfig {
        &self.config
    }

    async fn initialize(&self) -> Result<(), AgentError> {
        let defaults = [
            ("web", "bundle-split"),
            ("ios", "bitcode"),
            ("android", "r8-full"),
            ("desktop", "lto"),
        ];
        {
            let mut profiles = self.profiles.lock().unwrap();
            for (platform, profile) in defaults {
                profiles.insert(platform.to_string(), profile.to_string());
            }
        }
        info!(
            agent_id = %self.config.id,
            profile_count = defaults.len(),
            "cross-platform optimization agent initialized"
        );
        Ok(())
    }

    async fn shutdown(&self) -> Result<(), AgentError> {
        self.profiles.lock().unwrap().clear();
        info!(agent_id = %self.config.id, "cross-platform optimization agent shut down");
        Ok(())
    }
}
