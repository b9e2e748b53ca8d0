//! Meta agent.

use ak_protocol::agent_models::AgentConfig;
use async_trait::async_trait;
use tracing::info;

use crate::agents::base::{Agent, AgentError};

/// Agent that reasons about the other agents.
///
/// Its capability list is parsed from the charter at construction time, one
/// capability per non-empty line.
pub struct MetaAgent {
    config: AgentConfig,
    capabilities: Vec<String>,
}

impl MetaAgent {
    /// Create a new meta agent.
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
        let capabilities = config
            .charter
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.trim_start_matches('-').trim().to_string())
            .collect();
        Ok(Self {
            config,
            capabilities,
        })
    }

    /// The capabilities declared in the agent's charter.
    pub fn capabilities(&self) -> &[String] {
        &self.capabilities
    }
}

#[async_trait]
impl Agent for MetaAgent {
    fn config(&self) -> &AgentConfig {
        &self.config
    }

    async fn initialize(&self) -> Result<(), AgentError> {
        info!(
            agent_id = %self.config.id,
            capability_count = self.capabilities.len(),
            "meta agent initialized"
        );
        Ok(())
    }

    async fn shutdown(&self) -> Result<(), AgentError> {
        info!(agent_id = %self.config.id, "meta agent shut down");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities_parsed_from_charter() {
        let mut config = AgentConfig::new("meta-1", "meta");
        config.charter = "- route work\n\n- summarize status\n".to_string();

        let agent = MetaAgent::new(config).unwrap();
        assert_eq!(agent.capabilities(), ["route work", "summarize status"]);
    }

    #[test]
    fn test_empty_charter_means_no_capabilities() {
        let agent = MetaAgent::new(AgentConfig::new("meta-1", "meta")).unwrap();
        assert!(agent.capabilities().is_empty());
    }

    #[tokio::test]
    async fn test_lifecycle() {
        let agent = MetaAgent::new(AgentConfig::new("meta-1", "meta")).unwrap();
        agent.initialize().await.unwrap();
        agent.shutdown().await.unwrap();
    }
}
