//! Marketplace optimization agent backed by the marketplace database.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use ak_protocol::agent_models::AgentConfig;
use async_trait::async_trait;
use tracing::info;

use crate::agents::base::{Agent, AgentError};
use crate::clients::DatabaseClient;

/// Agent that tunes marketplace listings.
///
/// Requires a database client (listing data) and a DeepSeek API credential
/// (optimization model). Initialization health-checks the database so a
/// dead connection surfaces at registration time instead of mid-run.
pub struct MarketplaceOptimizationAgent {
    config: AgentConfig,
    database: Arc<dyn DatabaseClient>,
    api_key: String,
    ready: AtomicBool,
}

impl MarketplaceOptimizationAgent {
    /// Create a new marketplace optimization agent.
    ///
    /// # Arguments
    ///
    /// * `config` - The agent configuration; `id` must be non-empty
    /// * `database` - Client for the marketplace database
    /// * `api_key` - DeepSeek API credential; must be non-blank
    pub fn new(
        config: AgentConfig,
        database: Arc<dyn DatabaseClient>,
        api_key: impl Into<String>,
    ) -> Result<Self, AgentError> {
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
            database,
            api_key,
            ready: AtomicBool::new(false),
        })
    }

    /// Whether the agent has completed initialization.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Agent for MarketplaceOptimizationAgent {
    fn config(&self) -> &AgentConfig {
        &self.config
    }

    async fn initialize(&self) -> Result<(), AgentError> {
        self.database.health_check().await?;
        self.ready.store(true, Ordering::SeqCst);
        info!(
            agent_id = %self.config.id,
            key_len = self.api_key.len(),
            "marketplace optimization agent initialized"
        );
        Ok(())
    }

    async fn shutdown(&self) -> Result<(), AgentError> {
        self.ready.store(false, Ordering::SeqCst);
        info!(agent_id = %self.config.id, "marketplace optimization agent shut down");
        Ok(())
    }
}
