//! Agent factory for creating agent instances from configurations.

use std::sync::Arc;

use ak_protocol::agent_models::AgentConfig;
use tracing::warn;

use crate::agents::adapters::{
    CodebaseManagementAgent, CollaborationCoordinatorAgent, CrossPlatformOptimizationAgent,
    MarketplaceOptimizationAgent, MetaAgent, MockAgent, QuantumWorkflowAgent, VrWorkflowAgent,
};
use crate::agents::agent_kind::AgentKind;
use crate::agents::base::{Agent, AgentError};
use crate::clients::{CacheClient, DatabaseClient};

/// Process-wide resource handles available for wiring into agents.
///
/// The factory pulls from this bundle when dispatching on an agent's kind;
/// a variant whose required handle is missing fails construction with
/// `InvalidConfig` instead of producing a half-wired agent.
#[derive(Clone, Default)]
pub struct AgentResources {
    cache: Option<Arc<dyn CacheClient>>,
    database: Option<Arc<dyn DatabaseClient>>,
    deepseek_api_key: Option<String>,
    qiskit_api_key: Option<String>,
}

impl AgentResources {
    /// An empty bundle with no handles wired.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wire a shared cache client.
    pub fn with_cache(mut self, cache: Arc<dyn CacheClient>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Wire a database client.
    pub fn with_database(mut self, database: Arc<dyn DatabaseClient>) -> Self {
        self.database = Some(database);
        self
    }

    /// Wire the DeepSeek API credential.
    pub fn with_deepseek_api_key(mut self, key: impl Into<String>) -> Self {
        self.deepseek_api_key = Some(key.into());
        self
    }

    /// Wire the Qiskit API credential.
    pub fn with_qiskit_api_key(mut self, key: impl Into<String>) -> Self {
        self.qiskit_api_key = Some(key.into());
        self
    }

    fn require_database(&self, config: &AgentConfig) -> Result<Arc<dyn DatabaseClient>, AgentError> {
        self.database.clone().ok_or_else(|| {
            AgentError::InvalidConfig(format!(
                "agent '{}' requires a database client but none is wired",
                config.id
            ))
        })
    }

    fn require_deepseek_key(&self, config: &AgentConfig) -> Result<&str, AgentError> {
        self.deepseek_api_key.as_deref().ok_or_else(|| {
            AgentError::InvalidConfig(format!(
                "agent '{}' requires a DeepSeek API key but none is wired",
                config.id
            ))
        })
    }

    fn require_qiskit_key(&self, config: &AgentConfig) -> Result<&str, AgentError> {
        self.qiskit_api_key.as_deref().ok_or_else(|| {
            AgentError::InvalidConfig(format!(
                "agent '{}' requires a Qiskit API key but none is wired",
                config.id
            ))
        })
    }
}

/// Factory for creating agent instances based on configuration.
///
/// The factory determines which variant to construct from the config's
/// `kind` field. It performs no lifecycle action: produced agents are not
/// initialized and not registered anywhere; both are the caller's
/// responsibility.
pub struct AgentFactory;

impl AgentFactory {
    /// Create a codebase management agent.
    pub fn create_codebase_management(
        config: AgentConfig,
        cache: Option<Arc<dyn CacheClient>>,
    ) -> Result<Arc<dyn Agent>, AgentError> {
        Ok(Arc::new(CodebaseManagementAgent::new(config, cache)?))
    }

    /// Create a collaboration coordinator agent.
    pub fn create_collaboration_coordinator(
        config: AgentConfig,
        cache: Option<Arc<dyn CacheClient>>,
    ) -> Result<Arc<dyn Agent>, AgentError> {
        Ok(Arc::new(CollaborationCoordinatorAgent::new(config, cache)?))
    }

    /// Create a marketplace optimization agent.
    pub fn create_marketplace_optimization(
        config: AgentConfig,
        database: Arc<dyn DatabaseClient>,
        deepseek_api_key: &str,
    ) -> Result<Arc<dyn Agent>, AgentError> {
        Ok(Arc::new(MarketplaceOptimizationAgent::new(
            config,
            database,
            deepseek_api_key,
        )?))
    }

    /// Create a VR workflow agent.
    pub fn create_vr_workflow(
        config: AgentConfig,
        deepseek_api_key: &str,
    ) -> Result<Arc<dyn Agent>, AgentError> {
        Ok(Arc::new(VrWorkflowAgent::new(config, deepseek_api_key)?))
    }

    /// Create a quantum workflow agent.
    pub fn create_quantum_workflow(
        config: AgentConfig,
        qiskit_api_key: &str,
        deepseek_api_key: &str,
    ) -> Result<Arc<dyn Agent>, AgentError> {
        Ok(Arc::new(QuantumWorkflowAgent::new(
            config,
            qiskit_api_key,
            deepseek_api_key,
        )?))
    }

    /// Create a cross-platform optimization agent.
    pub fn create_cross_platform_optimization(
        config: AgentConfig,
    ) -> Result<Arc<dyn Agent>, AgentError> {
        Ok(Arc::new(CrossPlatformOptimizationAgent::new(config)?))
    }

    /// Create a meta agent.
    pub fn create_meta(config: AgentConfig) -> Result<Arc<dyn Agent>, AgentError> {
        Ok(Arc::new(MetaAgent::new(config)?))
    }

    /// Create an agent instance from a configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - The agent configuration
    /// * `resources` - Process-wide resource handles to wire from
    ///
    /// # Returns
    ///
    /// An `Arc<dyn Agent>` wrapping the variant matching `config.kind`, or
    /// an error if construction fails or a required handle is missing.
    ///
    /// # Behavior
    ///
    /// The factory uses `AgentKind::from_kind()` to decide which variant to
    /// construct:
    /// - `codebase-management` → `CodebaseManagementAgent` (optional cache)
    /// - `collaboration-coordinator` → `CollaborationCoordinatorAgent` (optional cache)
    /// - `marketplace-optimization` → `MarketplaceOptimizationAgent` (database + DeepSeek key)
    /// - `vr-workflow` → `VrWorkflowAgent` (DeepSeek key)
    /// - `quantum-workflow` → `QuantumWorkflowAgent` (Qiskit + DeepSeek keys)
    /// - `cross-platform-optimization` → `CrossPlatformOptimizationAgent`
    /// - `meta` → `MetaAgent`
    /// - anything else → `MockAgent` (a warning records the unknown kind)
    pub fn create(
        config: &AgentConfig,
        resources: &AgentResources,
    ) -> Result<Arc<dyn Agent>, AgentError> {
        match AgentKind::from_kind(&config.kind) {
            AgentKind::CodebaseManagement => {
                Self::create_codebase_management(config.clone(), resources.cache.clone())
            }
            AgentKind::CollaborationCoordinator => {
                Self::create_collaboration_coordinator(config.clone(), resources.cache.clone())
            }
            AgentKind::MarketplaceOptimization => {
                let database = resources.require_database(config)?;
                let key = resources.require_deepseek_key(config)?;
                Self::create_marketplace_optimization(config.clone(), database, key)
            }
            AgentKind::VrWorkflow => {
                let key = resources.require_deepseek_key(config)?;
                Self::create_vr_workflow(config.clone(), key)
            }
            AgentKind::QuantumWorkflow => {
                let qiskit_key = resources.require_qiskit_key(config)?;
                let deepseek_key = resources.require_deepseek_key(config)?;
                Self::create_quantum_workflow(config.clone(), qiskit_key, deepseek_key)
            }
            AgentKind::CrossPlatformOptimization => {
                Self::create_cross_platform_optimization(config.clone())
            }
            AgentKind::Meta => Self::create_meta(config.clone()),
            AgentKind::Mock => {
                warn!(
                    agent_id = %config.id,
                    kind = %config.kind,
                    "unknown agent kind, falling back to mock agent"
                );
                Ok(Arc::new(MockAgent::from_config(config.clone())))
            }
        }
    }

    /// Create one agent per configuration, failing fast on the first error.
    pub fn create_all(
        configs: &[AgentConfig],
        resources: &AgentResources,
    ) -> Result<Vec<Arc<dyn Agent>>, AgentError> {
        configs
            .iter()
            .map(|config| Self::create(config, resources))
            .collect()
    }
}
