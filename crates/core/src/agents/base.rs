//! Base Agent trait and supporting types.

use ak_protocol::agent_models::AgentConfig;
use async_trait::async_trait;
use thiserror::Error;

/// Errors produced by agent construction and lifecycle operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    /// Invalid configuration or resource handles at construction time.
    #[error("Invalid agent configuration: {0}")]
    InvalidConfig(String),
    /// The agent's asynchronous initialize operation failed.
    #[error("Initialization failed: {0}")]
    InitializationFailed(String),
    /// The agent's asynchronous shutdown operation failed.
    #[error("Shutdown failed: {0}")]
    ShutdownFailed(String),
    /// A cache client call failed.
    #[error("Cache client error: {0}")]
    CacheError(String),
    /// A database client call failed.
    #[error("Database client error: {0}")]
    DatabaseError(String),
}

/// The uniform lifecycle contract every agent variant satisfies.
///
/// Each variant is a distinct type implementing this trait; the manager
/// never touches an agent's internal state beyond these operations. Both
/// lifecycle operations are asynchronous and may fail; neither is invoked
/// by the factory.
#[async_trait]
pub trait Agent: Send + Sync {
    /// The configuration this agent was constructed from.
    ///
    /// Must contain the unique `id` the registry keys on.
    fn config(&self) -> &AgentConfig;

    /// Registry key for this agent, taken from its configuration.
    fn id(&self) -> &str {
        &self.config().id
    }

    /// Bring the agent into a ready state.
    ///
    /// Called by the manager after the agent has been inserted into the
    /// registry. May suspend for as long as it needs; there is no default
    /// timeout.
    async fn initialize(&self) -> Result<(), AgentError>;

    /// Release the agent's resources.
    ///
    /// Called by the manager before the agent is removed from the registry.
    /// A failed shutdown leaves the agent registered so the caller can
    /// retry.
    async fn shutdown(&self) -> Result<(), AgentError>;
}
