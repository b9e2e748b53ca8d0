//! Mock agent implementation for testing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use ak_protocol::agent_models::AgentConfig;
use async_trait::async_trait;

use crate::agents::base::{Agent, AgentError};

/// Deterministic agent double for exercising the registry.
///
/// Lifecycle outcomes are fixed at construction time and every call is
/// counted, so tests can assert both the result and how often each
/// operation was invoked.
pub struct MockAgent {
    config: AgentConfig,
    init_result: Result<(), AgentError>,
    shutdown_result: Result<(), AgentError>,
    shutdown_delay: Option<Duration>,
    init_calls: AtomicUsize,
    shutdown_calls: AtomicUsize,
}

impl MockAgent {
    pub fn new(
        config: AgentConfig,
        init_result: Result<(), AgentError>,
        shutdown_result: Result<(), AgentError>,
    ) -> Self {
        Self {
            config,
            init_result,
            shutdown_result,
            shutdown_delay: None,
            init_calls: AtomicUsize::new(0),
            shutdown_calls: AtomicUsize::new(0),
        }
    }

    /// Agent whose initialize and shutdown both succeed.
    pub fn succeeding(id: &str) -> Self {
        Self::new(AgentConfig::new(id, "mock"), Ok(()), Ok(()))
    }

    /// Agent whose initialize fails with the given reason.
    pub fn init_failing(id: &str, reason: &str) -> Self {
        Self::new(
            AgentConfig::new(id, "mock"),
            Err(AgentError::InitializationFailed(reason.to_string())),
            Ok(()),
        )
    }

    /// Agent whose shutdown fails with the given reason.
    pub fn shutdown_failing(id: &str, reason: &str) -> Self {
        Self::new(
            AgentConfig::new(id, "mock"),
            Ok(()),
            Err(AgentError::ShutdownFailed(reason.to_string())),
        )
    }

    /// Successful agent from an existing configuration.
    ///
    /// Used by the factory when a kind string matches no known variant.
    pub fn from_config(config: AgentConfig) -> Self {
        Self::new(config, Ok(()), Ok(()))
    }

    /// Make shutdown sleep for the given duration before returning.
    pub fn with_shutdown_delay(mut self, delay: Duration) -> Self {
        self.shutdown_delay = Some(delay);
        self
    }

    /// How many times initialize has been invoked.
    pub fn init_calls(&self) -> usize {
        self.init_calls.load(Ordering::SeqCst)
    }

    /// How many times shutdown has been invoked.
    pub fn shutdown_calls(&self) -> usize {
        self.shutdown_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Agent for MockAgent {
    fn config(&self) -> &AgentConfig {
        &self.config
    }

    async fn initialize(&self) -> Result<(), AgentError> {
        self.init_calls.fetch_add(1, Ordering::SeqCst);
        self.init_result.clone()
    }

    async fn shutdown(&self) -> Result<(), AgentError> {
        self.shutdown_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.shutdown_delay {
            tokio::time::sleep(delay).await;
        }
        self.shutdown_result.clone()
    }
}
