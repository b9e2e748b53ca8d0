//! Mock agent and client implementations for deterministic testing.

use std::sync::atomic::{AtomicUsize, Ordering};

use ak_core::agents::base::Agent;
use ak_core::agents::base::AgentError;
use ak_core::clients::DatabaseClient;
use ak_protocol::agent_models::AgentConfig;
use async_trait::async_trait;

/// An agent whose initialize fails a fixed number of times before
/// succeeding. Exercises the register-retry path for agents stuck in the
/// registered-but-not-ready state.
#[allow(dead_code)]
pub struct FlakyInitAgent {
    config: AgentConfig,
    failures_remaining: AtomicUsize,
    init_calls: AtomicUsize,
}

impl FlakyInitAgent {
    #[allow(dead_code)]
    pub fn new(id: &str, failures: usize) -> Self {
        Self {
            config: AgentConfig::new(id, "mock"),
            failures_remaining: AtomicUsize::new(failures),
            init_calls: AtomicUsize::new(0),
        }
    }

    #[allow(dead_code)]
    pub fn init_calls(&self) -> usize {
        self.init_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Agent for FlakyInitAgent {
    fn config(&self) -> &AgentConfig {
        &self.config
    }

    async fn initialize(&self) -> Result<(), AgentError> {
        self.init_calls.fetch_add(1, Ordering::SeqCst);
        let remaining = self.failures_remaining.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures_remaining.store(remaining - 1, Ordering::SeqCst);
            return Err(AgentError::InitializationFailed(
                "backend warming up".to_string(),
            ));
        }
        Ok(())
    }

    async fn shutdown(&self) -> Result<(), AgentError> {
        Ok(())
    }
}

/// An agent whose shutdown fails a fixed number of times before
/// succeeding. Exercises the unregister-retry path.
#[allow(dead_code)]
pub struct FlakyShutdownAgent {
    config: AgentConfig,
    failures_remaining: AtomicUsize,
    shutdown_calls: AtomicUsize,
}

impl FlakyShutdownAgent {
    #[allow(dead_code)]
    pub fn new(id: &str, failures: usize) -> Self {
        Self {
            config: AgentConfig::new(id, "mock"),
            failures_remaining: AtomicUsize::new(failures),
            shutdown_calls: AtomicUsize::new(0),
        }
    }

    #[allow(dead_code)]
    pub fn shutdown_calls(&self) -> usize {
        self.shutdown_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Agent for FlakyShutdownAgent {
    fn config(&self) -> &AgentConfig {
        &self.config
    }

    async fn initialize(&self) -> Result<(), AgentError> {
        Ok(())
    }

    async fn shutdown(&self) -> Result<(), AgentError> {
        self.shutdown_calls.fetch_add(1, Ordering::SeqCst);
        let remaining = self.failures_remaining.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures_remaining.store(remaining - 1, Ordering::SeqCst);
            return Err(AgentError::ShutdownFailed(
                "sessions still draining".to_string(),
            ));
        }
        Ok(())
    }
}

/// A database client with a fixed health-check outcome.
#[allow(dead_code)]
pub struct FakeDatabase {
    pub healthy: bool,
}

impl FakeDatabase {
    #[allow(dead_code)]
    pub fn healthy() -> Self {
        Self { healthy: true }
    }

    #[allow(dead_code)]
    pub fn unhealthy() -> Self {
        Self { healthy: false }
    }
}

#[async_trait]
impl DatabaseClient for FakeDatabase {
    async fn health_check(&self) -> Result<(), AgentError> {
        if self.healthy {
            Ok(())
        } else {
            Err(AgentError::DatabaseError("connection refused".to_string()))
        }
    }
}
