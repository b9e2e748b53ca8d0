//! External client seams consumed by the agent variants.
//!
//! The registry core never talks to a cache or database itself; it only
//! forwards these handles to the agents that need them. Each handle is a
//! trait object so tests can substitute deterministic implementations.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::agents::base::AgentError;

/// Shared key/value cache used by agents to persist small pieces of state
/// across restarts.
#[async_trait]
pub trait CacheClient: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, AgentError>;
    async fn set(&self, key: &str, value: String) -> Result<(), AgentError>;
    async fn delete(&self, key: &str) -> Result<(), AgentError>;
}

/// Database handle used by the marketplace agent.
///
/// The registry core only ever health-checks the connection; all queries
/// stay inside the agent's domain logic.
#[async_trait]
pub trait DatabaseClient: Send + Sync {
    async fn health_check(&self) -> Result<(), AgentError>;
}

/// In-process cache implementation.
///
/// The default when no external cache is configured; state lives for the
/// lifetime of the process only.
pub struct InMemoryCache {
    inner: Mutex<HashMap<String, String>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheClient for InMemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, AgentError> {
        Ok(self.inner.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), AgentError> {
        self.inner.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), AgentError> {
        self.inner.lock().unwrap().remove(key);
        Ok(())
    }
}

#[cfg(feature = "redis-cache")]
pub mod redis_cache {
    //! Redis-backed cache client, enabled with the `redis-cache` feature.

    use super::*;
    use redis::AsyncCommands;

    /// Cache client backed by a Redis instance.
    pub struct RedisCache {
        client: redis::Client,
    }

    impl RedisCache {
        /// Wrap an already constructed Redis client.
        ///
        /// No connection is opened here; connections are established lazily
        /// per operation, so construction never blocks.
        pub fn new(client: redis::Client) -> Self {
            Self { client }
        }

        /// Build a cache client from a connection URL.
        pub fn from_url(url: &str) -> Result<Self, AgentError> {
            let client =
                redis::Client::open(url).map_err(|e| AgentError::CacheError(e.to_string()))?;
            Ok(Self { client })
        }
    }

    #[async_trait]
    impl CacheClient for RedisCache {
        async fn get(&self, key: &str) -> Result<Option<String>, AgentError> {
            let mut conn = self
                .client
                .get_multiplexed_async_connection()
                .await
                .map_err(|e| AgentError::CacheError(e.to_string()))?;
            let value: Option<String> = conn
                .get(key)
                .await
                .map_err(|e| AgentError::CacheError(e.to_string()))?;
            Ok(value)
        }

        async fn set(&self, key: &str, value: String) -> Result<(), AgentError> {
            let mut conn = self
                .client
                .get_multiplexed_async_connection()
                .await
                .map_err(|e| AgentError::CacheError(e.to_string()))?;
            conn.set::<_, _, ()>(key, value)
                .await
                .map_err(|e| AgentError::CacheError(e.to_string()))?;
            Ok(())
        }

        async fn delete(&self, key: &str) -> Result<(), AgentError> {
            let mut conn = self
                .client
                .get_multiplexed_async_connection()
                .await
                .map_err(|e| AgentError::CacheError(e.to_string()))?;
            conn.del::<_, ()>(key)
                .await
                .map_err(|e| AgentError::CacheError(e.to_string()))?;
            Ok(())
        }
    }
}

#[cfg(feature = "redis-cache")]
pub use redis_cache::RedisCache;
