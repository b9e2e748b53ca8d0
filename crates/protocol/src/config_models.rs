//! Global configuration models for `.agent-kit/config.toml`.
//!
//! This module defines the structure of the global configuration file that
//! holds the external resource endpoints and credentials shared by all
//! agent variants.

use serde::Deserialize;
use serde::Serialize;

/// Represents global settings from `.agent-kit/config.toml`.
///
/// Every field is optional: a missing entry simply means the corresponding
/// resource is not wired, and any agent variant that requires it cannot be
/// constructed from this configuration.
///
/// # Example
///
/// ```toml
/// # .agent-kit/config.toml
/// cache-url = "redis://127.0.0.1:6379"
/// database-url = "postgres://localhost/marketplace"
/// deepseek-api-key = "sk-..."
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct GlobalConfig {
    /// Connection URL for the shared cache (e.g., a Redis instance).
    #[serde(default)]
    pub cache_url: Option<String>,

    /// Connection URL for the marketplace database.
    #[serde(default)]
    pub database_url: Option<String>,

    /// API credential for the DeepSeek service used by the workflow agents.
    #[serde(default)]
    pub deepseek_api_key: Option<String>,

    /// API credential for the Qiskit service used by the quantum agent.
    #[serde(default)]
    pub qiskit_api_key: Option<String>,
}
