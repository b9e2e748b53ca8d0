//! Configuration models that aggregate all settings.
//!
//! This module provides the unified `AppConfig` structure that combines
//! global settings and agent definitions into a single configuration
//! object.

use ak_protocol::agent_models::AgentConfig;
use ak_protocol::config_models::GlobalConfig;

/// Unified application configuration loaded from the `.agent-kit/` directory.
///
/// This structure aggregates all configuration sources:
/// - `config.toml`: Global settings and resource endpoints
/// - `agents/*.md`: Agent definitions
///
/// # Example
///
/// ```rust,no_run
/// use ak_core::config::loader::load_config;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new(".")).await?;
/// println!("Loaded {} agents", config.agents.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Global settings from `config.toml`.
    pub global: GlobalConfig,

    /// All agent definitions loaded from `agents/*.md`.
    pub agents: Vec<AgentConfig>,
}
