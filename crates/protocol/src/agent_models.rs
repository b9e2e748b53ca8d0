//! Agent configuration models for `.agent-kit/agents/*.md`.
//!
//! This module defines the structure of agent definition files.
//! Agents are defined as Markdown files with YAML front matter.

use serde::{Deserialize, Serialize};

/// Represents a single agent's configuration and charter.
///
/// Agents are defined in `.agent-kit/agents/*.md` files with YAML front matter
/// containing metadata, and the file body containing the agent's charter.
///
/// # Example
///
/// ```markdown
/// ---
/// id: codebase-1
/// name: Codebase Manager
/// kind: codebase-management
/// description: Watches the repository and keeps the analysis index fresh
/// ---
///
/// Track dependency drift and surface refactoring opportunities.
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    /// Unique identifier for this agent.
    ///
    /// Used as the registry key; at most one registered agent per id.
    pub id: String,

    /// Human-readable display name.
    pub name: String,

    /// Variant discriminator (e.g., "codebase-management", "vr-workflow").
    ///
    /// The factory uses this to decide which agent type to construct.
    pub kind: String,

    /// Human-readable description of the agent's purpose.
    pub description: String,

    /// The main content of the .md file, not part of the front matter.
    ///
    /// This contains the charter that directs the agent's domain behavior.
    /// Note: This field is skipped during JSON serialization as it's not
    /// part of the front matter metadata.
    #[serde(skip)]
    pub charter: String,
}

impl AgentConfig {
    /// Create a minimal configuration with the given id and kind.
    ///
    /// Name defaults to the id and the remaining fields stay empty. Mostly
    /// useful for tests and programmatic registration.
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            kind: kind.into(),
            description: String::new(),
            charter: String::new(),
        }
    }
}
