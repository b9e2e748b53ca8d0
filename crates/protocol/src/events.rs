//! Lifecycle event notification.
//!
//! This module defines the message types emitted by the agent manager as
//! agents move through their lifecycle. Observers subscribe through a
//! channel handed to the manager at construction time; emission is
//! best-effort and never blocks registry operations on a slow consumer
//! beyond channel capacity.

use serde::{Deserialize, Serialize};

/// Events emitted by the agent manager.
///
/// Uses tagged enum serialization so the payloads stay self-describing:
/// ```json
/// {
///   "type": "agentReady",
///   "payload": {
///     "agent_id": "codebase-1"
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum LifecycleEvent {
    /// An agent was inserted into the registry.
    ///
    /// `replaced` is true when the insert overwrote an existing record with
    /// the same id; the replaced agent is NOT shut down by the manager.
    AgentRegistered { agent_id: String, replaced: bool },

    /// An agent finished initialization successfully and is ready for work.
    AgentReady { agent_id: String },

    /// An agent's initialization failed; it remains registered.
    AgentInitFailed { agent_id: String, error: String },

    /// An agent's shutdown has begun.
    AgentShuttingDown { agent_id: String },

    /// An agent was removed from the registry after a successful shutdown.
    AgentRemoved { agent_id: String },

    /// A bulk shutdown finished and the registry was cleared.
    ///
    /// `failed_agent_ids` names the agents whose shutdown calls failed;
    /// they were removed from the registry regardless.
    RegistryCleared { failed_agent_ids: Vec<String> },
}
