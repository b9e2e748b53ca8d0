//! Runtime agent lifecycle models.
//!
//! This module defines the structures for tracking the lifecycle state of
//! agents held by the registry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents the current lifecycle status of a registered agent.
///
/// The status progresses through these states during normal operation:
/// Registered -> Ready -> ShuttingDown -> (removed from the registry)
///
/// Special states:
/// - InitFailed: initialization was attempted and failed; the agent stays
///   registered so the caller can inspect it or retry
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgentStatus {
    /// Agent has been inserted into the registry but initialization has not
    /// completed yet.
    Registered,

    /// Agent initialized successfully and is available for work.
    Ready,

    /// Agent initialization failed.
    ///
    /// The agent remains registered in this state; `registered` and `ready`
    /// are distinct conditions by contract.
    InitFailed,

    /// Agent shutdown is in flight.
    ShuttingDown,
}

/// A point-in-time view of a single registry record.
///
/// Snapshots are cheap copies handed out by the manager for introspection;
/// they carry no reference to the agent instance itself.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AgentSnapshot {
    /// Registry key of the agent.
    pub agent_id: String,

    /// Display name from the agent's configuration.
    pub name: String,

    /// Variant discriminator from the agent's configuration.
    pub kind: String,

    /// Current lifecycle status.
    pub status: AgentStatus,

    /// When the agent was inserted into the registry.
    ///
    /// Re-registering an id resets this timestamp.
    pub registered_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialization_format() {
        let json = serde_json::to_string(&AgentStatus::ShuttingDown).expect("serialize status");
        assert_eq!(json, "\"SHUTTING_DOWN\"");

        let back: AgentStatus = serde_json::from_str("\"INIT_FAILED\"").expect("deserialize");
        assert_eq!(back, AgentStatus::InitFailed);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let snapshot = AgentSnapshot {
            agent_id: "a1".to_string(),
            name: "Agent One".to_string(),
            kind: "meta".to_string(),
            status: AgentStatus::Ready,
            registered_at: Utc::now(),
        };

        let json = serde_json::to_string(&snapshot).expect("serialize snapshot");
        let back: AgentSnapshot = serde_json::from_str(&json).expect("deserialize snapshot");
        assert_eq!(back, snapshot);
    }
}
