//! Agent manager: the registry and lifecycle coordinator.
//!
//! The `AgentManager` is the sole authority over which agents are live and
//! visible to the rest of the system. It coordinates registration
//! (construct-then-initialize), deregistration (shutdown-then-remove),
//! lookup, and bulk shutdown across every registered agent concurrently.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use ak_protocol::events::LifecycleEvent;
use ak_protocol::lifecycle_models::{AgentSnapshot, AgentStatus};
use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::agents::base::{Agent, AgentError};

/// Aggregate failure from `shutdown_all`.
///
/// Carries every `(agent id, error)` pair from the concurrent shutdown
/// calls that failed. The registry was cleared regardless; this error only
/// reports what went wrong on the way out.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} agent(s) failed to shut down", .failures.len())]
pub struct ShutdownAllError {
    failures: Vec<(String, AgentError)>,
}

impl ShutdownAllError {
    /// The per-agent failures, in snapshot order.
    pub fn failures(&self) -> &[(String, AgentError)] {
        &self.failures
    }

    /// The ids of the agents whose shutdown failed.
    pub fn failed_ids(&self) -> Vec<&str> {
        self.failures.iter().map(|(id, _)| id.as_str()).collect()
    }
}

/// One registry record: the owned agent instance plus the lifecycle state
/// the manager tracks for it.
struct AgentRecord {
    agent: Arc<dyn Agent>,
    status: AgentStatus,
    registered_at: DateTime<Utc>,
}

impl AgentRecord {
    fn new(agent: Arc<dyn Agent>) -> Self {
        Self {
            agent,
            status: AgentStatus::Registered,
            registered_at: Utc::now(),
        }
    }
}

/// Manages all registered agents and coordinates their lifecycle.
///
/// The manager owns the only shared mutable state in the core: the mapping
/// from agent id to record. The mapping is guarded by a mutex with short
/// critical sections; agent initialize/shutdown futures are never awaited
/// while the lock is held, so slow agents never block unrelated registry
/// operations.
///
/// Instances are plain values with no ambient global state; tests create
/// isolated managers freely.
pub struct AgentManager {
    /// Registry of all agents, indexed by their configured id.
    agents: Arc<Mutex<HashMap<String, AgentRecord>>>,

    /// Optional channel for lifecycle event notification.
    events_tx: Option<mpsc::Sender<LifecycleEvent>>,
}

impl AgentManager {
    /// Create a new manager with an empty registry and no event channel.
    pub fn new() -> Self {
        Self {
            agents: Arc::new(Mutex::new(HashMap::new())),
            events_tx: None,
        }
    }

    /// Attach a channel that receives lifecycle events.
    ///
    /// Emission is best-effort: a closed or full channel never fails a
    /// registry operation.
    pub fn with_events(mut self, events_tx: mpsc::Sender<LifecycleEvent>) -> Self {
        self.events_tx = Some(events_tx);
        self
    }

    /// Register an agent and initialize it.
    ///
    /// The agent is inserted into the registry keyed by its configured id
    /// BEFORE its initialize operation is awaited. If initialization fails
    /// the error propagates to the caller and the agent remains registered
    /// in the `InitFailed` state, available for inspection or retried
    /// registration; "registered" and "ready" are distinct conditions by
    /// contract.
    ///
    /// Registering a second agent under an id that is already present
    /// overwrites the record. The replaced agent is NOT shut down; a
    /// warning and the `replaced` flag on the emitted event surface the
    /// overwrite.
    ///
    /// # Arguments
    ///
    /// * `agent` - The agent to register; must carry a unique id
    ///
    /// # Errors
    ///
    /// Returns the agent's initialization error unchanged.
    pub async fn register_agent(&self, agent: Arc<dyn Agent>) -> Result<(), AgentError> {
        let id = agent.id().to_string();

        let replaced = {
            let mut agents = self.agents.lock().unwrap();
            agents
                .insert(id.clone(), AgentRecord::new(Arc::clone(&agent)))
                .is_some()
        };
        if replaced {
            warn!(
                agent_id = %id,
                "replacing an already registered agent; the previous instance was not shut down"
            );
        }
        self.emit(LifecycleEvent::AgentRegistered {
            agent_id: id.clone(),
            replaced,
        })
        .await;

        match agent.initialize().await {
            Ok(()) => {
                self.update_status(&id, &agent, AgentStatus::Ready);
                info!(agent_id = %id, "agent initialized and ready");
                self.emit(LifecycleEvent::AgentReady { agent_id: id }).await;
                Ok(())
            }
            Err(e) => {
                self.update_status(&id, &agent, AgentStatus::InitFailed);
                error!(
                    agent_id = %id,
                    error = %e,
                    "agent initialization failed; agent remains registered"
                );
                self.emit(LifecycleEvent::AgentInitFailed {
                    agent_id: id,
                    error: e.to_string(),
                })
                .await;
                Err(e)
            }
        }
    }

    /// Shut down and remove a single agent.
    ///
    /// # Arguments
    ///
    /// * `id` - The registry id to remove
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the agent was shut down and removed, `Ok(false)` if no
    /// agent with that id was registered (a normal outcome, not an error).
    ///
    /// # Errors
    ///
    /// Returns the agent's shutdown error unchanged. On failure the entry
    /// stays in the registry with its previous status restored, so the
    /// caller can retry.
    pub async fn unregister_agent(&self, id: &str) -> Result<bool, AgentError> {
        let target = {
            let mut agents = self.agents.lock().unwrap();
            agents.get_mut(id).map(|record| {
                let previous_status = record.status;
                record.status = AgentStatus::ShuttingDown;
                (Arc::clone(&record.agent), previous_status)
            })
        };
        let Some((agent, previous_status)) = target else {
            debug!(agent_id = %id, "unregister requested for unknown agent");
            return Ok(false);
        };
        self.emit(LifecycleEvent::AgentShuttingDown {
            agent_id: id.to_string(),
        })
        .await;

        if let Err(e) = agent.shutdown().await {
            error!(agent_id = %id, error = %e, "agent shutdown failed; agent remains registered");
            self.update_status(id, &agent, previous_status);
            return Err(e);
        }

        {
            // Remove only if the record still holds the instance we shut
            // down; a replacement registered mid-shutdown stays untouched.
            let mut agents = self.agents.lock().unwrap();
            if agents
                .get(id)
                .is_some_and(|record| Arc::ptr_eq(&record.agent, &agent))
            {
                agents.remove(id);
            }
        }
        info!(agent_id = %id, "agent shut down and removed");
        self.emit(LifecycleEvent::AgentRemoved {
            agent_id: id.to_string(),
        })
        .await;
        Ok(true)
    }

    /// Look up an agent by id.
    ///
    /// Synchronous and read-only: never blocks on lifecycle work, never
    /// mutates the registry. An agent whose initialization failed is still
    /// returned; check `agent_status` to distinguish registered from ready.
    pub fn get_agent(&self, id: &str) -> Option<Arc<dyn Agent>> {
        let agents = self.agents.lock().unwrap();
        agents.get(id).map(|record| Arc::clone(&record.agent))
    }

    /// Snapshot of all registered agents, in registration order.
    ///
    /// Ties on the registration timestamp fall back to id order so the
    /// result is deterministic.
    pub fn get_all_agents(&self) -> Vec<Arc<dyn Agent>> {
        let mut entries: Vec<(DateTime<Utc>, String, Arc<dyn Agent>)> = {
            let agents = self.agents.lock().unwrap();
            agents
                .iter()
                .map(|(id, record)| (record.registered_at, id.clone(), Arc::clone(&record.agent)))
                .collect()
        };
        entries.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
        entries.into_iter().map(|(_, _, agent)| agent).collect()
    }

    /// The lifecycle status the manager tracks for an agent.
    pub fn agent_status(&self, id: &str) -> Option<AgentStatus> {
        let agents = self.agents.lock().unwrap();
        agents.get(id).map(|record| record.status)
    }

    /// Point-in-time view of every registry record, in registration order.
    pub fn snapshot(&self) -> Vec<AgentSnapshot> {
        let mut snapshots: Vec<AgentSnapshot> = {
            let agents = self.agents.lock().unwrap();
            agents
                .iter()
                .map(|(id, record)| {
                    let config = record.agent.config();
                    AgentSnapshot {
                        agent_id: id.clone(),
                        name: config.name.clone(),
                        kind: config.kind.clone(),
                        status: record.status,
                        registered_at: record.registered_at,
                    }
                })
                .collect()
        };
        snapshots.sort_by(|a, b| {
            a.registered_at
                .cmp(&b.registered_at)
                .then_with(|| a.agent_id.cmp(&b.agent_id))
        });
        snapshots
    }

    /// List all registered agent ids, in lexicographic order.
    pub fn list_agents(&self) -> Vec<String> {
        let mut ids: Vec<String> = {
            let agents = self.agents.lock().unwrap();
            agents.keys().cloned().collect()
        };
        ids.sort();
        ids
    }

    /// Check if an agent with the given id is registered.
    pub fn has_agent(&self, id: &str) -> bool {
        self.agents.lock().unwrap().contains_key(id)
    }

    /// The number of registered agents.
    pub fn agent_count(&self) -> usize {
        self.agents.lock().unwrap().len()
    }

    /// Shut down every registered agent concurrently and clear the registry.
    ///
    /// Takes a snapshot of the current agents, spawns one task per agent so
    /// all shutdown calls run concurrently, and waits for every one to
    /// complete or fail. The registry is then cleared unconditionally:
    /// best-effort per agent, all-or-nothing in its clearing effect.
    ///
    /// # Errors
    ///
    /// Returns a `ShutdownAllError` naming each agent whose shutdown failed
    /// (a panicked shutdown task counts as a failure for its agent). The
    /// registry is empty afterwards either way.
    pub async fn shutdown_all(&self) -> Result<(), ShutdownAllError> {
        let snapshot: Vec<(String, Arc<dyn Agent>)> = {
            let mut agents = self.agents.lock().unwrap();
            agents
                .iter_mut()
                .map(|(id, record)| {
                    record.status = AgentStatus::ShuttingDown;
                    (id.clone(), Arc::clone(&record.agent))
                })
                .collect()
        };
        info!(agent_count = snapshot.len(), "shutting down all agents");

        // Fan out: one task per agent, all shutdowns in flight at once.
        let mut handles = Vec::with_capacity(snapshot.len());
        for (id, agent) in snapshot {
            let handle = tokio::spawn(async move { agent.shutdown().await });
            handles.push((id, handle));
        }

        // Fan in: every handle is awaited before the registry is touched.
        let mut failures = Vec::new();
        for (id, handle) in handles {
            match handle.await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    error!(agent_id = %id, error = %e, "agent shutdown failed");
                    failures.push((id, e));
                }
                Err(e) => {
                    error!(agent_id = %id, error = %e, "agent shutdown task panicked");
                    failures.push((
                        id,
                        AgentError::ShutdownFailed(format!("shutdown task panicked: {}", e)),
                    ));
                }
            }
        }

        // Cleared even when individual shutdowns failed.
        self.agents.lock().unwrap().clear();

        let failed_agent_ids: Vec<String> = failures.iter().map(|(id, _)| id.clone()).collect();
        self.emit(LifecycleEvent::RegistryCleared { failed_agent_ids })
            .await;

        if failures.is_empty() {
            Ok(())
        } else {
            Err(ShutdownAllError { failures })
        }
    }

    /// Set the tracked status, but only while the record still holds the
    /// given instance. Guards against a concurrent replacement racing a
    /// slow initialize or shutdown.
    fn update_status(&self, id: &str, agent: &Arc<dyn Agent>, status: AgentStatus) {
        let mut agents = self.agents.lock().unwrap();
        if let Some(record) = agents.get_mut(id) {
            if Arc::ptr_eq(&record.agent, agent) {
                record.status = status;
            }
        }
    }

    async fn emit(&self, event: LifecycleEvent) {
        if let Some(tx) = &self.events_tx {
            let _ = tx.send(event).await;
        }
    }
}

impl Default for AgentManager {
    fn default() -> Self {
        Self::new()
    }
}
