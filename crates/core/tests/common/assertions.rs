//! Custom assertion helpers over lifecycle events.

use ak_protocol::events::LifecycleEvent;
use tokio::sync::mpsc;

/// Drain every event currently buffered on the receiver.
#[allow(dead_code)]
pub fn drain_events(rx: &mut mpsc::Receiver<LifecycleEvent>) -> Vec<LifecycleEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

/// Whether the sequence contains an AgentReady event for the given id.
#[allow(dead_code)]
pub fn has_agent_ready(events: &[LifecycleEvent], id: &str) -> bool {
    events
        .iter()
        .any(|e| matches!(e, LifecycleEvent::AgentReady { agent_id } if agent_id == id))
}

/// Whether the sequence contains an AgentRemoved event for the given id.
#[allow(dead_code)]
pub fn has_agent_removed(events: &[LifecycleEvent], id: &str) -> bool {
    events
        .iter()
        .any(|e| matches!(e, LifecycleEvent::AgentRemoved { agent_id } if agent_id == id))
}

/// Extract the failed ids from the RegistryCleared event, if one was
/// emitted.
#[allow(dead_code)]
pub fn registry_cleared_failures(events: &[LifecycleEvent]) -> Option<Vec<String>> {
    events.iter().find_map(|e| match e {
        LifecycleEvent::RegistryCleared { failed_agent_ids } => Some(failed_agent_ids.clone()),
        _ => None,
    })
}

/// Count how many AgentRegistered events the sequence contains.
#[allow(dead_code)]
pub fn count_registered(events: &[LifecycleEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, LifecycleEvent::AgentRegistered { .. }))
        .count()
}
