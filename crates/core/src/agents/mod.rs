//! Agent abstraction and lifecycle management.
//!
//! This module provides the `Agent` trait (capability-based dispatch over
//! the variant set), the `AgentFactory` for constructing variants, and the
//! `AgentManager` registry that coordinates initialization and shutdown.

pub mod adapters;
pub mod agent_kind;
pub mod base;
pub mod factory;
pub mod manager;

pub use adapters::MockAgent;
pub use agent_kind::AgentKind;
pub use base::{Agent, AgentError};
pub use factory::{AgentFactory, AgentResources};
pub use manager::{AgentManager, ShutdownAllError};
