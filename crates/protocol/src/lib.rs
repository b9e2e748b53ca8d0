//! # ak-protocol
//!
//! Core data model definitions for agent-kit.
//!
//! This crate defines all shared data structures used for:
//! - Configuration file parsing (TOML config, Markdown agent definitions)
//! - Runtime lifecycle state tracking
//! - Lifecycle event notification between the registry and observers
//!
//! ## Modules
//!
//! - [`agent_models`]: Agent configuration structures
//! - [`config_models`]: Global configuration from config.toml
//! - [`lifecycle_models`]: Runtime agent status and registry snapshots
//! - [`events`]: Lifecycle events emitted by the agent manager
//!
//! ## Design Principles
//!
//! - Minimal dependencies: Only serde and chrono
//! - Independent compilation: No dependencies on other agent-kit crates

pub mod agent_models;
pub mod config_models;
pub mod events;
pub mod lifecycle_models;

// Re-export all public types for convenience
pub use agent_models::*;
pub use config_models::*;
pub use events::*;
pub use lifecycle_models::*;
