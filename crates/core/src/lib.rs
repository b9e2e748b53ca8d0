//! # ak-core
//!
//! Agent lifecycle registry and factory for agent-kit.
//!
//! This crate provides:
//! - Configuration loading from the `.agent-kit/` directory
//! - The `Agent` lifecycle trait and its variant implementations
//! - An `AgentFactory` for constructing variants from configuration
//! - An `AgentManager` registry coordinating concurrent initialize/shutdown
//!
//! ## Modules
//!
//! - [`agents`]: Agent trait, factory, registry, and variant implementations
//! - [`clients`]: Cache and database client seams
//! - [`config`]: Configuration loading and management
//! - [`logging`]: Tracing subscriber bootstrap

pub mod agents;
pub mod clients;
pub mod config;
pub mod logging;
