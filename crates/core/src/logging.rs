//! Logging bootstrap for binaries and tests.
//!
//! The core logs through `tracing`; this module wires a subscriber for
//! callers that don't bring their own.

use std::env;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Logging configuration entry point.
pub struct LoggingConfig;

impl LoggingConfig {
    /// Initialize the logging system.
    ///
    /// Environment variables:
    /// - `RUST_LOG`: standard filter directives (error, warn, info, debug, trace)
    /// - `AGENT_KIT_DEBUG`: enable verbose output with source locations
    ///
    /// Safe to call more than once; subsequent calls are no-ops.
    pub fn init() {
        let is_debug = env::var("AGENT_KIT_DEBUG").is_ok();

        let env_filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => {
                if is_debug {
                    EnvFilter::new("ak_core=debug,info")
                } else {
                    EnvFilter::new("ak_core=info,warn")
                }
            }
        };

        let fmt_layer = if is_debug {
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
        } else {
            fmt::layer()
                .with_target(false)
                .with_file(false)
                .with_line_number(false)
                .with_thread_ids(false)
        };

        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init();
    }

    /// Initialize the logging system with a custom filter.
    pub fn init_with_filter(filter: &str) {
        let env_filter = EnvFilter::new(filter);

        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer())
            .try_init();
    }

    /// Check whether verbose debug mode is enabled.
    pub fn is_debug() -> bool {
        env::var("AGENT_KIT_DEBUG").is_ok()
    }
}
