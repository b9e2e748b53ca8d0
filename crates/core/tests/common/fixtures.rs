//! Test fixtures for creating sample configurations and test data.

use ak_protocol::agent_models::AgentConfig;
use tempfile::TempDir;

/// Create a test AgentConfig with the given id and kind.
#[allow(dead_code)]
pub fn create_test_config(id: &str, kind: &str) -> AgentConfig {
    AgentConfig {
        id: id.to_string(),
        name: format!("Test agent {}", id),
        kind: kind.to_string(),
        description: format!("Test agent {}", id),
        charter: String::new(),
    }
}

/// Create a temporary project directory with `.agent-kit` configuration.
///
/// This creates a complete test environment with:
/// - `.agent-kit/config.toml` wiring every resource endpoint
/// - `.agent-kit/agents/` directory with one definition per agent kind that
///   needs no external infrastructure, plus a marketplace agent
///
/// Returns a TempDir that must be kept alive for the test duration.
#[allow(dead_code)]
pub fn create_test_project() -> std::io::Result<TempDir> {
    let temp_dir = tempfile::tempdir()?;
    let root = temp_dir.path();

    // Create directory structure
    std::fs::create_dir_all(root.join(".agent-kit/agents"))?;

    // Global configuration
    let config_toml = r#"
cache-url = "memory://local"
database-url = "postgres://localhost/marketplace"
deepseek-api-key = "sk-test"
qiskit-api-key = "qk-test"
"#;
    std::fs::write(root.join(".agent-kit/config.toml"), config_toml)?;

    // Agent definitions
    let codebase_md = r#"---
id: codebase-1
name: Codebase Manager
kind: codebase-management
description: Keeps the analysis index fresh
---
Track dependency drift and surface refactoring opportunities."#;

    let collab_md = r#"---
id: collab-1
name: Collaboration Coordinator
kind: collaboration-coordinator
description: Coordinates live sessions
---
Keep review sessions alive across reconnects."#;

    let marketplace_md = r#"---
id: marketplace-1
name: Marketplace Optimizer
kind: marketplace-optimization
description: Tunes listings for conversion
---
Re-rank listings nightly."#;

    let meta_md = r#"---
id: meta-1
name: Meta Agent
kind: meta
description: Reasons about the other agents
---
- route work
- summarize status"#;

    std::fs::write(root.join(".agent-kit/agents/codebase-1.md"), codebase_md)?;
    std::fs::write(root.join(".agent-kit/agents/collab-1.md"), collab_md)?;
    std::fs::write(
        root.join(".agent-kit/agents/marketplace-1.md"),
        marketplace_md,
    )?;
    std::fs::write(root.join(".agent-kit/agents/meta-1.md"), meta_md)?;

    Ok(temp_dir)
}
