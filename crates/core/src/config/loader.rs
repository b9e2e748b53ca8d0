//! Configuration file loader for the `.agent-kit/` directory structure.
//!
//! This module provides functionality to load and parse all configuration
//! files from the `.agent-kit/` directory, including:
//! - `config.toml`: Global settings and resource endpoints
//! - `agents/*.md`: Agent definitions with YAML front matter

use crate::config::error::ConfigError;
use crate::config::error::ConfigResult;
use crate::config::models::AppConfig;
use ak_protocol::agent_models::AgentConfig;
use ak_protocol::config_models::GlobalConfig;
use gray_matter::engine::YAML;
use gray_matter::Matter;
use std::collections::HashSet;
use std::path::Path;
use walkdir::WalkDir;

/// Loads all configuration from the `.agent-kit/` directory.
///
/// This function scans the `.agent-kit/` directory and loads:
/// - Global configuration from `config.toml`
/// - Agent definitions from `agents/*.md` files
///
/// # Arguments
///
/// * `root` - Root directory containing the `.agent-kit/` folder
///
/// # Returns
///
/// An `AppConfig` containing all loaded configuration. If directories or
/// files are missing (but the root exists), returns an empty/default
/// configuration rather than an error.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - Files exist but cannot be read
/// - Files have invalid syntax (TOML or Markdown front matter)
/// - Required fields are missing in configuration files
/// - Two agent definitions share the same id
///
/// # Example
///
/// ```rust,no_run
/// use ak_core::config::loader::load_config;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new(".")).await?;
/// println!("Loaded {} agents", config.agents.len());
/// # Ok(())
/// # }
/// ```
pub async fn load_config(root: &Path) -> ConfigResult<AppConfig> {
    let ak_dir = root.join(".agent-kit");

    // If .agent-kit doesn't exist, return default config
    if !ak_dir.exists() {
        return Ok(AppConfig::default());
    }

    // Load global config
    let global = load_global_config(&ak_dir)?;

    // Load agents
    let agents = load_agents(&ak_dir)?;

    Ok(AppConfig { global, agents })
}

/// Loads global configuration from `config.toml`.
fn load_global_config(ak_dir: &Path) -> ConfigResult<GlobalConfig> {
    let config_path = ak_dir.join("config.toml");

    // If config.toml doesn't exist, return default
    if !config_path.exists() {
        return Ok(GlobalConfig::default());
    }

    let content =
        std::fs::read_to_string(&config_path).map_err(|source| ConfigError::FileRead {
            path: config_path.clone(),
            source,
        })?;

    let config: GlobalConfig =
        toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
            path: config_path,
            source,
        })?;

    Ok(config)
}

/// Loads all agent definitions from `agents/*.md`.
fn load_agents(ak_dir: &Path) -> ConfigResult<Vec<AgentConfig>> {
    let agents_dir = ak_dir.join("agents");

    // If agents directory doesn't exist, return empty vector
    if !agents_dir.exists() {
        return Ok(Vec::new());
    }

    let mut agents: Vec<AgentConfig> = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();

    // Walk through all .md files in the agents directory
    for entry in WalkDir::new(&agents_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
    {
        let entry = entry.map_err(|source| ConfigError::DirectoryWalk {
            path: agents_dir.clone(),
            source,
        })?;

        let path = entry.path();

        // Only process .md files
        if path.extension().and_then(|s| s.to_str()) != Some("md") {
            continue;
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        // Parse Markdown with YAML front matter
        let matter = Matter::<YAML>::new();
        let result = matter.parse(&content);

        let mut agent: AgentConfig = result
            .data
            .ok_or_else(|| ConfigError::MarkdownParse {
                path: path.to_path_buf(),
                reason: "Missing YAML front matter".to_string(),
            })?
            .deserialize()
            .map_err(|e| ConfigError::MarkdownParse {
                path: path.to_path_buf(),
                reason: format!("Failed to deserialize front matter: {}", e),
            })?;

        if agent.id.trim().is_empty() {
            return Err(ConfigError::InvalidConfig {
                path: path.to_path_buf(),
                reason: "Agent id must not be empty".to_string(),
            });
        }

        // Ids are registry keys; a duplicate would silently shadow another
        // definition at registration time, so reject it here.
        if !seen_ids.insert(agent.id.clone()) {
            return Err(ConfigError::InvalidConfig {
                path: path.to_path_buf(),
                reason: format!("Duplicate agent id '{}'", agent.id),
            });
        }

        // Set the charter from the markdown body
        agent.charter = result.content;

        agents.push(agent);
    }

    Ok(agents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    /// Acceptance test: a complete `.agent-kit/` structure loads end to end.
    #[tokio::test]
    async fn test_load_config_acceptance() {
        // Setup: Create temporary .agent-kit directory structure
        let dir = tempdir().expect("Failed to create temp dir");
        let root = dir.path();
        let ak_dir = root.join(".agent-kit");

        fs::create_dir_all(ak_dir.join("agents")).expect("Failed to create agents dir");

        // Write config.toml
        let config_toml = r#"
cache-url = "redis://127.0.0.1:6379"
database-url = "postgres://localhost/marketplace"
deepseek-api-key = "sk-test"
"#;
        fs::write(ak_dir.join("config.toml"), config_toml).expect("Failed to write config.toml");

        // Write an agent definition (Markdown with YAML front matter)
        let agent_md = r#"---
id: codebase-1
name: Codebase Manager
kind: codebase-management
description: Keeps the analysis index fresh
---

Track dependency drift and surface refactoring opportunities."#;
        fs::write(ak_dir.join("agents/codebase-1.md"), agent_md)
            .expect("Failed to write agent file");

        // Act: Load configuration
        let config = load_config(root).await.expect("Failed to load config");

        // Assert: Verify all configuration was loaded correctly

        // Global config
        assert_eq!(
            config.global.cache_url.as_deref(),
            Some("redis://127.0.0.1:6379")
        );
        assert_eq!(
            config.global.database_url.as_deref(),
            Some("postgres://localhost/marketplace")
        );
        assert_eq!(config.global.deepseek_api_key.as_deref(), Some("sk-test"));
        assert!(config.global.qiskit_api_key.is_none());

        // Agents
        assert_eq!(config.agents.len(), 1, "Should load 1 agent");
        let agent = &config.agents[0];
        assert_eq!(agent.id, "codebase-1");
        assert_eq!(agent.name, "Codebase Manager");
        assert_eq!(agent.kind, "codebase-management");
        assert_eq!(agent.description, "Keeps the analysis index fresh");
        assert!(
            agent.charter.contains("dependency drift"),
            "Charter should be loaded from markdown body"
        );
    }

    /// Loading from an empty directory (no .agent-kit folder) should return
    /// a default/empty configuration, not an error.
    #[tokio::test]
    async fn test_load_config_empty_directory() {
        let dir = tempdir().expect("Failed to create temp dir");
        let root = dir.path();

        // No .agent-kit directory exists
        let config = load_config(root)
            .await
            .expect("Should handle missing .agent-kit");

        // Should return empty/default configuration
        assert_eq!(config.global, GlobalConfig::default());
        assert!(config.agents.is_empty(), "Should have no agents");
    }

    /// Partial configuration (only config.toml exists).
    #[tokio::test]
    async fn test_load_config_partial() {
        let dir = tempdir().expect("Failed to create temp dir");
        let root = dir.path();
        let ak_dir = root.join(".agent-kit");

        fs::create_dir_all(&ak_dir).expect("Failed to create .agent-kit");

        // Only write config.toml
        fs::write(ak_dir.join("config.toml"), "qiskit-api-key = \"qk-test\"")
            .expect("Failed to write config.toml");

        let config = load_config(root).await.expect("Should handle partial config");

        assert_eq!(config.global.qiskit_api_key.as_deref(), Some("qk-test"));
        assert!(config.agents.is_empty(), "Should have no agents");
    }

    /// Invalid TOML syntax.
    #[tokio::test]
    async fn test_load_config_invalid_toml() {
        let dir = tempdir().expect("Failed to create temp dir");
        let root = dir.path();
        let ak_dir = root.join(".agent-kit");

        fs::create_dir_all(&ak_dir).expect("Failed to create .agent-kit");

        // Write invalid TOML
        fs::write(ak_dir.join("config.toml"), "cache-url = [invalid toml")
            .expect("Failed to write config.toml");

        let result = load_config(root).await;
        assert!(result.is_err(), "Should fail on invalid TOML");

        if let Err(ConfigError::TomlParse { path, .. }) = result {
            assert!(path.ends_with("config.toml"));
        } else {
            panic!("Expected TomlParse error");
        }
    }

    /// Agent markdown file without front matter.
    #[tokio::test]
    async fn test_load_config_agent_no_frontmatter() {
        let dir = tempdir().expect("Failed to create temp dir");
        let root = dir.path();
        let ak_dir = root.join(".agent-kit");

        fs::create_dir_all(ak_dir.join("agents")).expect("Failed to create agents dir");

        // Write markdown without front matter
        let no_frontmatter = "Just plain markdown content";
        fs::write(ak_dir.join("agents/test.md"), no_frontmatter)
            .expect("Failed to write agent file");

        let result = load_config(root).await;
        assert!(result.is_err(), "Should fail on agent without front matter");

        if let Err(ConfigError::MarkdownParse { path, reason }) = result {
            assert!(path.ends_with("test.md"));
            assert!(reason.contains("Missing YAML front matter"));
        } else {
            panic!("Expected MarkdownParse error");
        }
    }

    /// Agent markdown file with incomplete front matter.
    #[tokio::test]
    async fn test_load_config_agent_invalid_frontmatter() {
        let dir = tempdir().expect("Failed to create temp dir");
        let root = dir.path();
        let ak_dir = root.join(".agent-kit");

        fs::create_dir_all(ak_dir.join("agents")).expect("Failed to create agents dir");

        // Write markdown with incomplete front matter (missing required fields)
        let invalid_frontmatter = r#"---
id: test-agent
# Missing required fields: name, kind, description
---

Agent content"#;
        fs::write(ak_dir.join("agents/test.md"), invalid_frontmatter)
            .expect("Failed to write agent file");

        let result = load_config(root).await;
        assert!(
            result.is_err(),
            "Should fail on agent with invalid front matter"
        );

        if let Err(ConfigError::MarkdownParse { path, reason }) = result {
            assert!(path.ends_with("test.md"));
            assert!(reason.contains("Failed to deserialize"));
        } else {
            panic!("Expected MarkdownParse error");
        }
    }

    /// Duplicate agent ids across definition files are rejected.
    #[tokio::test]
    async fn test_load_config_duplicate_agent_id() {
        let dir = tempdir().expect("Failed to create temp dir");
        let root = dir.path();
        let ak_dir = root.join(".agent-kit");

        fs::create_dir_all(ak_dir.join("agents")).expect("Failed to create agents dir");

        for file in ["first.md", "second.md"] {
            let agent_md = r#"---
id: duplicated
name: Duplicated
kind: meta
description: Same id in two files
---

Charter"#;
            fs::write(ak_dir.join("agents").join(file), agent_md)
                .expect("Failed to write agent file");
        }

        let result = load_config(root).await;
        assert!(result.is_err(), "Should fail on duplicate agent ids");

        if let Err(ConfigError::InvalidConfig { reason, .. }) = result {
            assert!(reason.contains("duplicated"));
        } else {
            panic!("Expected InvalidConfig error");
        }
    }

    /// Loading multiple agent definitions.
    #[tokio::test]
    async fn test_load_config_multiple_files() {
        let dir = tempdir().expect("Failed to create temp dir");
        let root = dir.path();
        let ak_dir = root.join(".agent-kit");

        fs::create_dir_all(ak_dir.join("agents")).expect("Failed to create agents dir");

        // Write multiple agent files
        for i in 1..=3 {
            let agent_md = format!(
                r#"---
id: agent-{}
name: Agent {}
kind: meta
description: Test agent {}
---

Charter for agent {}"#,
                i, i, i, i
            );
            fs::write(ak_dir.join(format!("agents/agent-{}.md", i)), agent_md)
                .expect("Failed to write agent file");
        }

        let config = load_config(root).await.expect("Should load multiple files");

        assert_eq!(config.agents.len(), 3, "Should load 3 agents");
    }

    /// Non-matching files are ignored.
    #[tokio::test]
    async fn test_load_config_ignores_non_matching_files() {
        let dir = tempdir().expect("Failed to create temp dir");
        let root = dir.path();
        let ak_dir = root.join(".agent-kit");

        fs::create_dir_all(ak_dir.join("agents")).expect("Failed to create agents dir");

        // Write a file with the wrong extension
        fs::write(ak_dir.join("agents/readme.txt"), "Not a markdown file")
            .expect("Failed to write txt file");

        // Write one valid file
        let agent_md = r#"---
id: valid-agent
name: Valid Agent
kind: meta
description: Valid agent
---

Valid content"#;
        fs::write(ak_dir.join("agents/valid.md"), agent_md).expect("Failed to write agent file");

        let config = load_config(root)
            .await
            .expect("Should ignore non-matching files");

        assert_eq!(config.agents.len(), 1, "Should only load .md files");
        assert_eq!(config.agents[0].id, "valid-agent");
    }
}
