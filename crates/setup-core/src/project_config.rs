//! Project configuration record and technology-stack descriptor.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use setup_fs::{ConfigStore, ProjectPath, io};

use crate::manager::ProjectFileManager;
use crate::Result;

/// The technology stack chosen for a project.
///
/// Only `infrastructure` is interpreted; any other keys are carried through
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechStack {
    /// Free-text infrastructure identifier, e.g. `"AWS CDK"` or `"Vercel"`
    pub infrastructure: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl TechStack {
    pub fn new(infrastructure: impl Into<String>) -> Self {
        Self {
            infrastructure: infrastructure.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Whether the infrastructure identifier mentions `provider`, ignoring case.
    pub fn uses_provider(&self, provider: &str) -> bool {
        self.infrastructure
            .to_lowercase()
            .contains(&provider.to_lowercase())
    }
}

/// The record persisted to `.claude/project-config.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub project_name: String,
    pub project_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tech_stack: TechStack,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ProjectFileManager {
    /// Write `config` to `.claude/project-config.json` as two-space-indented
    /// JSON, replacing any previous content.
    pub fn save_project_config<T: Serialize + ?Sized>(&self, config: &T) -> Result<()> {
        io::ensure_dir(&self.path_of(ProjectPath::ClaudeDir))?;
        let path = self.path_of(ProjectPath::ProjectConfig);
        ConfigStore::new().save(&path, config)?;
        tracing::info!(path = %path, "project config written");
        Ok(())
    }
}
