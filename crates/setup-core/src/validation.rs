//! Project structure validation.

use crate::manager::ProjectFileManager;

/// Files every scaffolded project must contain, checked in this order.
pub const REQUIRED_FILES: [&str; 8] = [
    "CLAUDE.md",
    "README.md",
    "CUSTOMIZATION_GUIDE.md",
    "docs/tech-stack.md",
    "prompts/basic-development.md",
    "prompts/enterprise-development.md",
    "prompts/opensource-development.md",
    "prompts/startup-development.md",
];

/// Directories every scaffolded project must contain, checked after the files.
pub const REQUIRED_DIRS: [&str; 4] = ["docs", "prompts", "infrastructure", ".github/workflows"];

/// Outcome of [`ProjectFileManager::validate_project_structure`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ValidationReport {
    /// `true` iff `issues` is empty
    pub valid: bool,
    /// One entry per missing file, then one per missing directory
    pub issues: Vec<String>,
}

impl ValidationReport {
    fn from_issues(issues: Vec<String>) -> Self {
        Self {
            valid: issues.is_empty(),
            issues,
        }
    }
}

impl ProjectFileManager {
    /// Check that the required files and directories exist. Read-only.
    pub fn validate_project_structure(&self) -> ValidationReport {
        let mut issues = Vec::new();

        for file in REQUIRED_FILES {
            if !self.root().join(file).exists() {
                issues.push(format!("Required file not found: {file}"));
            }
        }

        for dir in REQUIRED_DIRS {
            if !self.root().join(dir).exists() {
                issues.push(format!("Required directory not found: {dir}"));
            }
        }

        tracing::debug!(issues = issues.len(), "project structure validated");
        ValidationReport::from_issues(issues)
    }
}
