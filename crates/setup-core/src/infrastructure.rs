//! Pruning of infrastructure stack files the chosen stack does not use.
//!
//! Each file under `infrastructure/lib/stacks` is judged by a
//! [`RetentionPolicy`]. Retention rules always win over removal rules, so a
//! file matched by [`StackRule::AlwaysRetain`] survives any stack choice.

use setup_fs::{ProjectPath, io};

use crate::manager::ProjectFileManager;
use crate::project_config::TechStack;
use crate::Result;

/// Extension of stack definition files.
pub const STACK_FILE_EXTENSION: &str = ".ts";

/// One rule of a [`RetentionPolicy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackRule {
    /// Remove files naming `provider` when the stack's infrastructure does
    /// not mention it (case-insensitive).
    RemoveUnlessProvider { provider: String },
    /// Keep files whose name contains `fragment`, whatever the stack.
    AlwaysRetain { fragment: String },
}

impl StackRule {
    pub fn remove_unless_provider(provider: impl Into<String>) -> Self {
        Self::RemoveUnlessProvider {
            provider: provider.into(),
        }
    }

    pub fn always_retain(fragment: impl Into<String>) -> Self {
        Self::AlwaysRetain {
            fragment: fragment.into(),
        }
    }
}

/// Decides which stack files are unused for a given [`TechStack`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetentionPolicy {
    rules: Vec<StackRule>,
}

impl Default for RetentionPolicy {
    /// AWS stacks go unless AWS is chosen; the auth stack always stays.
    fn default() -> Self {
        Self::new(vec![
            StackRule::remove_unless_provider("aws"),
            StackRule::always_retain("auth-stack.ts"),
        ])
    }
}

impl RetentionPolicy {
    pub fn new(rules: Vec<StackRule>) -> Self {
        Self { rules }
    }

    /// Whether `file_name` is retained unconditionally.
    pub fn is_retained(&self, file_name: &str) -> bool {
        self.rules.iter().any(|rule| match rule {
            StackRule::AlwaysRetain { fragment } => file_name.contains(fragment.as_str()),
            StackRule::RemoveUnlessProvider { .. } => false,
        })
    }

    /// Whether `file_name` should be removed for `stack`.
    pub fn should_remove(&self, file_name: &str, stack: &TechStack) -> bool {
        if self.is_retained(file_name) {
            return false;
        }
        self.rules.iter().any(|rule| match rule {
            StackRule::RemoveUnlessProvider { provider } => {
                !stack.uses_provider(provider) && file_name.contains(provider.as_str())
            }
            StackRule::AlwaysRetain { .. } => false,
        })
    }
}

impl ProjectFileManager {
    /// Delete stack files `stack` does not use and return their file names in
    /// directory-listing order.
    ///
    /// A project without a stacks directory yields an empty list.
    pub fn remove_unused_infrastructure(&self, stack: &TechStack) -> Result<Vec<String>> {
        let stacks_dir = self.path_of(ProjectPath::StacksDir);
        if !stacks_dir.exists() {
            tracing::debug!(dir = %stacks_dir, "no stacks directory, nothing to prune");
            return Ok(Vec::new());
        }

        let mut removed = Vec::new();
        for entry in io::list_dir(&stacks_dir)? {
            if !entry.is_file || !entry.name.ends_with(STACK_FILE_EXTENSION) {
                continue;
            }
            if self.retention_policy().should_remove(&entry.name, stack) {
                io::remove_file(&entry.path)?;
                tracing::debug!(file = %entry.name, "removed unused stack");
                removed.push(entry.name);
            }
        }

        tracing::info!(
            infrastructure = %stack.infrastructure,
            removed = removed.len(),
            "infrastructure pruned"
        );
        Ok(removed)
    }
}
