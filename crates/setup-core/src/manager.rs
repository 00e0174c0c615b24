//! The [`ProjectFileManager`] handle and root resolution.
//!
//! Operations live in sibling modules as further `impl ProjectFileManager`
//! blocks; this module owns construction and the helpers they share.

use std::path::Path;

use chrono::{SecondsFormat, Utc};
use setup_fs::{NormalizedPath, PatternLister, ProjectPath};

use crate::infrastructure::RetentionPolicy;
use crate::Result;

/// Directories never expanded into by template patterns.
pub(crate) const TEMPLATE_EXCLUDES: [&str; 3] = ["node_modules/**", "scripts/**", ".backups/**"];

/// Performs file lifecycle operations against one project root.
#[derive(Debug, Clone)]
pub struct ProjectFileManager {
    /// Root of the project; every relative path resolves against it
    root: NormalizedPath,
    /// Decides which infrastructure stack files are pruned
    retention: RetentionPolicy,
}

impl ProjectFileManager {
    /// Create a manager anchored at `root`.
    ///
    /// Relative roots are made absolute against the process directory. When
    /// `root` is the assistant's own `scripts` directory, its parent is used
    /// instead so the manager always anchors at the project root.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let given = match std::path::absolute(root) {
            Ok(absolute) => NormalizedPath::new(absolute),
            Err(err) => {
                tracing::warn!(root = %root.display(), error = %err, "could not absolutize root");
                NormalizedPath::new(root)
            }
        };
        let in_scripts = given.file_name() == Some(ProjectPath::ScriptsDir.as_str());
        let root = match given.parent() {
            Some(parent) if in_scripts => parent,
            _ => given,
        };
        tracing::debug!(root = %root, "project file manager anchored");
        Self {
            root,
            retention: RetentionPolicy::default(),
        }
    }

    /// Replace the infrastructure retention policy.
    pub fn with_retention_policy(mut self, retention: RetentionPolicy) -> Self {
        self.retention = retention;
        self
    }

    /// The effective project root.
    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn retention_policy(&self) -> &RetentionPolicy {
        &self.retention
    }

    /// Resolve a path against the root; absolute paths pass through.
    pub fn resolve(&self, path: impl AsRef<Path>) -> NormalizedPath {
        self.root.resolve(path)
    }

    /// Path of a well-known project location.
    pub fn path_of(&self, path: ProjectPath) -> NormalizedPath {
        self.root.join(path.as_str())
    }

    pub(crate) fn template_lister(&self) -> Result<PatternLister> {
        Ok(PatternLister::new(TEMPLATE_EXCLUDES)?)
    }

    /// Expand each pattern in order and concatenate the matches.
    pub(crate) fn expand_all(&self, patterns: &[&str]) -> Result<Vec<String>> {
        let lister = self.template_lister()?;
        let mut files = Vec::new();
        for pattern in patterns {
            files.extend(lister.expand(&self.root, pattern)?);
        }
        Ok(files)
    }
}

/// Current UTC time as a filename-safe token, e.g. `2026-10-16T08-15-30-123Z`.
pub fn timestamp_token() -> String {
    Utc::now()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-")
}
