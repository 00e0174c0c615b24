//! Well-known paths inside a scaffolded project.

use std::path::Path;

/// Fixed project-relative locations the setup assistant reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectPath {
    /// The `.backups` directory holding timestamped template backups
    BackupsDir,
    /// The `.claude` configuration directory
    ClaudeDir,
    /// `.claude/project-config.json`
    ProjectConfig,
    /// The `.gitignore` ignore list
    Gitignore,
    /// The `scripts` directory the assistant itself lives in
    ScriptsDir,
    /// `infrastructure/lib/stacks`, one file per deployable stack
    StacksDir,
}

impl ProjectPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BackupsDir => ".backups",
            Self::ClaudeDir => ".claude",
            Self::ProjectConfig => ".claude/project-config.json",
            Self::Gitignore => ".gitignore",
            Self::ScriptsDir => "scripts",
            Self::StacksDir => "infrastructure/lib/stacks",
        }
    }
}

impl AsRef<Path> for ProjectPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ProjectPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
