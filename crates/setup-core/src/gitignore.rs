//! `.gitignore` maintenance.
//!
//! Presence is decided by exact line comparison: `foo/` and `/foo/` are
//! different lines even though git treats them alike.

use setup_fs::{ProjectPath, io};

use crate::manager::ProjectFileManager;
use crate::Result;

/// Ignore pattern covering the assistant's backup directories.
pub const BACKUP_IGNORE_PATTERN: &str = ".backups/";

/// Comment line written above [`BACKUP_IGNORE_PATTERN`].
pub const BACKUP_IGNORE_COMMENT: &str = "# Setup assistant backups";

impl ProjectFileManager {
    /// Ensure the backup pattern and each of `additional` appear in
    /// `.gitignore`. A project without a `.gitignore` is left alone.
    pub fn update_gitignore<S: AsRef<str>>(&self, additional: &[S]) -> Result<()> {
        let path = self.path_of(ProjectPath::Gitignore);
        if !path.exists() {
            tracing::debug!(path = %path, "no ignore file, skipping");
            return Ok(());
        }

        let content = io::read_text(&path)?;
        let mut lines: Vec<String> = content.split('\n').map(str::to_string).collect();
        let before = lines.len();

        if !contains_line(&lines, BACKUP_IGNORE_PATTERN) {
            lines.extend([
                String::new(),
                BACKUP_IGNORE_COMMENT.to_string(),
                BACKUP_IGNORE_PATTERN.to_string(),
            ]);
        }

        for pattern in additional {
            let pattern = pattern.as_ref();
            if !contains_line(&lines, pattern) {
                lines.push(pattern.to_string());
            }
        }

        io::write_text(&path, &lines.join("\n"))?;
        tracing::info!(path = %path, added = lines.len() - before, "ignore file updated");
        Ok(())
    }
}

fn contains_line(lines: &[String], line: &str) -> bool {
    lines.iter().any(|l| l == line)
}
