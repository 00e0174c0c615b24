//! Template content: bulk backup and the list of files to process.

use setup_fs::{NormalizedPath, io};

use crate::manager::ProjectFileManager;
use crate::Result;

/// Patterns covering everything the assistant may rewrite.
pub const TEMPLATE_PATTERNS: [&str; 7] = [
    "CLAUDE.md",
    "README.md",
    "PROMPT.md",
    "docs/**/*.md",
    "prompts/**/*.md",
    ".claude/**/*",
    "infrastructure/**/*",
];

/// Patterns of files whose placeholders get filled in.
pub const PROCESS_PATTERNS: [&str; 4] = [
    "CLAUDE.md",
    "README.md",
    "docs/**/*.md",
    ".claude/**/*.template",
];

impl ProjectFileManager {
    /// Copy all template content into a fresh backup directory.
    ///
    /// Relative structure is preserved, so `docs/guide.md` lands at
    /// `<backup>/docs/guide.md`. Returns the backup directory.
    pub fn backup_all_templates(&self) -> Result<NormalizedPath> {
        let backup_dir = self.create_backup_directory()?;
        let lister = self.template_lister()?;
        let mut copied = 0usize;

        for pattern in TEMPLATE_PATTERNS {
            for file in lister.expand(self.root(), pattern)? {
                let source = self.root().join(&file);
                if !source.exists() {
                    tracing::warn!(file = %file, "template vanished before backup");
                    continue;
                }
                io::copy_file(&source, &backup_dir.join(&file))?;
                tracing::debug!(file = %file, "template backed up");
                copied += 1;
            }
        }

        tracing::info!(dir = %backup_dir, files = copied, "templates backed up");
        Ok(backup_dir)
    }

    /// Files whose template placeholders should be processed, in pattern
    /// order. Overlapping patterns may list a file more than once.
    pub fn files_to_process(&self) -> Result<Vec<String>> {
        self.expand_all(&PROCESS_PATTERNS)
    }
}
