//! Single-file backups, backup directories and restore.
//!
//! Backups are never deleted by the assistant; they accumulate under
//! `.backups/setup-<timestamp>/` and as `<file>.backup.<timestamp>` siblings.

use std::path::Path;

use setup_fs::{NormalizedPath, PatternLister, ProjectPath, io};

use crate::manager::{ProjectFileManager, timestamp_token};
use crate::{Error, Result};

/// Prefix of every backup directory name under `.backups/`.
pub const BACKUP_DIR_PREFIX: &str = "setup-";

impl ProjectFileManager {
    /// Copy one file to `<file>.backup.<timestamp>` next to it.
    ///
    /// Returns `None` when the file does not exist; nothing is created then.
    pub fn create_backup(&self, path: impl AsRef<Path>) -> Result<Option<NormalizedPath>> {
        let source = self.resolve(path);
        if !source.exists() {
            tracing::debug!(path = %source, "nothing to back up");
            return Ok(None);
        }

        let backup = NormalizedPath::new(format!("{}.backup.{}", source, timestamp_token()));
        io::copy_file(&source, &backup)?;
        tracing::info!(source = %source, backup = %backup, "file backed up");
        Ok(Some(backup))
    }

    /// Create `.backups/setup-<timestamp>` (and any missing parents).
    pub fn create_backup_directory(&self) -> Result<NormalizedPath> {
        let dir = self
            .path_of(ProjectPath::BackupsDir)
            .join(&format!("{BACKUP_DIR_PREFIX}{}", timestamp_token()));
        io::ensure_dir(&dir)?;
        tracing::debug!(dir = %dir, "backup directory ready");
        Ok(dir)
    }

    /// All backup directories under `.backups/`, oldest first.
    pub fn list_backups(&self) -> Result<Vec<NormalizedPath>> {
        let backups_dir = self.path_of(ProjectPath::BackupsDir);
        if !backups_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut backups: Vec<NormalizedPath> = io::list_dir(&backups_dir)?
            .into_iter()
            .filter(|entry| entry.is_dir && entry.name.starts_with(BACKUP_DIR_PREFIX))
            .map(|entry| entry.path)
            .collect();
        // Timestamp tokens sort chronologically as plain strings
        backups.sort();
        Ok(backups)
    }

    /// Copy every file of `backup_dir` back to the same relative path under
    /// the root, overwriting what is there.
    ///
    /// Returns the restored relative paths. A failure part-way leaves the files
    /// restored so far in place.
    ///
    /// # Errors
    /// [`Error::BackupNotFound`] if `backup_dir` does not exist.
    pub fn restore_from_backup(&self, backup_dir: impl AsRef<Path>) -> Result<Vec<String>> {
        let backup_dir = self.resolve(backup_dir);
        if !backup_dir.exists() {
            return Err(Error::BackupNotFound {
                path: backup_dir.to_native(),
            });
        }

        let files = PatternLister::unfiltered().list_files(&backup_dir)?;
        for file in &files {
            let source = backup_dir.join(file);
            let target = self.root().join(file);
            io::copy_file(&source, &target)?;
            tracing::debug!(file = %file, "restored");
        }

        tracing::info!(backup = %backup_dir, count = files.len(), "backup restored");
        Ok(files)
    }
}
