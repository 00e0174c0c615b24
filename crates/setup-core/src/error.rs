//! Error types for setup-core

use std::path::PathBuf;

/// Result type for setup-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in setup-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Restore was requested from a backup directory that does not exist
    #[error("Backup directory not found: {path}")]
    BackupNotFound { path: PathBuf },

    /// Filesystem error from setup-fs
    #[error(transparent)]
    Fs(#[from] setup_fs::Error),
}
