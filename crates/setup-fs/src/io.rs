//! Filesystem primitives used by the setup assistant
//!
//! Every function performs one scoped operation and maps failures to
//! [`Error::Io`] carrying the path that failed.

use std::fs::{self, OpenOptions};
use std::io::Write;

use crate::{Error, NormalizedPath, Result};

/// A directory entry together with its file type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    /// File name of the entry (no directory part)
    pub name: String,
    /// Full path of the entry
    pub path: NormalizedPath,
    pub is_file: bool,
    pub is_dir: bool,
}

/// Create a directory and all missing parents. Existing directories are fine.
pub fn ensure_dir(path: &NormalizedPath) -> Result<()> {
    let native = path.to_native();
    fs::create_dir_all(&native).map_err(|e| Error::io(native, e))
}

/// Copy a file, creating the destination's parent directories first.
///
/// An existing destination is overwritten.
pub fn copy_file(source: &NormalizedPath, dest: &NormalizedPath) -> Result<u64> {
    if let Some(parent) = dest.parent() {
        ensure_dir(&parent)?;
    }
    let source_native = source.to_native();
    fs::copy(&source_native, dest.to_native()).map_err(|e| Error::io(source_native, e))
}

/// Remove a single file.
pub fn remove_file(path: &NormalizedPath) -> Result<()> {
    let native = path.to_native();
    fs::remove_file(&native).map_err(|e| Error::io(native, e))
}

/// List the immediate entries of a directory in the order the OS yields them.
///
/// Entry types are those of the symlink target where there is one.
pub fn list_dir(path: &NormalizedPath) -> Result<Vec<EntryInfo>> {
    let native = path.to_native();
    let mut entries = Vec::new();

    for entry in fs::read_dir(&native).map_err(|e| Error::io(&native, e))? {
        let entry = entry.map_err(|e| Error::io(&native, e))?;
        // Follow symlinks; a dangling link reports as itself
        let file_type = fs::metadata(entry.path())
            .or_else(|_| entry.metadata())
            .map_err(|e| Error::io(entry.path(), e))?
            .file_type();
        let name = entry.file_name().to_string_lossy().into_owned();
        entries.push(EntryInfo {
            path: path.join(&name),
            name,
            is_file: file_type.is_file(),
            is_dir: file_type.is_dir(),
        });
    }

    Ok(entries)
}

/// Write content atomically to a file.
///
/// Writes to a temp file in the same directory, then renames it over the
/// target so readers never observe a partially written file.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = path.parent() {
        ensure_dir(&parent)?;
    }

    // Same directory keeps the rename on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name().unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let written = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .and_then(|mut temp_file| {
            temp_file.write_all(content)?;
            temp_file.sync_all()
        })
        .map_err(|e| Error::io(&temp_path, e))
        .and_then(|()| {
            fs::rename(&temp_path, &native_path).map_err(|e| Error::io(&native_path, e))
        });

    if written.is_err() {
        // Leave nothing behind when any step fails
        let _ = fs::remove_file(&temp_path);
    }
    written?;

    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Write text content to a file atomically, replacing any previous content.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
