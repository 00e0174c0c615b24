//! Gitignore command implementation

use std::path::Path;

use colored::Colorize;
use setup_core::ProjectFileManager;
use setup_fs::ProjectPath;

use crate::error::Result;

/// Ensure the backup directory and `patterns` are ignored
pub fn run_gitignore(root: &Path, patterns: &[String]) -> Result<()> {
    let manager = ProjectFileManager::new(root);

    if !manager.path_of(ProjectPath::Gitignore).exists() {
        println!("{} (no {} found)", "Skipped".yellow(), ProjectPath::Gitignore);
        return Ok(());
    }

    manager.update_gitignore(patterns)?;
    println!("{} {}", "Updated".green(), ProjectPath::Gitignore);
    Ok(())
}
