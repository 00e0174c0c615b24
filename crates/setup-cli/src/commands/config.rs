//! Save-config command implementation

use std::path::Path;

use colored::Colorize;
use setup_core::ProjectFileManager;
use setup_fs::{ConfigStore, ProjectPath};

use crate::error::Result;

/// Persist a config record read from `file` to `.claude/project-config.json`
///
/// The record is treated opaquely: any JSON, TOML or YAML document is
/// accepted and re-emitted as JSON.
pub fn run_save_config(root: &Path, file: &Path) -> Result<()> {
    let manager = ProjectFileManager::new(root);
    let record: serde_json::Value = ConfigStore::new().load(&manager.resolve(file))?;

    manager.save_project_config(&record)?;
    println!("{} {}", "Wrote".green(), ProjectPath::ProjectConfig);
    Ok(())
}
