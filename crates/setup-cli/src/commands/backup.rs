//! Backup and restore commands

use std::path::Path;

use colored::Colorize;
use setup_core::ProjectFileManager;

use crate::error::{CliError, Result};

/// Back up a single file next to itself
pub fn run_backup_file(root: &Path, file: &Path) -> Result<()> {
    let manager = ProjectFileManager::new(root);

    match manager.create_backup(file)? {
        Some(backup) => println!("{} {}", "Backed up to".green(), backup),
        None => println!(
            "{} {} (nothing to back up)",
            "Skipped".yellow(),
            file.display()
        ),
    }
    Ok(())
}

/// Back up all template content
pub fn run_backup(root: &Path) -> Result<()> {
    let manager = ProjectFileManager::new(root);
    let backup_dir = manager.backup_all_templates()?;

    println!("{} {}", "Templates backed up to".green(), backup_dir);
    Ok(())
}

/// List existing template backups
pub fn run_list_backups(root: &Path) -> Result<()> {
    let manager = ProjectFileManager::new(root);
    let backups = manager.list_backups()?;

    if backups.is_empty() {
        println!("{}", "No backups found".dimmed());
        return Ok(());
    }
    for backup in backups {
        println!("  {} {}", "+".green(), backup);
    }
    Ok(())
}

/// Restore from an explicit backup directory or the most recent one
pub fn run_restore(root: &Path, dir: Option<&Path>, latest: bool) -> Result<()> {
    let manager = ProjectFileManager::new(root);

    let backup_dir = match dir {
        Some(dir) => manager.resolve(dir),
        None if latest => manager
            .list_backups()?
            .pop()
            .ok_or_else(|| CliError::user("no backups to restore"))?,
        None => return Err(CliError::user("specify a backup directory or --latest")),
    };

    let restored = manager.restore_from_backup(backup_dir.as_str())?;
    println!(
        "{} {} file(s) from {}",
        "Restored".green().bold(),
        restored.len(),
        backup_dir
    );
    for file in restored {
        println!("  {} {}", "+".green(), file);
    }
    Ok(())
}
