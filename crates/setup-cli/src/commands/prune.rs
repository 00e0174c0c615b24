//! Prune command implementation

use std::path::Path;

use colored::Colorize;
use setup_core::{ProjectFileManager, TechStack};
use setup_fs::ConfigStore;

use crate::error::{CliError, Result};

/// Remove stack files the chosen infrastructure does not use
pub fn run_prune(root: &Path, infrastructure: Option<String>, stack: Option<&Path>) -> Result<()> {
    let manager = ProjectFileManager::new(root);

    let tech_stack = match (infrastructure, stack) {
        (Some(infrastructure), _) => TechStack::new(infrastructure),
        (None, Some(file)) => ConfigStore::new().load(&manager.resolve(file))?,
        (None, None) => {
            return Err(CliError::user("pass --infrastructure or --stack"));
        }
    };

    let removed = manager.remove_unused_infrastructure(&tech_stack)?;
    if removed.is_empty() {
        println!(
            "{} for {}",
            "No unused stacks".dimmed(),
            tech_stack.infrastructure.cyan()
        );
        return Ok(());
    }

    println!("{} {} stack file(s)", "Removed".green().bold(), removed.len());
    for file in removed {
        println!("  {} {}", "-".red(), file);
    }
    Ok(())
}
