//! Project Setup Assistant CLI
//!
//! The command layer over `setup-core`'s project file operations.

mod cli;
mod commands;
mod error;
mod logging;

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose).map_err(|e| CliError::user(format!("logging setup failed: {e}")))?;

    let root = resolve_root(cli.root)?;
    tracing::debug!(root = %root.display(), "resolved project root");

    match cli.command {
        Some(cmd) => execute_command(&root, cmd),
        None => {
            println!("{} Project Setup Assistant", "project-setup".green().bold());
            println!();
            println!("Run {} for available commands.", "project-setup --help".cyan());
            Ok(())
        }
    }
}

/// Make the root absolute against the current directory.
fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(match root {
        Some(root) => cwd.join(root),
        None => cwd,
    })
}

fn execute_command(root: &Path, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::BackupFile { path } => commands::run_backup_file(root, &path),
        Commands::Backup => commands::run_backup(root),
        Commands::ListBackups => commands::run_list_backups(root),
        Commands::Validate { json } => {
            if commands::run_validate(root, json)? {
                Ok(())
            } else {
                Err(CliError::user("project structure is incomplete"))
            }
        }
        Commands::Prune {
            infrastructure,
            stack,
        } => commands::run_prune(root, infrastructure, stack.as_deref()),
        Commands::Gitignore { patterns } => commands::run_gitignore(root, &patterns),
        Commands::SaveConfig { file } => commands::run_save_config(root, &file),
        Commands::Files { json } => commands::run_files(root, json),
        Commands::Restore { dir, latest } => commands::run_restore(root, dir.as_deref(), latest),
    }
}
