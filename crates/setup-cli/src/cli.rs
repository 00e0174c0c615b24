//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Project Setup Assistant - back up, validate and tailor a scaffolded project
#[derive(Parser, Debug)]
#[command(name = "project-setup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project root; a trailing `scripts` directory resolves to its parent
    #[arg(long, global = true, env = "PROJECT_SETUP_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Copy one file to `<file>.backup.<timestamp>` next to it
    BackupFile {
        /// File to back up, relative to the project root
        path: PathBuf,
    },

    /// Back up all template content into `.backups/setup-<timestamp>/`
    Backup,

    /// List template backups, oldest first
    ListBackups,

    /// Check that required template files and directories exist
    ///
    /// Exits with status 1 when anything is missing.
    Validate {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Remove infrastructure stack files the chosen stack does not use
    ///
    /// Examples:
    ///   project-setup prune --infrastructure "Vercel"
    ///   project-setup prune --stack tech-stack.json
    Prune {
        /// Infrastructure identifier, e.g. "AWS CDK"
        #[arg(long, conflicts_with = "stack", required_unless_present = "stack")]
        infrastructure: Option<String>,

        /// Tech stack record (JSON, TOML or YAML) with an `infrastructure` key
        #[arg(long)]
        stack: Option<PathBuf>,
    },

    /// Add the backup directory and extra patterns to `.gitignore`
    Gitignore {
        /// Additional patterns to ensure are present
        patterns: Vec<String>,
    },

    /// Write a config record to `.claude/project-config.json`
    SaveConfig {
        /// Source record (JSON, TOML or YAML)
        file: PathBuf,
    },

    /// List files whose template placeholders should be processed
    Files {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Copy a template backup back over the project
    Restore {
        /// Backup directory to restore from
        #[arg(required_unless_present = "latest")]
        dir: Option<PathBuf>,

        /// Restore the most recent backup
        #[arg(long, conflicts_with = "dir")]
        latest: bool,
    },
}
