//! Project file lifecycle operations for the project setup assistant
//!
//! [`ProjectFileManager`] owns every filesystem operation the assistant
//! performs on a scaffolded project:
//!
//! - **Backups**: single-file sibling backups and timestamped template backups
//!   under `.backups/setup-<timestamp>/`
//! - **Validation**: required files and directories of the project template
//! - **Infrastructure pruning**: removal of stack files the chosen technology
//!   stack does not use, governed by a [`RetentionPolicy`]
//! - **Ignore list**: idempotent `.gitignore` additions
//! - **Configuration**: `.claude/project-config.json` persistence
//! - **Restore**: copying a backup tree back over the project
//!
//! ```text
//!        setup-cli
//!            |
//!       setup-core
//!            |
//!        setup-fs
//! ```

pub mod backup;
pub mod error;
pub mod gitignore;
pub mod infrastructure;
pub mod manager;
pub mod project_config;
pub mod templates;
pub mod validation;

pub use error::{Error, Result};
pub use infrastructure::{RetentionPolicy, StackRule};
pub use manager::ProjectFileManager;
pub use project_config::{ProjectConfig, TechStack};
pub use validation::ValidationReport;
