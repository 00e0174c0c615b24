//! Command implementations for setup-cli

pub mod backup;
pub mod config;
pub mod files;
pub mod gitignore;
pub mod prune;
pub mod validate;

pub use backup::{run_backup, run_backup_file, run_list_backups, run_restore};
pub use config::run_save_config;
pub use files::run_files;
pub use gitignore::run_gitignore;
pub use prune::run_prune;
pub use validate::run_validate;
