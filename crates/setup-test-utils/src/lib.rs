//! Shared test utilities for the project-setup workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`project`] — [`TestProject`](project::TestProject) builder for
//!   scaffolded-project scenarios

pub mod project;

pub use project::TestProject;
