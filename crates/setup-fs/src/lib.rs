//! Filesystem access layer for the project setup assistant
//!
//! Provides normalized path handling, text I/O, format-agnostic config
//! persistence and glob-based file listing.

pub mod config;
pub mod constants;
pub mod error;
pub mod glob;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use constants::ProjectPath;
pub use error::{Error, Result};
pub use glob::PatternLister;
pub use io::EntryInfo;
pub use path::NormalizedPath;
