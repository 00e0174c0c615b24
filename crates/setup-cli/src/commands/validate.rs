//! Validate command implementation

use std::path::Path;

use colored::Colorize;
use setup_core::ProjectFileManager;

use crate::error::Result;

/// Run the validate command. Returns whether the project is valid.
pub fn run_validate(root: &Path, json: bool) -> Result<bool> {
    let report = ProjectFileManager::new(root).validate_project_structure();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(report.valid);
    }

    if report.valid {
        println!("{}", "Project structure is valid".green().bold());
    } else {
        println!("{}", "Project structure has issues".red().bold());
        println!();
        for issue in &report.issues {
            println!("  {} {}", "-".red(), issue);
        }
    }
    Ok(report.valid)
}
