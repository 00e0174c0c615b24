//! Files command implementation

use std::path::Path;

use setup_core::ProjectFileManager;

use crate::error::Result;

/// Print the files whose placeholders should be processed
pub fn run_files(root: &Path, json: bool) -> Result<()> {
    let files = ProjectFileManager::new(root).files_to_process()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&files)?);
    } else {
        for file in files {
            println!("{file}");
        }
    }
    Ok(())
}
