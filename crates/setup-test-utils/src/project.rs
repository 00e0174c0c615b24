//! [`TestProject`] builder for setup-assistant test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Files a complete project template contains.
pub const TEMPLATE_FILES: [&str; 8] = [
    "CLAUDE.md",
    "README.md",
    "CUSTOMIZATION_GUIDE.md",
    "docs/tech-stack.md",
    "prompts/basic-development.md",
    "prompts/enterprise-development.md",
    "prompts/opensource-development.md",
    "prompts/startup-development.md",
];

/// Directories a complete project template contains.
pub const TEMPLATE_DIRS: [&str; 4] = ["docs", "prompts", "infrastructure", ".github/workflows"];

/// A temporary project directory with helpers for setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use setup_test_utils::TestProject;
///
/// let project = TestProject::new()
///     .with_file("README.md", "# Demo")
///     .with_file("docs/guide.md", "guide");
/// project.assert_file_exists("docs/guide.md");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary project directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// A project containing every required template file and directory.
    pub fn complete() -> Self {
        let mut project = Self::new();
        for file in TEMPLATE_FILES {
            project = project.with_file(file, &format!("# {file}\n"));
        }
        for dir in TEMPLATE_DIRS {
            project = project.with_dir(dir);
        }
        project
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `path` inside the project.
    pub fn path(&self, path: &str) -> PathBuf {
        self.root().join(path)
    }

    /// Write `content` to `path`, creating parent directories.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.write(path, content.as_bytes());
        self
    }

    /// Create a directory (and parents) at `path`.
    pub fn with_dir(self, path: &str) -> Self {
        fs::create_dir_all(self.path(path))
            .unwrap_or_else(|e| panic!("with_dir: failed to create {path}: {e}"));
        self
    }

    /// Write raw bytes to `path`, creating parent directories.
    pub fn write(&self, path: &str, content: &[u8]) {
        let full_path = self.path(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("write: failed to create {}: {e}", parent.display()));
        }
        fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("write: failed to write {}: {e}", full_path.display()));
    }

    /// Read a project file as bytes.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, path: &str) -> Vec<u8> {
        let full_path = self.path(path);
        fs::read(&full_path)
            .unwrap_or_else(|e| panic!("Could not read file {}: {e}", full_path.display()))
    }

    /// Read a project file as UTF-8 text.
    pub fn read_to_string(&self, path: &str) -> String {
        String::from_utf8(self.read(path)).expect("file is not UTF-8")
    }

    /// Assert that `path` (relative to the project root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.path(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the project root) does not exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.path(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read_to_string(path);
        assert!(
            file_content.contains(content),
            "File {path} does not contain expected content.\nExpected: {content}\nActual: {file_content}"
        );
    }
}
