//! Template backup and restore round-trips against real directory trees.

use pretty_assertions::assert_eq;
use setup_core::{Error, ProjectFileManager};
use setup_fs::PatternLister;
use setup_test_utils::TestProject;
use std::fs;

fn backed_up_files(backup: &setup_fs::NormalizedPath) -> Vec<String> {
    PatternLister::unfiltered().list_files(backup).unwrap()
}

#[test]
fn test_readme_and_guide_scenario() {
    let project = TestProject::new()
        .with_file("README.md", "# Readme\n")
        .with_file("docs/guide.md", "Guide body\n")
        .with_file("node_modules/pkg/README.md", "dependency")
        .with_file("scripts/docs/notes.md", "tooling")
        .with_file(".backups/setup-old/README.md", "stale");
    let manager = ProjectFileManager::new(project.root());

    let backup = manager.backup_all_templates().unwrap();

    assert_eq!(backed_up_files(&backup), vec!["README.md", "docs/guide.md"]);
    assert_eq!(
        fs::read(backup.join("README.md").to_native()).unwrap(),
        project.read("README.md")
    );
    assert_eq!(
        fs::read(backup.join("docs/guide.md").to_native()).unwrap(),
        project.read("docs/guide.md")
    );
}

#[test]
fn test_backup_covers_every_template_pattern() {
    let project = TestProject::new()
        .with_file("CLAUDE.md", "claude")
        .with_file("PROMPT.md", "prompt")
        .with_file("prompts/basic-development.md", "basic")
        .with_file("prompts/notes.txt", "not markdown")
        .with_file(".claude/settings.json", "{}")
        .with_file(".claude/commands/review.md.template", "tpl")
        .with_file("infrastructure/lib/stacks/aws-stack.ts", "aws")
        .with_file("src/main.rs", "fn main() {}");
    let manager = ProjectFileManager::new(project.root());

    let backup = manager.backup_all_templates().unwrap();

    assert_eq!(
        backed_up_files(&backup),
        vec![
            ".claude/commands/review.md.template",
            ".claude/settings.json",
            "CLAUDE.md",
            "PROMPT.md",
            "infrastructure/lib/stacks/aws-stack.ts",
            "prompts/basic-development.md",
        ]
    );
}

#[test]
fn test_backup_from_scripts_dir_anchors_at_project_root() {
    let project = TestProject::new()
        .with_file("README.md", "root readme")
        .with_dir("scripts");
    let manager = ProjectFileManager::new(project.path("scripts"));

    let backup = manager.backup_all_templates().unwrap();

    assert!(backup.join("README.md").is_file());
    assert!(backup.as_str().contains("/.backups/setup-"));
}

#[test]
fn test_current_dir_root_backs_up_nested_templates() {
    let project = TestProject::new()
        .with_file("README.md", "# Readme\n")
        .with_file("docs/guide.md", "Guide body\n")
        .with_file(".claude/settings.json", "{}");
    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(project.root()).unwrap();

    let manager = ProjectFileManager::new(".");
    let files = manager.files_to_process();
    let backup = manager.backup_all_templates();

    std::env::set_current_dir(previous).unwrap();
    assert!(manager.root().is_absolute());
    assert_eq!(files.unwrap(), vec!["README.md", "docs/guide.md"]);
    assert_eq!(
        backed_up_files(&backup.unwrap()),
        vec![".claude/settings.json", "README.md", "docs/guide.md"]
    );
}

#[test]
fn test_restore_round_trip_is_byte_identical() {
    let project = TestProject::new()
        .with_file("README.md", "# Original\n")
        .with_file("docs/deep/nested/page.md", "nested\n");
    project.write("CLAUDE.md", &[0xde, 0xad, 0xbe, 0xef]);
    let manager = ProjectFileManager::new(project.root());
    let originals: Vec<(&str, Vec<u8>)> = ["README.md", "docs/deep/nested/page.md", "CLAUDE.md"]
        .into_iter()
        .map(|f| (f, project.read(f)))
        .collect();

    let backup = manager.backup_all_templates().unwrap();

    project.write("README.md", b"# Rewritten by setup\n");
    fs::remove_dir_all(project.path("docs")).unwrap();
    fs::remove_file(project.path("CLAUDE.md")).unwrap();

    let mut restored = manager.restore_from_backup(backup.as_str()).unwrap();
    restored.sort();

    assert_eq!(
        restored,
        vec!["CLAUDE.md", "README.md", "docs/deep/nested/page.md"]
    );
    for (file, bytes) in originals {
        assert_eq!(project.read(file), bytes, "{file} differs after restore");
    }
}

#[test]
fn test_restore_accepts_relative_backup_path() {
    let project = TestProject::new().with_file(".backups/setup-manual/README.md", "from backup");
    let manager = ProjectFileManager::new(project.root());

    manager.restore_from_backup(".backups/setup-manual").unwrap();

    project.assert_file_contains("README.md", "from backup");
}

#[test]
fn test_restore_missing_backup_errors_and_creates_nothing() {
    let project = TestProject::new();
    let manager = ProjectFileManager::new(project.root());
    let missing = project.path(".backups/setup-does-not-exist");

    let err = manager.restore_from_backup(&missing).unwrap_err();

    match err {
        Error::BackupNotFound { path } => assert_eq!(path, missing),
        other => panic!("expected BackupNotFound, got {other:?}"),
    }
    assert_eq!(fs::read_dir(project.root()).unwrap().count(), 0);
}

#[test]
fn test_repeated_backup_directories_never_fail() {
    let project = TestProject::new();
    let manager = ProjectFileManager::new(project.root());

    let first = manager.create_backup_directory().unwrap();
    let second = manager.create_backup_directory().unwrap();

    assert!(first.is_dir());
    assert!(second.is_dir());
    let backups = manager.list_backups().unwrap();
    assert!(!backups.is_empty() && backups.len() <= 2);
}

#[test]
fn test_single_file_backup_is_sibling_copy() {
    let project = TestProject::new().with_file("docs/tech-stack.md", "stack");
    let manager = ProjectFileManager::new(project.root());

    let backup = manager.create_backup("docs/tech-stack.md").unwrap().unwrap();

    assert!(
        backup
            .file_name()
            .unwrap()
            .starts_with("tech-stack.md.backup.")
    );
    assert_eq!(fs::read(backup.to_native()).unwrap(), b"stack");
    project.assert_file_contains("docs/tech-stack.md", "stack");
    assert_eq!(fs::read_dir(project.path("docs")).unwrap().count(), 2);
}

#[test]
fn test_single_file_backup_of_missing_file() {
    let project = TestProject::new();
    let manager = ProjectFileManager::new(project.root());

    assert!(manager.create_backup("README.md").unwrap().is_none());
    assert_eq!(fs::read_dir(project.root()).unwrap().count(), 0);
}
