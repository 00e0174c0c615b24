use assert_fs::prelude::*;
use pretty_assertions::assert_eq;
use setup_fs::{NormalizedPath, PatternLister};

fn project() -> assert_fs::TempDir {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("README.md").write_str("# readme").unwrap();
    temp.child("CLAUDE.md").write_str("# claude").unwrap();
    temp.child("docs/guide.md").write_str("guide").unwrap();
    temp.child("docs/api/endpoints.md").write_str("api").unwrap();
    temp.child("docs/diagram.png").write_binary(&[0, 1, 2]).unwrap();
    temp.child("node_modules/pkg/README.md").write_str("dep").unwrap();
    temp.child(".backups/setup-old/README.md").write_str("old").unwrap();
    temp.child("scripts/setup.md").write_str("tool").unwrap();
    temp
}

fn lister() -> PatternLister {
    PatternLister::new(["node_modules/**", "scripts/**", ".backups/**"]).unwrap()
}

#[test]
fn test_literal_pattern_matches_top_level_only() {
    let temp = project();
    let base = NormalizedPath::new(temp.path());

    assert_eq!(lister().expand(&base, "README.md").unwrap(), vec!["README.md"]);
    assert!(lister().expand(&base, "PROMPT.md").unwrap().is_empty());
}

#[test]
fn test_recursive_pattern_is_sorted_and_filtered() {
    let temp = project();
    let base = NormalizedPath::new(temp.path());

    let matches = lister().expand(&base, "docs/**/*.md").unwrap();

    assert_eq!(matches, vec!["docs/api/endpoints.md", "docs/guide.md"]);
}

#[test]
fn test_exclusions_apply_to_wildcard_patterns() {
    let temp = project();
    let base = NormalizedPath::new(temp.path());

    let matches = lister().expand(&base, "**/*.md").unwrap();

    assert_eq!(
        matches,
        vec!["CLAUDE.md", "README.md", "docs/api/endpoints.md", "docs/guide.md"]
    );
}

#[test]
fn test_single_star_does_not_descend() {
    let temp = project();
    let base = NormalizedPath::new(temp.path());

    assert_eq!(lister().expand(&base, "docs/*.md").unwrap(), vec!["docs/guide.md"]);
}

#[test]
fn test_missing_walk_root_is_empty() {
    let temp = project();
    let base = NormalizedPath::new(temp.path());

    assert!(lister().expand(&base, "prompts/**/*.md").unwrap().is_empty());
}

#[test]
fn test_list_files_returns_every_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a.md").touch().unwrap();
    temp.child("nested/deeper/b.md").touch().unwrap();
    temp.child("empty").create_dir_all().unwrap();

    let files = PatternLister::unfiltered()
        .list_files(&NormalizedPath::new(temp.path()))
        .unwrap();

    assert_eq!(files, vec!["a.md", "nested/deeper/b.md"]);
}

#[test]
fn test_hidden_files_are_matched_like_any_other() {
    let temp = project();
    temp.child("docs/.draft.md").write_str("draft").unwrap();
    temp.child(".claude/.local/settings.json").write_str("{}").unwrap();
    let base = NormalizedPath::new(temp.path());

    assert_eq!(
        lister().expand(&base, "docs/**/*.md").unwrap(),
        vec!["docs/.draft.md", "docs/api/endpoints.md", "docs/guide.md"]
    );
    assert_eq!(
        lister().expand(&base, ".claude/**/*").unwrap(),
        vec![".claude/.local/settings.json"]
    );
}
