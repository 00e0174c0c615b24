//! Glob-driven file listing.
//!
//! [`PatternLister`] expands a glob pattern against a base directory into the
//! relative, forward-slash paths of the regular files it matches, skipping
//! anything matched by the lister's exclusion globs.
//!
//! Matching rules:
//! - `*`, `?` and character classes never cross a `/`
//! - `**/` spans zero or more directories, so `docs/**/*.md` matches
//!   `docs/guide.md` as well as `docs/a/b/guide.md`
//! - hidden files are matched like any other file
//!
//! Walks start at the longest literal directory prefix of the pattern and
//! visit entries in file-name order, so results are deterministic.

use globset::{Glob, GlobBuilder, GlobMatcher, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use crate::{Error, NormalizedPath, Result};

const META_CHARS: &[char] = &['*', '?', '[', ']', '{', '}'];

/// Expands glob patterns relative to a base directory.
#[derive(Debug, Clone)]
pub struct PatternLister {
    exclude_set: GlobSet,
    /// Directories an exclusion of the form `dir/**` removes wholesale
    pruned_dirs: Vec<String>,
}

impl PatternLister {
    /// Create a lister that drops every path matching one of `exclude`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidGlobPattern`] if any exclusion fails to compile.
    pub fn new<I, S>(exclude: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let exclude: Vec<String> = exclude.into_iter().map(Into::into).collect();

        let mut builder = GlobSetBuilder::new();
        for pattern in &exclude {
            builder.add(build_glob(pattern)?);
        }
        let exclude_set = builder.build().map_err(|e| Error::InvalidGlobPattern {
            pattern: exclude.join(", "),
            reason: e.to_string(),
        })?;

        let pruned_dirs = exclude
            .iter()
            .filter_map(|p| p.strip_suffix("/**"))
            .filter(|stem| !stem.contains(META_CHARS))
            .map(str::to_string)
            .collect();

        Ok(Self {
            exclude_set,
            pruned_dirs,
        })
    }

    /// A lister with no exclusions.
    pub fn unfiltered() -> Self {
        Self {
            exclude_set: GlobSet::empty(),
            pruned_dirs: Vec::new(),
        }
    }

    /// Whether a relative path is removed by the exclusion set.
    pub fn is_excluded(&self, relative: &str) -> bool {
        self.exclude_set.is_match(relative)
            || self
                .pruned_dirs
                .iter()
                .any(|dir| relative == dir || relative.starts_with(&format!("{dir}/")))
    }

    /// Expand `pattern` against `base`.
    ///
    /// A missing base or walk root yields an empty list rather than an error.
    pub fn expand(&self, base: &NormalizedPath, pattern: &str) -> Result<Vec<String>> {
        let pattern = pattern.trim_start_matches("./");
        let glob = matcher(pattern)?;
        let components: Vec<&str> = pattern.split('/').collect();

        let literal_len = components
            .iter()
            .take_while(|c| !c.contains(META_CHARS))
            .count();

        if literal_len == components.len() {
            // Nothing to expand: the pattern names a single file
            let candidate = base.join(pattern);
            let hit = candidate.is_file() && !self.is_excluded(pattern);
            return Ok(if hit { vec![pattern.to_string()] } else { Vec::new() });
        }

        let prefix = components[..literal_len].join("/");
        let walk_root = if prefix.is_empty() {
            base.clone()
        } else {
            base.join(&prefix)
        };
        if !walk_root.is_dir() {
            return Ok(Vec::new());
        }

        let remaining = &components[literal_len..];
        let max_depth = if remaining.iter().any(|c| c.contains("**")) {
            usize::MAX
        } else {
            remaining.len()
        };

        let matches = self.walk(base, &walk_root, max_depth, |relative| {
            glob.is_match(relative)
        })?;
        tracing::trace!(pattern, count = matches.len(), "expanded glob");
        Ok(matches)
    }

    /// List every non-directory entry under `base`, recursively.
    pub fn list_files(&self, base: &NormalizedPath) -> Result<Vec<String>> {
        if !base.is_dir() {
            return Ok(Vec::new());
        }
        self.walk(base, base, usize::MAX, |_| true)
    }

    fn walk<F>(
        &self,
        base: &NormalizedPath,
        walk_root: &NormalizedPath,
        max_depth: usize,
        mut keep: F,
    ) -> Result<Vec<String>>
    where
        F: FnMut(&str) -> bool,
    {
        let mut matches = Vec::new();

        let walker = WalkDir::new(walk_root.to_native())
            .follow_links(false)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || !entry.file_type().is_dir()
                    || NormalizedPath::new(entry.path())
                        .relative_to(base)
                        .is_none_or(|rel| !self.is_excluded(&rel))
            });

        for entry in walker {
            let entry = entry.map_err(|e| Error::walk(&base.to_native(), e))?;
            if entry.file_type().is_dir() {
                continue;
            }
            // Walk roots sit under `base`, so every entry has a relative form
            let Some(relative) = NormalizedPath::new(entry.path()).relative_to(base) else {
                tracing::warn!(path = %entry.path().display(), "entry outside walk base");
                continue;
            };
            if self.is_excluded(&relative) {
                continue;
            }
            if keep(&relative) {
                matches.push(relative);
            }
        }

        Ok(matches)
    }
}

fn build_glob(pattern: &str) -> Result<Glob> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| Error::InvalidGlobPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })
}

/// Compile a single pattern into a matcher using the lister's rules.
pub fn matcher(pattern: &str) -> Result<GlobMatcher> {
    Ok(build_glob(pattern)?.compile_matcher())
}
