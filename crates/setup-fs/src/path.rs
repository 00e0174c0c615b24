//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// Normalization is purely lexical: separators become `/`, empty and `.`
/// components are dropped and `..` pops the preceding component where one
/// exists. The filesystem is never consulted, so construction cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let simplified = dunce::simplified(path.as_ref());
        let raw = simplified.to_string_lossy().replace('\\', "/");
        Self {
            inner: clean(&raw),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment, normalizing the result.
    pub fn join(&self, segment: &str) -> Self {
        Self::new(format!("{}/{}", self.inner, segment))
    }

    /// Resolve `path` against this one.
    ///
    /// Absolute inputs are returned as-is (normalized); relative inputs are
    /// joined onto `self`.
    pub fn resolve(&self, path: impl AsRef<Path>) -> Self {
        let candidate = Self::new(path);
        if candidate.is_absolute() {
            candidate
        } else {
            self.join(candidate.as_str())
        }
    }

    /// Whether the path is rooted (`/…`, `//server/…` or `C:/…`).
    pub fn is_absolute(&self) -> bool {
        let bytes = self.inner.as_bytes();
        self.inner.starts_with('/')
            || (bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':')
    }

    /// Get the parent directory.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(idx) if idx > 0 => Some(Self {
                inner: trimmed[..idx].to_string(),
            }),
            Some(0) if trimmed.len() > 1 => Some(Self {
                inner: "/".to_string(),
            }),
            _ => None,
        }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty() && *name != "." && *name != "..")
    }

    /// Express this path relative to `base`, if it lies underneath it.
    ///
    /// Matching is per component, so `/a/bc` is not inside `/a/b`.
    pub fn relative_to(&self, base: &NormalizedPath) -> Option<String> {
        if self.inner == base.inner {
            return Some(String::new());
        }
        if base.inner == "." {
            let escapes = self.inner == ".." || self.inner.starts_with("../");
            return (!self.is_absolute() && !escapes).then(|| self.inner.clone());
        }
        let prefix = if base.inner.ends_with('/') {
            base.inner.clone()
        } else {
            format!("{}/", base.inner)
        };
        self.inner.strip_prefix(&prefix).map(str::to_string)
    }

    /// Check if this path exists on the filesystem.
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 {
                None
            } else {
                Some(&name[idx + 1..])
            }
        })
    }
}

/// Lexically clean a forward-slash path.
fn clean(raw: &str) -> String {
    let (prefix, rest) = if raw.starts_with("//") && !raw.starts_with("///") {
        ("//", &raw[2..])
    } else if raw.starts_with('/') {
        ("/", raw.trim_start_matches('/'))
    } else {
        ("", raw)
    };

    let mut parts: Vec<&str> = Vec::new();
    for component in rest.split('/') {
        match component {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                // `..` above a root is the root itself
                _ if !prefix.is_empty() => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    let body = parts.join("/");
    if prefix.is_empty() && body.is_empty() {
        ".".to_string()
    } else {
        format!("{prefix}{body}")
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_drops_dot_and_empty_components() {
        assert_eq!(clean("a/./b//c/"), "a/b/c");
    }

    #[test]
    fn clean_resolves_parent_components() {
        assert_eq!(clean("/root/scripts/../docs"), "/root/docs");
        assert_eq!(clean("../x"), "../x");
        assert_eq!(clean("/.."), "/");
    }

    #[test]
    fn clean_preserves_network_prefix() {
        assert_eq!(clean("//server/share/./x"), "//server/share/x");
        assert_eq!(clean("///a"), "/a");
    }

    #[test]
    fn clean_empty_relative_is_dot() {
        assert_eq!(clean(""), ".");
        assert_eq!(clean("a/.."), ".");
    }
}
