//! File system access used by the resolver.
//!
//! Resolution only ever reads: it loads the manifest, checks binary paths,
//! and lists macro candidates. [`LocalFileSystem`] does this against the
//! real disk; [`MemoryFileSystem`] holds an in-memory tree for callers that
//! want to resolve bundles without touching the disk.

use glob::{MatchOptions, Pattern};
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Read-only file system capability.
pub trait FileSystem: Send + Sync {
    /// Read the whole file at `path`.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Whether a file exists at `path`.
    ///
    /// Lookup errors (permissions, broken links) count as "does not exist".
    fn exists(&self, path: &Path) -> bool;

    /// List paths under `directory` matching a glob `pattern`.
    ///
    /// `pattern` is relative to `directory`; `directory` itself is matched
    /// literally. Unreadable entries are skipped.
    fn glob(&self, directory: &Path, pattern: &str) -> Vec<PathBuf>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn exists(&self, path: &Path) -> bool {
        std::fs::metadata(path).is_ok_and(|meta| meta.is_file())
    }

    fn glob(&self, directory: &Path, pattern: &str) -> Vec<PathBuf> {
        let Some(full) = full_pattern(directory, pattern) else {
            return Vec::new();
        };

        match glob::glob_with(&full, MATCH_OPTIONS) {
            Ok(paths) => paths.filter_map(Result::ok).collect(),
            Err(e) => {
                tracing::debug!("Invalid glob pattern {}: {}", full, e);
                Vec::new()
            }
        }
    }
}

/// In-memory [`FileSystem`].
///
/// Directories exist implicitly as ancestors of inserted files, or
/// explicitly through [`MemoryFileSystem::add_dir`].
#[derive(Debug, Default, Clone)]
pub struct MemoryFileSystem {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
}

impl MemoryFileSystem {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a file.
    pub fn add_file(&mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        let path = path.into();
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
        self.files.insert(path, contents.into());
    }

    /// Add an empty directory.
    pub fn add_dir(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }

    /// Remove a file, returning whether it was present.
    pub fn remove_file(&mut self, path: impl AsRef<Path>) -> bool {
        self.files.remove(path.as_ref()).is_some()
    }
}

impl FileSystem for MemoryFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn glob(&self, directory: &Path, pattern: &str) -> Vec<PathBuf> {
        let Some(full) = full_pattern(directory, pattern) else {
            return Vec::new();
        };
        let Ok(pattern) = Pattern::new(&full) else {
            return Vec::new();
        };

        self.files
            .keys()
            .chain(self.dirs.iter())
            .filter(|path| path.starts_with(directory))
            .filter(|path| pattern.matches_path_with(path, MATCH_OPTIONS))
            .cloned()
            .collect()
    }
}

/// Join an escaped directory with a relative pattern.
fn full_pattern(directory: &Path, pattern: &str) -> Option<String> {
    let directory = directory.to_str()?;
    let directory = directory.trim_end_matches('/');
    Some(format!("{}/{}", Pattern::escape(directory), pattern))
}
