//! Macro binary discovery.
//!
//! A slice may embed a compiler plugin at `<slice dir>/Macros/<binary name>`,
//! or for frameworks inside the framework directory at
//! `<slice dir>/<Name>.framework/Macros/<Name>`.
//! Every declared slice is scanned, whichever one was selected as primary.

use crate::fs::FileSystem;
use crate::library::LibraryPathResolver;
use crate::manifest::AvailableLibrary;
use glob::Pattern;
use std::path::{Path, PathBuf};

/// Finds the macro binary of a bundle, if any.
pub struct MacroLocator<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    macros_dir: &'a str,
}

impl<'a, F: FileSystem + ?Sized> MacroLocator<'a, F> {
    pub fn new(fs: &'a F, macros_dir: &'a str) -> Self {
        Self { fs, macros_dir }
    }

    /// Every macro binary found, ordered byte-wise by path.
    pub fn find_all(&self, bundle_root: &Path, libraries: &[AvailableLibrary]) -> Vec<PathBuf> {
        let paths = LibraryPathResolver::new(bundle_root);

        let mut found: Vec<PathBuf> = libraries
            .iter()
            .flat_map(|library| {
                let pattern = format!(
                    "{}/{}",
                    Pattern::escape(self.macros_dir),
                    Pattern::escape(&library.binary_name())
                );
                paths
                    .macro_search_dirs(library)
                    .into_iter()
                    .flat_map(move |dir| self.fs.glob(&dir, &pattern))
            })
            .collect();

        found.sort_by(|a, b| {
            a.as_os_str()
                .as_encoded_bytes()
                .cmp(b.as_os_str().as_encoded_bytes())
        });
        found.dedup();
        found
    }

    /// The byte-wise smallest macro path, or `None` when no slice has one.
    pub fn locate(&self, bundle_root: &Path, libraries: &[AvailableLibrary]) -> Option<PathBuf> {
        let macro_path = self.find_all(bundle_root, libraries).into_iter().next();
        if let Some(path) = &macro_path {
            tracing::debug!("Found macro binary {}", path.display());
        }
        macro_path
    }
}
