//! Hook discovery
//!
//! The registry scans the configured search paths for available candidates
//! and a scope's `hooks/` directory for installed copies, constructing one
//! [`Hook`] entity per regular file. Configuration flows in explicitly
//! through the constructor; the registry never reads ambient process
//! state, so queries are deterministic and isolated.

use crate::hook::Hook;
use crate::layout::Layout;
use grapnel_core::{Error, HookKind, Result};
use std::collections::btree_map::{BTreeMap, Entry};
use std::fs;
use std::path::{Path, PathBuf};

/// Scans search paths and scope roots and answers discovery queries
#[derive(Debug, Clone)]
pub struct Registry {
    search_paths: Vec<PathBuf>,
    layout: Layout,
}

impl Registry {
    /// Create a registry over an ordered search-path list and a layout
    #[must_use]
    pub fn new(search_paths: Vec<PathBuf>, layout: Layout) -> Self {
        Self {
            search_paths,
            layout,
        }
    }

    /// The repository layout this registry queries installed state against
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The ordered search-path list for available candidates
    #[must_use]
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// All hooks of one kind, sorted lexicographically by name
    ///
    /// Directory listing order is filesystem-dependent; results are keyed
    /// by name so repeated queries are stable across platforms and
    /// independent of search-path order. Missing directories are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateHook`] when two candidates share a name
    /// (a configuration error to surface, never silently resolved) and
    /// [`Error::DirectoryRead`] when an existing directory cannot be read.
    pub fn find_all(&self, kind: HookKind) -> Result<Vec<Hook>> {
        let dirs: Vec<PathBuf> = match kind {
            HookKind::Available => self.search_paths.clone(),
            HookKind::Installed(scope) => vec![self.layout.hooks_dir(scope)],
        };

        let mut hooks: BTreeMap<String, Hook> = BTreeMap::new();
        for dir in &dirs {
            scan_dir(dir, kind, &mut hooks)?;
        }

        Ok(hooks.into_values().collect())
    }

    /// Resolve one hook by exact, case-sensitive name
    ///
    /// Returns `Ok(None)` when no hook of that kind matches.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Registry::find_all`].
    pub fn find(&self, name: &str, kind: HookKind) -> Result<Option<Hook>> {
        let mut hooks = self.find_all(kind)?;
        Ok(hooks
            .iter()
            .position(|hook| hook.name() == name)
            .map(|idx| hooks.swap_remove(idx)))
    }
}

/// Add every regular file directly inside `dir` as a hook candidate
fn scan_dir(dir: &Path, kind: HookKind, hooks: &mut BTreeMap<String, Hook>) -> Result<()> {
    if !dir.is_dir() {
        tracing::debug!("Skipping missing hook directory: {}", dir.display());
        return Ok(());
    }

    let read_err = |e: std::io::Error| Error::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    };

    for entry in fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if !path.is_file() {
            continue;
        }

        // Hook names are strings end to end; files the CLI could never
        // address by name are skipped.
        let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
            tracing::warn!("Skipping hook with non-UTF-8 name: {}", path.display());
            continue;
        };

        match hooks.entry(name.to_string()) {
            Entry::Occupied(existing) => {
                return Err(Error::DuplicateHook {
                    name: name.to_string(),
                    first: existing.get().source_path().to_path_buf(),
                    second: path,
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(Hook::new(name.to_string(), path, kind));
            }
        }
    }

    Ok(())
}
