//! Repository hook area layout
//!
//! The hook area lives under the repository's control directory at
//! `<git-dir>/hooks/`. Each installation scope has its own root below it:
//!
//! ```text
//! <git-dir>/hooks/
//!   local/                    # this checkout only
//!     hooks/<name>            # installed copies
//!     <event>.d/<name>        # one link per wired trigger event
//!   shared/                   # reused across checkouts
//!     hooks/<name>
//!     <event>.d/<name>
//! ```
//!
//! All scope-relative path construction lives here so the registry and
//! installer agree on the layout.

use grapnel_core::{Error, Result, Scope};
use std::path::{Path, PathBuf};

/// Derives every scope-relative path from the repository control directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    hook_area: PathBuf,
}

impl Layout {
    /// Locate the repository containing `start` and build its layout
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoRepository`] when `start` is not inside a
    /// repository working tree or control directory.
    pub fn discover(start: &Path) -> Result<Self> {
        let repo = git2::Repository::discover(start).map_err(|e| Error::NoRepository {
            path: start.to_path_buf(),
            source: e,
        })?;
        Ok(Self::from_git_dir(repo.path()))
    }

    /// Build the layout for a known control directory
    #[must_use]
    pub fn from_git_dir(git_dir: &Path) -> Self {
        Self {
            hook_area: git_dir.join("hooks"),
        }
    }

    /// The hook area itself, shared by both scopes
    #[must_use]
    pub fn hook_area(&self) -> &Path {
        &self.hook_area
    }

    /// Root directory of one installation scope
    #[must_use]
    pub fn scope_root(&self, scope: Scope) -> PathBuf {
        self.hook_area.join(scope.dir_name())
    }

    /// Directory holding a scope's installed copies
    #[must_use]
    pub fn hooks_dir(&self, scope: Scope) -> PathBuf {
        self.scope_root(scope).join("hooks")
    }

    /// Installed copy of one hook
    #[must_use]
    pub fn installed_path(&self, scope: Scope, name: &str) -> PathBuf {
        self.hooks_dir(scope).join(name)
    }

    /// Fan-out directory for one trigger event
    #[must_use]
    pub fn target_dir(&self, scope: Scope, event: &str) -> PathBuf {
        self.scope_root(scope).join(format!("{event}.d"))
    }

    /// Link wiring one hook into one trigger event
    #[must_use]
    pub fn link_path(&self, scope: Scope, event: &str, name: &str) -> PathBuf {
        self.target_dir(scope, event).join(name)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_derive_from_git_dir() {
        let layout = Layout::from_git_dir(Path::new("/repo/.git"));

        assert_eq!(layout.hook_area(), Path::new("/repo/.git/hooks"));
        assert_eq!(
            layout.scope_root(Scope::Local),
            Path::new("/repo/.git/hooks/local")
        );
        assert_eq!(
            layout.hooks_dir(Scope::Shared),
            Path::new("/repo/.git/hooks/shared/hooks")
        );
        assert_eq!(
            layout.installed_path(Scope::Local, "linter"),
            Path::new("/repo/.git/hooks/local/hooks/linter")
        );
        assert_eq!(
            layout.target_dir(Scope::Shared, "pre-commit"),
            Path::new("/repo/.git/hooks/shared/pre-commit.d")
        );
        assert_eq!(
            layout.link_path(Scope::Shared, "pre-commit", "linter"),
            Path::new("/repo/.git/hooks/shared/pre-commit.d/linter")
        );
    }

    #[test]
    fn test_scope_roots_are_disjoint() {
        let layout = Layout::from_git_dir(Path::new("/repo/.git"));
        assert_ne!(layout.scope_root(Scope::Local), layout.scope_root(Scope::Shared));
    }

    #[test]
    fn test_discover_from_working_tree_subdirectory() {
        let temp = TempDir::new().unwrap();
        git2::Repository::init(temp.path()).unwrap();
        let nested = temp.path().join("src/deep");
        std::fs::create_dir_all(&nested).unwrap();

        let layout = Layout::discover(&nested).unwrap();
        let expected = Layout::from_git_dir(&temp.path().canonicalize().unwrap().join(".git"));
        assert_eq!(layout, expected);
    }

    #[test]
    fn test_discover_outside_repository_fails() {
        let temp = TempDir::new().unwrap();
        let err = Layout::discover(temp.path()).unwrap_err();
        assert!(matches!(err, Error::NoRepository { .. }));
    }
}
