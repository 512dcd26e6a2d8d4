//! Hook entity
//!
//! A [`Hook`] represents one script, either a candidate found in a search
//! path or a copy installed into a scope. Entities are constructed
//! transiently per discovery query; the durable state is entirely the
//! filesystem layout under the scope roots and search paths.

use crate::installer::Installer;
use crate::layout::Layout;
use crate::metadata::Metadata;
use grapnel_core::{Error, HookKind, Result, Scope};
use once_cell::unsync::OnceCell;
use std::fs;
use std::path::{Path, PathBuf};

/// One hook script, available in a search path or installed into a scope
#[derive(Debug, Clone)]
pub struct Hook {
    name: String,
    source_path: PathBuf,
    kind: HookKind,
    metadata: OnceCell<Metadata>,
}

impl Hook {
    pub(crate) fn new(name: String, source_path: PathBuf, kind: HookKind) -> Self {
        Self {
            name,
            source_path,
            kind,
            metadata: OnceCell::new(),
        }
    }

    /// Name identifying this hook, the file name without extension
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the script backing this entity
    #[must_use]
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Which set this entity was discovered in
    #[must_use]
    pub fn kind(&self) -> HookKind {
        self.kind
    }

    /// Metadata declared in the backing script's header comments
    ///
    /// The script is read and parsed once per entity; later calls return
    /// the cached value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileRead`] when the backing script cannot be read.
    /// Parsing itself never fails.
    pub fn meta_data(&self) -> Result<&Metadata> {
        self.metadata.get_or_try_init(|| {
            let content =
                fs::read_to_string(&self.source_path).map_err(|e| Error::FileRead {
                    path: self.source_path.clone(),
                    source: e,
                })?;
            Ok(Metadata::parse(&content))
        })
    }

    /// Installed state of this hook in the given scope
    ///
    /// `None` when the scope has no copy, including when the scope root
    /// itself does not exist yet.
    #[must_use]
    pub fn installed(&self, layout: &Layout, scope: Scope) -> Option<InstalledHook> {
        InstalledHook::query(layout, scope, &self.name)
    }

    /// Install this hook into the given scope
    ///
    /// # Errors
    ///
    /// See [`Installer::install`].
    pub fn install(&self, installer: &Installer<'_>, scope: Scope) -> Result<InstalledHook> {
        installer.install(self, scope)
    }
}

/// Filesystem facts about one installed copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledHook {
    /// Path of the installed copy under the scope's hooks directory
    pub path: PathBuf,
    /// Whether the copy carries an execute bit
    pub executable: bool,
}

impl InstalledHook {
    /// Re-derive the installed state from the filesystem
    pub(crate) fn query(layout: &Layout, scope: Scope, name: &str) -> Option<Self> {
        let path = layout.installed_path(scope, name);
        let metadata = fs::metadata(&path).ok()?;
        if !metadata.is_file() {
            return None;
        }

        #[cfg(unix)]
        let executable = {
            use std::os::unix::fs::PermissionsExt;
            metadata.permissions().mode() & 0o111 != 0
        };
        #[cfg(not(unix))]
        let executable = true;

        Some(Self { path, executable })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use tempfile::TempDir;

    fn candidate(temp: &TempDir, name: &str, content: &str) -> Hook {
        let path = temp.path().join(name);
        fs::write(&path, content).unwrap();
        Hook::new(name.to_string(), path, HookKind::Available)
    }

    #[test]
    fn test_meta_data_reads_header() {
        let temp = TempDir::new().unwrap();
        let hook = candidate(
            &temp,
            "fmt",
            "#!/bin/sh\n# description: Format staged files\n# targets: [\"pre-commit\"]\n",
        );

        let metadata = hook.meta_data().unwrap();
        assert_eq!(metadata.description, "Format staged files");
        assert_eq!(metadata.targets, vec!["pre-commit"]);
    }

    #[test]
    fn test_meta_data_is_memoized() {
        let temp = TempDir::new().unwrap();
        let hook = candidate(&temp, "fmt", "# description: before\n");

        assert_eq!(hook.meta_data().unwrap().description, "before");

        // The entity keeps the first parse even when the file changes
        fs::write(hook.source_path(), "# description: after\n").unwrap();
        assert_eq!(hook.meta_data().unwrap().description, "before");
    }

    #[test]
    fn test_meta_data_missing_source_is_a_read_error() {
        let temp = TempDir::new().unwrap();
        let hook = Hook::new(
            "ghost".to_string(),
            temp.path().join("ghost"),
            HookKind::Available,
        );

        let err = hook.meta_data().unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }

    #[test]
    fn test_installed_absent_when_scope_root_missing() {
        let temp = TempDir::new().unwrap();
        let layout = Layout::from_git_dir(&temp.path().join(".git"));
        let hook = candidate(&temp, "fmt", "");

        assert!(hook.installed(&layout, Scope::Local).is_none());
        assert!(hook.installed(&layout, Scope::Shared).is_none());
    }

    #[test]
    fn test_installed_reports_copy_and_mode() {
        let temp = TempDir::new().unwrap();
        let layout = Layout::from_git_dir(&temp.path().join(".git"));
        let hook = candidate(&temp, "fmt", "");

        let copy = layout.installed_path(Scope::Local, "fmt");
        fs::create_dir_all(copy.parent().unwrap()).unwrap();
        fs::write(&copy, "#!/bin/sh\n").unwrap();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&copy, fs::Permissions::from_mode(0o644)).unwrap();
            let state = hook.installed(&layout, Scope::Local).unwrap();
            assert_eq!(state.path, copy);
            assert!(!state.executable);

            fs::set_permissions(&copy, fs::Permissions::from_mode(0o755)).unwrap();
            assert!(hook.installed(&layout, Scope::Local).unwrap().executable);
        }

        // The other scope stays untouched
        assert!(hook.installed(&layout, Scope::Shared).is_none());
    }
}
