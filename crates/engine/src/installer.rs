//! Hook installation and removal
//!
//! Installing a hook materializes it into one scope: the script content is
//! copied to `<scope-root>/hooks/<name>` through a staged temp-file write,
//! marked executable, and wired into `<event>.d/` with one relative
//! symlink per declared target event. The version-control tool invokes a
//! single dispatcher per event; the fan-out directories are what let
//! several hooks share the same trigger.

use crate::hook::{Hook, InstalledHook};
use crate::layout::Layout;
use grapnel_core::{Error, HookKind, Result, Scope};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Mode bits for installed copies: read and execute for everyone
const INSTALLED_MODE: u32 = 0o755;

/// Performs the copy, permission, and symlink sequence for one scope
pub struct Installer<'a> {
    layout: &'a Layout,
}

impl<'a> Installer<'a> {
    /// Create an installer over the given repository layout
    #[must_use]
    pub fn new(layout: &'a Layout) -> Self {
        Self { layout }
    }

    /// Install `hook` into `scope` and wire its declared targets
    ///
    /// Idempotent: re-running converges to the same end state and
    /// overwriting the copy is the upgrade-in-place path. The copy is
    /// staged through a temp file in the destination directory and renamed
    /// into place, so a failed write never leaves a half-written installed
    /// copy. A failure while wiring one target aborts the call; targets
    /// wired earlier stay wired and a re-run completes the rest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileRead`] when the source script is unreadable
    /// (before any filesystem mutation), [`Error::LinkCollision`] when an
    /// `<event>.d/` entry with this hook's name already points at a
    /// different file, and the underlying I/O error for directory, write,
    /// or symlink failures.
    pub fn install(&self, hook: &Hook, scope: Scope) -> Result<InstalledHook> {
        // Read metadata and content up front so an unreadable source
        // aborts before anything is touched.
        let targets = hook.meta_data()?.targets.clone();
        let content = fs::read(hook.source_path()).map_err(|e| Error::FileRead {
            path: hook.source_path().to_path_buf(),
            source: e,
        })?;

        let hooks_dir = self.layout.hooks_dir(scope);
        fs::create_dir_all(&hooks_dir).map_err(|e| Error::DirectoryCreate {
            path: hooks_dir.clone(),
            source: e,
        })?;

        let installed = self.layout.installed_path(scope, hook.name());
        stage_copy(&hooks_dir, &installed, &content)?;

        for event in &targets {
            self.wire_target(scope, event, hook.name(), &installed)?;
        }

        tracing::debug!(
            "Installed hook {} into {} scope ({} targets)",
            hook.name(),
            scope,
            targets.len()
        );

        Ok(InstalledHook {
            path: installed,
            executable: true,
        })
    }

    /// Remove the installed copy of `name` from `scope` and its wired links
    ///
    /// Only links that resolve to this scope's copy are removed; entries
    /// with the same name that point elsewhere belong to another hook and
    /// are left in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HookNotFound`] when the scope has no installed
    /// copy of that name.
    pub fn uninstall(&self, name: &str, scope: Scope) -> Result<()> {
        let installed = self.layout.installed_path(scope, name);
        if !installed.is_file() {
            return Err(Error::HookNotFound {
                name: name.to_string(),
                kind: HookKind::Installed(scope),
            });
        }
        let resolved = fs::canonicalize(&installed).map_err(|e| Error::FileRead {
            path: installed.clone(),
            source: e,
        })?;

        // Drop the links first; once the copy is gone they would dangle
        // and no longer compare equal to it.
        self.unwire_links(scope, name, &resolved)?;
        fs::remove_file(&installed)?;

        tracing::debug!("Removed hook {name} from {scope} scope");
        Ok(())
    }

    /// Ensure `<scope-root>/<event>.d/<name>` links to the installed copy
    fn wire_target(&self, scope: Scope, event: &str, name: &str, installed: &Path) -> Result<()> {
        let target_dir = self.layout.target_dir(scope, event);
        fs::create_dir_all(&target_dir).map_err(|e| Error::DirectoryCreate {
            path: target_dir.clone(),
            source: e,
        })?;

        let link = self.layout.link_path(scope, event, name);
        if link.symlink_metadata().is_ok() {
            let resolved = fs::canonicalize(&link).ok();
            let installed_resolved =
                fs::canonicalize(installed).map_err(|e| Error::FileRead {
                    path: installed.to_path_buf(),
                    source: e,
                })?;
            if resolved.as_deref() == Some(installed_resolved.as_path()) {
                // Already wired to this scope's copy
                return Ok(());
            }
            let existing = resolved
                .or_else(|| fs::read_link(&link).ok())
                .unwrap_or_else(|| link.clone());
            return Err(Error::LinkCollision {
                name: name.to_string(),
                link,
                existing,
            });
        }

        // Relative so a scope tree can be relocated wholesale
        let destination = Path::new("..").join("hooks").join(name);
        symlink(&destination, &link).map_err(|e| Error::LinkCreate {
            link: link.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Remove every `<scope-root>/*.d/<name>` entry resolving to `installed`
    fn unwire_links(&self, scope: Scope, name: &str, installed: &Path) -> Result<()> {
        let root = self.layout.scope_root(scope);
        let read_err = |e: std::io::Error| Error::DirectoryRead {
            path: root.clone(),
            source: e,
        };

        for entry in fs::read_dir(&root).map_err(read_err)? {
            let dir = entry.map_err(read_err)?.path();
            if !dir.is_dir() || dir.extension().is_none_or(|ext| ext != "d") {
                continue;
            }

            let link = dir.join(name);
            if link.symlink_metadata().is_err() {
                continue;
            }
            if fs::canonicalize(&link).ok().as_deref() == Some(installed) {
                fs::remove_file(&link)?;
            } else {
                tracing::warn!(
                    "Leaving entry {} in place; it does not point at this hook's copy",
                    link.display()
                );
            }
        }

        Ok(())
    }
}

/// Write `content` to `installed` through a temp file in the same directory
///
/// The rename keeps the write all-or-nothing; concurrent installers racing
/// on the same scope degrade to last-writer-wins, never a torn file.
fn stage_copy(hooks_dir: &Path, installed: &Path, content: &[u8]) -> Result<()> {
    let write_err = |e: std::io::Error| Error::FileWrite {
        path: installed.to_path_buf(),
        source: e,
    };

    let mut staged = tempfile::NamedTempFile::new_in(hooks_dir).map_err(write_err)?;
    staged.write_all(content).map_err(write_err)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        staged
            .as_file()
            .set_permissions(fs::Permissions::from_mode(INSTALLED_MODE))
            .map_err(write_err)?;
    }

    staged.persist(installed).map_err(|e| write_err(e.error))?;
    Ok(())
}

#[cfg(unix)]
fn symlink(destination: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(destination, link)
}

#[cfg(windows)]
fn symlink(destination: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(destination, link)
}
