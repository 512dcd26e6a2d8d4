//! Common utilities and types shared across CLI commands

use crate::error::Result;
use grapnel_engine::{Installer, Layout, Registry};
use std::path::PathBuf;

/// Runtime context for CLI commands
///
/// Consolidates the state every command needs: the repository layout
/// discovered from the working directory and a registry over the
/// configured search paths. Commands receive one context instead of
/// assembling these pieces themselves.
pub struct RuntimeContext {
    registry: Registry,
}

impl RuntimeContext {
    /// Discover the repository from the working directory and build the context
    ///
    /// # Errors
    ///
    /// Returns an error when the working directory cannot be determined or
    /// is not inside a repository.
    pub fn new(search_paths: Vec<PathBuf>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let layout = Layout::discover(&cwd)?;
        Ok(Self::with_layout(search_paths, layout))
    }

    /// Build a context over an explicit layout
    ///
    /// Used by tests to point commands at a scratch tree.
    #[must_use]
    pub fn with_layout(search_paths: Vec<PathBuf>, layout: Layout) -> Self {
        Self {
            registry: Registry::new(search_paths, layout),
        }
    }

    /// The hook registry over the configured search paths
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The discovered repository layout
    #[must_use]
    pub fn layout(&self) -> &Layout {
        self.registry.layout()
    }

    /// An installer over the discovered layout
    #[must_use]
    pub fn installer(&self) -> Installer<'_> {
        Installer::new(self.layout())
    }
}
