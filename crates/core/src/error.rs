//! Base error types for grapnel
//!
//! This module provides the error type shared by all grapnel crates.
//! We use `thiserror` for structured error handling with good error messages.

use crate::scope::HookKind;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Base error type shared by all grapnel crates
#[derive(Error, Debug)]
pub enum Error {
    /// Error reading a file
    #[error("Failed to read file {}: {source}", path.display())]
    FileRead {
        /// The file that could not be read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Error writing a file
    #[error("Failed to write file {}: {source}", path.display())]
    FileWrite {
        /// The file that could not be written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Error creating a directory
    #[error("Failed to create directory {}: {source}", path.display())]
    DirectoryCreate {
        /// The directory that could not be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Error reading a directory
    #[error("Failed to read directory {}: {source}", path.display())]
    DirectoryRead {
        /// The directory that could not be read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Error creating a symbolic link
    #[error("Failed to create link {}: {source}", link.display())]
    LinkCreate {
        /// The link that could not be created
        link: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// No hook with the requested name exists in the queried set
    #[error("Hook not found: {name} ({kind})")]
    HookNotFound {
        /// The name that was looked up
        name: String,
        /// The set that was queried
        kind: HookKind,
    },

    /// Two candidate scripts share the same hook name
    #[error(
        "Duplicate hook name '{name}': {} and {}",
        first.display(),
        second.display()
    )]
    DuplicateHook {
        /// The colliding hook name
        name: String,
        /// The candidate encountered first
        first: PathBuf,
        /// The candidate encountered second
        second: PathBuf,
    },

    /// A trigger link with this name already belongs to a different hook
    #[error(
        "Link collision for hook '{name}': {} already points at {}",
        link.display(),
        existing.display()
    )]
    LinkCollision {
        /// The hook being wired
        name: String,
        /// The link path that is already taken
        link: PathBuf,
        /// Where the existing entry points
        existing: PathBuf,
    },

    /// Scope name is not `local` or `shared`
    #[error("Unknown scope '{value}' (expected 'local' or 'shared')")]
    UnknownScope {
        /// The value that failed to parse
        value: String,
    },

    /// No repository was found at or above the starting path
    #[error("No repository found at {}: {source}", path.display())]
    NoRepository {
        /// Where discovery started
        path: PathBuf,
        /// The underlying git error
        #[source]
        source: git2::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
