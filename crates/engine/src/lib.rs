//! # Grapnel Engine
//!
//! Core library for the grapnel hook manager.
//!
//! This crate turns a loose collection of candidate hook scripts into
//! correctly installed, executable, multi-target triggers inside a
//! repository's hook area:
//!
//! - **Metadata**: Parsing the declarative header block of a hook script
//! - **Hook Entity**: One candidate or installed script with lazy metadata
//! - **Registry**: Discovery across search paths and installation scopes
//! - **Installer**: Copy, permission, and symlink wiring for one scope
//! - **Layout**: Path derivation for the repository hook area
//!
//! The engine never executes hooks; it only keeps each `<event>.d/`
//! directory populated with correctly named, executable links for the
//! dispatcher to fan out over.

pub mod dirs;
pub mod hook;
pub mod installer;
pub mod layout;
pub mod metadata;
pub mod registry;

// Re-export error and vocabulary types from core
pub use grapnel_core::{Error, HookKind, Result, Scope};

// Re-export commonly used types
pub use hook::{Hook, InstalledHook};
pub use installer::Installer;
pub use layout::Layout;
pub use metadata::Metadata;
pub use registry::Registry;
