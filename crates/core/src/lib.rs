//! Core types for grapnel
//!
//! This is the foundation crate that the engine and CLI depend on.
//! It provides:
//! - Base error types and the `Result` alias
//! - Installation scope and hook kind vocabulary
//!
//! This crate has no dependencies on other grapnel crates.

pub mod error;
pub mod scope;

pub use error::{Error, Result};
pub use scope::{HookKind, Scope};
