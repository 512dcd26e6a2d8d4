//! Error types for CLI commands
//!
//! This module defines the structured error type returned by command
//! execution. Engine errors pass through transparently so the user sees
//! the hook name and offending paths the engine collected.

use thiserror::Error;

/// Errors that can occur during command execution
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum CommandError {
    /// Discovery or installation error from the engine
    #[error(transparent)]
    Engine(#[from] grapnel_core::Error),

    /// Serialization error for structured output
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error (for context added with anyhow)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for command operations
pub type Result<T> = std::result::Result<T, CommandError>;

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use grapnel_core::HookKind;
    use std::io;

    #[test]
    fn test_engine_error_passes_through_verbatim() {
        let engine_err = grapnel_core::Error::HookNotFound {
            name: "linter".to_string(),
            kind: HookKind::Available,
        };
        let error: CommandError = engine_err.into();

        assert_eq!(error.to_string(), "Hook not found: linter (available)");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "no such directory");
        let error: CommandError = io_error.into();

        assert!(error.to_string().contains("IO error"));
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let anyhow_err = anyhow::anyhow!("something went wrong");
        let error: CommandError = anyhow_err.into();

        assert!(error.to_string().contains("something went wrong"));
    }
}
