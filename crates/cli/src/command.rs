//! Command trait for grapnel CLI
//!
//! This module defines the `Command` trait that all grapnel commands
//! implement. It provides a uniform interface for command execution,
//! making commands easy to test and extend.

use crate::common::RuntimeContext;
use crate::error::Result;

/// Trait for all grapnel commands
///
/// The `execute` method receives a [`RuntimeContext`] carrying the shared
/// state: the discovered repository layout and the configured registry.
/// Commands can specify their return type via the `Output` associated
/// type; most return `()`.
pub trait Command {
    /// The type returned by this command
    type Output;

    /// Execute the command with the given runtime context
    ///
    /// # Errors
    ///
    /// Returns a `CommandError` if the command fails to execute. Error
    /// messages should be descriptive enough for the user to act on.
    fn execute(&self, context: &RuntimeContext) -> Result<Self::Output>;
}
