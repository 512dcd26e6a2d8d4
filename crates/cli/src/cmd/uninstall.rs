//! Uninstall command implementation
//!
//! Remove a scope's installed copy of a hook together with the trigger
//! links that point at it. Same-named links belonging to other hooks are
//! left alone.

use clap::Args;
use grapnel_core::Scope;
use owo_colors::OwoColorize;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;

/// Uninstall command
#[derive(Debug, Args)]
pub struct UninstallCommand {
    /// Name of the hook to remove
    #[arg(required = true)]
    pub name: String,

    /// Scope to remove from
    #[arg(short, long, default_value = "local", value_name = "SCOPE")]
    pub scope: Scope,
}

impl Command for UninstallCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        tracing::debug!("Uninstalling {} from {} scope", self.name, self.scope);
        context.installer().uninstall(&self.name, self.scope)?;

        println!(
            "{} {} from {} scope",
            "Removed".green().bold(),
            self.name.cyan(),
            self.scope
        );
        Ok(())
    }
}
