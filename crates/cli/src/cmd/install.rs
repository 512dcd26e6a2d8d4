//! Install command implementation
//!
//! Resolve an available hook by name, install it into the chosen scope,
//! and report the installed copy and its wired trigger events.

use clap::Args;
use grapnel_core::{Error, HookKind, Scope};
use owo_colors::OwoColorize;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;

/// Install command
#[derive(Debug, Args)]
pub struct InstallCommand {
    /// Name of the hook to install
    #[arg(required = true)]
    pub name: String,

    /// Scope to install into
    #[arg(short, long, default_value = "local", value_name = "SCOPE")]
    pub scope: Scope,
}

impl Command for InstallCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        let hook = context
            .registry()
            .find(&self.name, HookKind::Available)?
            .ok_or_else(|| Error::HookNotFound {
                name: self.name.clone(),
                kind: HookKind::Available,
            })?;

        tracing::debug!(
            "Installing {} from {}",
            hook.name(),
            hook.source_path().display()
        );
        let installed = hook.install(&context.installer(), self.scope)?;

        println!(
            "{} {} into {} scope: {}",
            "Installed".green().bold(),
            hook.name().cyan(),
            self.scope,
            installed.path.display()
        );

        let metadata = hook.meta_data()?;
        if metadata.targets.is_empty() {
            println!(
                "  {}",
                "no targets declared; the hook is installed but not wired".yellow()
            );
        } else {
            for target in &metadata.targets {
                println!("  wired {target}");
            }
        }

        Ok(())
    }
}
