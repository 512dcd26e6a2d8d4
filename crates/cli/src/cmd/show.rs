//! Show command implementation
//!
//! Display one available hook's metadata and its installed state in each
//! scope.

use clap::Args;
use grapnel_core::{Error, HookKind, Scope};
use owo_colors::OwoColorize;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;

/// Show command
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Name of the hook to show
    #[arg(required = true)]
    pub name: String,
}

impl Command for ShowCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        let hook = context
            .registry()
            .find(&self.name, HookKind::Available)?
            .ok_or_else(|| Error::HookNotFound {
                name: self.name.clone(),
                kind: HookKind::Available,
            })?;
        let metadata = hook.meta_data()?;

        println!("{} {}", "Hook:".bold(), hook.name().cyan());
        println!("Source: {}", hook.source_path().display());
        if !metadata.description.is_empty() {
            println!("Description: {}", metadata.description);
        }
        if metadata.targets.is_empty() {
            println!("Targets: {}", "none declared".dimmed());
        } else {
            println!("Targets: {}", metadata.targets.join(", "));
        }

        println!();
        for scope in Scope::ALL {
            match hook.installed(context.layout(), scope) {
                Some(installed) => {
                    let mode = if installed.executable {
                        "executable".green().to_string()
                    } else {
                        "not executable".red().to_string()
                    };
                    println!(
                        "{scope}: installed at {} ({mode})",
                        installed.path.display()
                    );
                }
                None => println!("{scope}: {}", "not installed".dimmed()),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use crate::error::CommandError;
    use grapnel_engine::Layout;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_show_unknown_hook_is_not_found() {
        let temp = TempDir::new().unwrap();
        let search = temp.path().join("scripts");
        fs::create_dir_all(&search).unwrap();
        let layout = Layout::from_git_dir(&temp.path().join(".git"));
        let context = RuntimeContext::with_layout(vec![search], layout);

        let cmd = ShowCommand {
            name: "ghost".to_string(),
        };
        let err = cmd.execute(&context).unwrap_err();
        assert!(matches!(
            err,
            CommandError::Engine(Error::HookNotFound { .. })
        ));
    }
}
