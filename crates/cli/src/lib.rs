//! Grapnel CLI library
//!
//! This library contains all the CLI logic for grapnel, making it reusable
//! for testing and integration with other tools.

pub mod cmd;
pub mod command;
pub mod common;
pub mod error;
pub mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use command::Command;
use common::RuntimeContext;

/// Grapnel - a git hook manager
#[derive(Parser)]
#[command(name = "grapnel")]
#[command(about = "Discover, inspect, and install git hooks")]
#[command(version)]
#[command(long_about = "Discover, inspect, and install git hooks

Grapnel scans configured search paths for candidate hook scripts, reads
the metadata declared in their header comments, and installs them into
the current repository's hook area. An installed hook is copied into a
scope (local to this checkout, or shared across checkouts), marked
executable, and wired into one <event>.d/ directory per declared trigger
event, so several hooks can share the same git event.")]
pub struct Cli {
    /// Additional hook search directories, searched before the default
    ///
    /// Repeatable; colon-separated in the environment variable.
    #[arg(
        long = "hook-path",
        env = "GRAPNEL_HOOK_PATH",
        value_name = "DIR",
        value_delimiter = ':'
    )]
    pub hook_path: Vec<PathBuf>,

    /// Enable verbose output (shows DEBUG level logs)
    #[arg(short, long)]
    pub verbose: bool,

    /// Write logs to a file (useful for debugging)
    #[arg(long, env = "GRAPNEL_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the grapnel CLI
#[derive(Subcommand)]
pub enum Commands {
    /// List available or installed hooks
    List(cmd::list::ListCommand),

    /// Show one hook's metadata and per-scope installed state
    Show(cmd::show::ShowCommand),

    /// Install a hook into a scope and wire its trigger events
    Install(cmd::install::InstallCommand),

    /// Remove an installed hook and its trigger wiring
    Uninstall(cmd::uninstall::UninstallCommand),
}

/// Main entry point for the CLI logic
pub fn run(cli: Cli) -> Result<()> {
    // Initialize logging based on verbosity
    crate::logging::init(cli.verbose, cli.log_file.as_deref())?;

    // Overrides first, XDG default last, passed into the registry explicitly
    let search_paths = grapnel_engine::dirs::search_paths(&cli.hook_path);
    tracing::debug!("Hook search paths: {search_paths:?}");
    let context = RuntimeContext::new(search_paths)
        .context("Failed to locate the repository hook area")?;

    // Execute the command
    match cli.command {
        Commands::List(cmd) => cmd.execute(&context).map_err(Into::into),
        Commands::Show(cmd) => cmd.execute(&context).map_err(Into::into),
        Commands::Install(cmd) => cmd.execute(&context).map_err(Into::into),
        Commands::Uninstall(cmd) => cmd.execute(&context).map_err(Into::into),
    }
}
