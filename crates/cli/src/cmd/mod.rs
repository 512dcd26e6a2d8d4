//! CLI command implementations

pub mod install;
pub mod list;
pub mod show;
pub mod uninstall;
