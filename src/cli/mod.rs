//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - add: Append a priority item
//! - list: Print items sorted by priority
//! - remove: Delete an item by stored index
//! - summarize: Ask Ollama for a summary of the list
//! - config init: Initialize configuration file

pub mod add;
pub mod config;
pub mod list;
pub mod remove;
pub mod summarize;

use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;

/// Resolve the config to use for a command invocation.
///
/// Explicit `--config` paths must exist; the default `prio.toml` in the
/// working directory is optional and falls back to built-in defaults.
fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => crate::config::load(&path),
        None => crate::config::load_or_default(&PathBuf::from("prio.toml")),
    }
}
