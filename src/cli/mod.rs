//! CLI module
//!
//! Command-line front-end: resolves configuration, fetches all gists
//! and prints them as JSON, pretty JSON, a count, or a list of ids.

mod commands;
mod runner;

pub use commands::{Cli, OutputFormat};
pub use runner::{render, Runner};
