//! CLI arguments parsing

use crate::types::Location;
use clap::Parser;
use std::path::PathBuf;

/// Fetch every gist of a GitHub account
#[derive(Parser, Debug)]
#[command(name = "fetch-gists")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// GitHub access token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Configuration file (JSON)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// API root (overrides the config file)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Where to send the token (overrides the config file)
    #[arg(long)]
    pub auth: Option<Location>,

    /// Gists per page, 1-100 (overrides the config file)
    #[arg(long)]
    pub per_page: Option<u32>,

    /// Output format
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON array
    Json,
    /// Indented JSON array
    Pretty,
    /// Number of gists only
    Count,
    /// One gist id per line
    Ids,
}
