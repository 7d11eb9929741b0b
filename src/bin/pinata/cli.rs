//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser};

use pinata::util::context::DEFAULT_WORKFLOW_DIR;

/// Pinata - pins CI workflow dependencies to commit SHAs
#[derive(Parser)]
#[command(name = "pinata")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(flatten)]
    pub pin: PinArgs,
}

#[derive(Args)]
pub struct PinArgs {
    /// Directory of workflow files to pin
    #[arg(default_value = DEFAULT_WORKFLOW_DIR)]
    pub dir: PathBuf,

    /// GitHub API token (raises the rate limit)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Show which files would change without writing them
    #[arg(long)]
    pub dry_run: bool,
}
