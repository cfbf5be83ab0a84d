use clap::Parser;
use std::path::PathBuf;

/// git-sort-changes: sort unstaged and untracked files into commit-ready groups
#[derive(Parser, Debug)]
#[command(
    name = "git-sort-changes",
    about,
    long_about = None,
    disable_version_flag = true
)]
pub struct Cli {
    /// read classifier keywords from this JSON file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// print the effective configuration as JSON and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
