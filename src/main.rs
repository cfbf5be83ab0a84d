mod categorize;
mod cli;
mod config;
mod constants;
mod diff;
mod git;
mod report;
mod ui;

use crate::categorize::Categorizer;
use crate::cli::Cli;
use crate::config::Config;
use crate::git::GitCli;
use anyhow::{Context, Result};
use std::io::{self, IsTerminal};
use std::path::Path;

fn main() {
    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Cli::parse_args();
    let config = Config::load(args.config.as_deref())?;

    if args.print_config {
        info!("{}", config.to_json()?);
        return Ok(());
    }

    // keep suggested commands copyable when piped
    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let workdir = git::discover_workdir(Path::new("."))?;
    let progress = ui::progress(0);
    let vcs = GitCli::new(workdir).with_progress(progress.clone());
    let categorizer = Categorizer::new(&vcs, &config)?;

    if config.feature.path_patterns.is_empty() && config.feature.diff_keywords.is_empty() {
        warning!(
            "no {} path patterns or keywords configured, nothing will be grouped as {}",
            config.feature.name,
            config.feature.name
        );
    }

    let paths = git::changed_paths(&vcs);
    if paths.is_empty() {
        progress.finish_and_clear();
        status!("no unstaged or untracked changes found");
        return Ok(());
    }

    progress.set_length(paths.len() as u64);
    let groups = categorizer.group(&paths, &progress);
    progress.finish_and_clear();

    let mut stdout = io::stdout().lock();
    report::render(&mut stdout, &groups, &config).context("failed to write report")?;

    Ok(())
}
