use crate::error;
use anyhow::{Context, Result, bail};
use git2::Repository;
use indicatif::ProgressBar;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process::Command;

/// the version-control calls the categorizer depends on
///
/// implementations never fail: a broken call yields empty output
pub trait Vcs {
    /// modified-but-unstaged paths, one per entry
    fn modified_paths(&self) -> Vec<String>;

    /// untracked-but-not-ignored paths, one per entry
    fn untracked_paths(&self) -> Vec<String>;

    /// unified diff of the unstaged changes to `path`
    fn diff(&self, path: &str) -> String;
}

/// locate the work tree root of the repository containing `start`
///
/// every git call runs from the root so paths reported by `git diff` and
/// `git ls-files` line up regardless of the current subdirectory
pub fn discover_workdir(start: &Path) -> Result<PathBuf> {
    let repo = Repository::discover(start).context("not in a git repository")?;
    match repo.workdir() {
        Some(workdir) => Ok(workdir.to_path_buf()),
        None => bail!("repository has no working tree (bare repository)"),
    }
}

/// `Vcs` backed by the git binary
pub struct GitCli {
    workdir: PathBuf,
    progress: ProgressBar,
}

impl GitCli {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            progress: ProgressBar::hidden(),
        }
    }

    /// hide `progress` while printing diagnostics so redraws cannot clobber them
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// run git with plain-text output settings, returning stdout
    fn run(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args([
                "--literal-pathspecs",
                "-c",
                "core.quotepath=off",
                "-c",
                "color.ui=never",
            ])
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .with_context(|| format!("failed to run git {}", args.join(" ")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "error running: git {} ({})\n{}",
                args.join(" "),
                output.status,
                stderr.trim_end()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// run git, logging a failure and substituting empty output
    fn run_or_empty(&self, args: &[&str]) -> String {
        match self.run(args) {
            Ok(stdout) => stdout,
            Err(e) => {
                self.progress.suspend(|| error!("{:#}", e));
                String::new()
            }
        }
    }

    /// NUL-separated path listing; `-z` output is never C-quoted
    fn path_list(&self, args: &[&str]) -> Vec<String> {
        self.run_or_empty(args)
            .split('\0')
            .filter(|path| !path.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Vcs for GitCli {
    fn modified_paths(&self) -> Vec<String> {
        self.path_list(&["diff", "--name-only", "-z", "--no-color"])
    }

    fn untracked_paths(&self) -> Vec<String> {
        self.path_list(&["ls-files", "-z", "--others", "--exclude-standard"])
    }

    fn diff(&self, path: &str) -> String {
        let stdout = self.run_or_empty(&["diff", "--no-color", "--no-ext-diff", "--", path]);
        stdout.trim_end_matches('\n').to_string()
    }
}

/// union of modified and untracked paths, each listed once, in git's order
pub fn changed_paths(vcs: &impl Vcs) -> Vec<String> {
    let mut seen = HashSet::new();
    vcs.modified_paths()
        .into_iter()
        .chain(vcs.untracked_paths())
        .filter(|path| seen.insert(path.clone()))
        .collect()
}
