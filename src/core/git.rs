//! Git repository access for the host commands.
//!
//! This module provides [`GitRepo`], which reads per-file line counts of staged and
//! unstaged changes through `git2` and mutates the index by running `git` itself in
//! the working directory.
//!
//! # Public API
//! - [`GitRepo`]: Change collection, staging, unstaging and diff output
//! - [`FileChange`]: One path with its [`FileStat`]
//! - [`ChangeFilter`]: Which changed paths a command is interested in
//!
//! Staged counts compare HEAD (an empty tree before the first commit) with the
//! index; unstaged counts compare the index with the working tree. Submodules are
//! ignored and results are sorted by path.

use crate::core::catalog::{ChangeCount, FileStat};
use crate::core::error::{GitStagerError, Result};
use git2::{Diff, DiffOptions, ErrorCode, Patch, Repository, Status, StatusOptions, Tree};
use std::collections::BTreeMap;
use std::path::Path;
use std::process::{Command, Output};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFilter {
    All,
    /// Paths with staged changes
    IndexOnly,
    /// Paths with unstaged changes
    WorktreeOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub path: String,
    pub stat: FileStat,
}

#[derive(Debug, Default)]
struct Tally {
    stat: FileStat,
    staged: bool,
    unstaged: bool,
}

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path).map_err(|e| match e.code() {
            ErrorCode::NotFound => GitStagerError::NotInGitRepo,
            _ => e.into(),
        })?;
        Ok(GitRepo { repo })
    }

    pub fn repository(&self) -> &Repository {
        &self.repo
    }

    pub fn workdir(&self) -> Result<&Path> {
        self.repo.workdir().ok_or(GitStagerError::BareRepository)
    }

    /// Layered git configuration (system, global, repository)
    pub fn config(&self) -> Result<git2::Config> {
        Ok(self.repo.config()?)
    }

    /// Whether HEAD does not point at a commit yet
    pub fn is_unborn(&self) -> Result<bool> {
        match self.repo.head() {
            Ok(_) => Ok(false),
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                Ok(true)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn head_tree(&self) -> Result<Option<Tree<'_>>> {
        if self.is_unborn()? {
            return Ok(None);
        }
        Ok(Some(self.repo.head()?.peel_to_tree()?))
    }

    /// Tracked paths with staged or unstaged changes, sorted by path
    pub fn collect_changes(&self, filter: ChangeFilter) -> Result<Vec<FileChange>> {
        let mut index = self.repo.index()?;
        index.read(false)?;
        let head_tree = self.head_tree()?;

        let mut opts = DiffOptions::new();
        opts.ignore_submodules(true);

        let mut tallies: BTreeMap<String, Tally> = BTreeMap::new();

        let staged =
            self.repo
                .diff_tree_to_index(head_tree.as_ref(), Some(&index), Some(&mut opts))?;
        tally_diff(&staged, &mut tallies, |tally, count| {
            tally.stat.index = count;
            tally.staged = true;
        })?;

        let unstaged = self.repo.diff_index_to_workdir(Some(&index), Some(&mut opts))?;
        tally_diff(&unstaged, &mut tallies, |tally, count| {
            tally.stat.worktree = count;
            tally.unstaged = true;
        })?;

        let changes: Vec<FileChange> = tallies
            .into_iter()
            .filter(|(_, tally)| match filter {
                ChangeFilter::All => true,
                ChangeFilter::IndexOnly => tally.staged,
                ChangeFilter::WorktreeOnly => tally.unstaged,
            })
            .map(|(path, tally)| FileChange {
                path,
                stat: tally.stat,
            })
            .collect();

        log::debug!("collected {} changed path(s) for {:?}", changes.len(), filter);
        Ok(changes)
    }

    /// Untracked, non-ignored files; their line count is reported as unstaged additions
    pub fn collect_untracked(&self) -> Result<Vec<FileChange>> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(true)
            .recurse_untracked_dirs(true)
            .include_ignored(false)
            .exclude_submodules(true);

        let workdir = self.workdir()?;
        let statuses = self.repo.statuses(Some(&mut opts))?;
        let mut changes = Vec::new();

        for entry in statuses.iter() {
            if !entry.status().contains(Status::WT_NEW) {
                continue;
            }
            let path = entry.path().ok_or(GitStagerError::InvalidUtf8Path)?;
            let lines = untracked_line_count(&workdir.join(path));
            changes.push(FileChange {
                path: path.to_string(),
                stat: FileStat {
                    index: ChangeCount::default(),
                    worktree: ChangeCount::new(lines, 0),
                },
            });
        }

        changes.sort_by(|a, b| a.path.cmp(&b.path));
        log::debug!("collected {} untracked path(s)", changes.len());
        Ok(changes)
    }

    /// Run a git command in the working directory, failing on a non-zero exit
    fn execute_git_command(&self, mut cmd: Command) -> Result<Output> {
        cmd.current_dir(self.workdir()?);
        log::debug!("running {cmd:?}");

        let output = cmd.output()?;
        if !output.status.success() {
            let error_msg = String::from_utf8_lossy(&output.stderr);
            return Err(GitStagerError::git_command_failed(error_msg.trim()));
        }

        Ok(output)
    }

    /// Stage the working tree state of `paths`
    pub fn add_files(&self, paths: &[String]) -> Result<()> {
        if paths.is_empty() {
            return Ok(());
        }

        let mut cmd = Command::new("git");
        cmd.args(["add", "--"]).args(paths);
        self.execute_git_command(cmd).map(|_| ())
    }

    /// Put the index entries of `paths` back to their HEAD version.
    ///
    /// Before the first commit this removes the paths from the index.
    pub fn reset_files(&self, paths: &[String]) -> Result<()> {
        if paths.is_empty() {
            return Ok(());
        }

        let mut cmd = Command::new("git");
        cmd.args(["reset", "-q"]);
        if !self.is_unborn()? {
            cmd.arg("HEAD");
        }
        cmd.arg("--").args(paths);
        self.execute_git_command(cmd).map(|_| ())
    }

    /// Output of `git diff --cached` for `paths`
    pub fn diff_cached(&self, paths: &[String], color: bool) -> Result<String> {
        let mut cmd = Command::new("git");
        cmd.args(["diff", "--cached"])
            .arg(if color { "--color=always" } else { "--no-color" })
            .arg("--")
            .args(paths);

        let output = self.execute_git_command(cmd)?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

fn tally_diff<F>(diff: &Diff<'_>, tallies: &mut BTreeMap<String, Tally>, mut record: F) -> Result<()>
where
    F: FnMut(&mut Tally, ChangeCount),
{
    for position in 0..diff.deltas().len() {
        let Some(delta) = diff.get_delta(position) else {
            continue;
        };
        let path = delta
            .new_file()
            .path()
            .or_else(|| delta.old_file().path())
            .and_then(Path::to_str)
            .ok_or(GitStagerError::InvalidUtf8Path)?
            .to_string();

        let count = match Patch::from_diff(diff, position)? {
            Some(patch) => {
                let (_, added, deleted) = patch.line_stats()?;
                ChangeCount::new(added as u64, deleted as u64)
            }
            None => ChangeCount::default(),
        };

        record(tallies.entry(path).or_default(), count);
    }
    Ok(())
}

/// Lines git would add for an untracked path: the link target for a symlink, the
/// contents otherwise. Unreadable paths count as empty.
fn untracked_line_count(path: &Path) -> u64 {
    let content = match std::fs::symlink_metadata(path) {
        Ok(metadata) if metadata.file_type().is_symlink() => std::fs::read_link(path)
            .map(|target| target.to_string_lossy().into_owned().into_bytes()),
        _ => std::fs::read(path),
    };

    match content {
        Ok(content) => count_lines(&content),
        Err(e) => {
            log::warn!("cannot read untracked {}: {e}", path.display());
            0
        }
    }
}

fn count_lines(content: &[u8]) -> u64 {
    let newlines = content.iter().filter(|&&b| b == b'\n').count() as u64;
    match content.last() {
        Some(&last) if last != b'\n' => newlines + 1,
        _ => newlines,
    }
}
