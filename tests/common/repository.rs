//! Git repository management and setup utilities
//!
//! Provides functions for creating test repositories, changing files in them and
//! inspecting the resulting index, plus the command builder used to run git-stager
//! inside them.

#![allow(dead_code)]

use assert_cmd::Command as StagerCommand;
use git_stager::core::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Test repository setup result. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    /// Working tree of the repository
    pub path: PathBuf,
    /// Private config home so the user's own settings never leak into tests
    pub config_home: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// git-stager running inside the repository with colors off
    pub fn stager(&self) -> StagerCommand {
        self.stager_with_color("never")
    }

    /// git-stager running inside the repository with the given `--color` value
    pub fn stager_with_color(&self, color: &str) -> StagerCommand {
        let mut cmd = self.stager_default_color();
        cmd.args(["--color", color]);
        cmd
    }

    /// git-stager without an explicit `--color` flag
    pub fn stager_default_color(&self) -> StagerCommand {
        let mut cmd = StagerCommand::cargo_bin("git-stager").expect("binary is built");
        cmd.current_dir(&self.path)
            .env("HOME", &self.config_home)
            .env("XDG_CONFIG_HOME", &self.config_home)
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env_remove("RUST_LOG");
        cmd
    }
}

fn git(repo_path: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Sets up a fresh git repository without commits
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let repo_path = temp_dir.path().join("repo");
    let config_home = temp_dir.path().join("config");
    fs::create_dir_all(&repo_path)?;
    fs::create_dir_all(&config_home)?;

    git(&repo_path, &["init"])?;
    // Set git config to avoid prompts during tests
    git(&repo_path, &["config", "user.name", "Test User"])?;
    git(&repo_path, &["config", "user.email", "test@example.com"])?;
    git(&repo_path, &["config", "commit.gpgsign", "false"])?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
        config_home,
    })
}

/// Sets up a git repository whose first commit contains "initial.txt"
pub fn setup_test_repo_with_initial_commit() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "initial.txt", "initial content\n")?;
    git_add(&repo.path, "initial.txt")?;
    git_commit(&repo.path, "Initial commit")?;

    Ok(repo)
}

/// Creates or overwrites a file in the repository
pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    fs::write(repo_path.join(filename), content)?;
    Ok(())
}

/// Adds a file to the git index ("." for everything)
pub fn git_add(repo_path: &Path, filename: &str) -> Result<()> {
    git(repo_path, &["add", filename])?;
    Ok(())
}

pub fn git_commit(repo_path: &Path, message: &str) -> Result<()> {
    git(repo_path, &["commit", "-m", message])?;
    Ok(())
}

/// Creates files with two lines of sequential content each
pub fn create_test_files(repo_path: &Path, filenames: &[&str]) -> Result<()> {
    for (i, filename) in filenames.iter().enumerate() {
        let content = format!("content{}\nline 2\n", i + 1);
        create_file(repo_path, filename, &content)?;
    }
    Ok(())
}

/// Rewrites files created by [`create_test_files`]: one line changed, one added
pub fn modify_test_files(repo_path: &Path, filenames: &[&str]) -> Result<()> {
    for (i, filename) in filenames.iter().enumerate() {
        let content = format!("modified{}\nline 2\nnew line\n", i + 1);
        create_file(repo_path, filename, &content)?;
    }
    Ok(())
}

/// Paths with staged changes, as git reports them
pub fn staged_paths(repo_path: &Path) -> Result<Vec<String>> {
    let names = git(repo_path, &["diff", "--cached", "--name-only"])?;
    Ok(names.lines().map(str::to_string).collect())
}

/// Paths with unstaged changes to tracked files
pub fn unstaged_paths(repo_path: &Path) -> Result<Vec<String>> {
    let names = git(repo_path, &["diff", "--name-only"])?;
    Ok(names.lines().map(str::to_string).collect())
}

/// Untracked, non-ignored files
pub fn untracked_paths(repo_path: &Path) -> Result<Vec<String>> {
    let names = git(repo_path, &["ls-files", "--others", "--exclude-standard"])?;
    Ok(names.lines().map(str::to_string).collect())
}
