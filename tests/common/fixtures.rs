//! Predefined repository scenarios
//!
//! Provides functions for creating repositories with specific file states so the
//! command tests start from the same situations.

#![allow(dead_code)]

use super::repository::*;
use git_stager::core::error::Result;
use std::fs;

/// Scenario: three committed files modified in the worktree, two untracked files
pub fn create_multi_file_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_test_files(&repo.path, &["file1.txt", "file2.txt", "file3.txt"])?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial commit")?;

    modify_test_files(&repo.path, &["file1.txt", "file2.txt", "file3.txt"])?;
    create_test_files(&repo.path, &["file4.txt", "file5.txt"])?;

    Ok(repo)
}

/// Scenario: one staged change, one unstaged change, one untracked file
pub fn create_mixed_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_test_files(&repo.path, &["staged.txt", "unstaged.txt"])?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial commit")?;

    modify_test_files(&repo.path, &["staged.txt", "unstaged.txt"])?;
    git_add(&repo.path, "staged.txt")?;
    create_file(&repo.path, "untracked.txt", "one\ntwo\nthree\n")?;

    Ok(repo)
}

/// Writes the git-stager JSON config for this repository's test config home
pub fn write_config(repo: &TestRepo, json: &str) -> Result<()> {
    let dir = repo.config_home.join("git-stager");
    fs::create_dir_all(&dir)?;
    fs::write(dir.join("config.json"), json)?;
    Ok(())
}
