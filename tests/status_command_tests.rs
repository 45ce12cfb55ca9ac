use predicates::prelude::*;

mod common;
use common::{assertions, fixtures::*, repository::*};

#[cfg(test)]
mod status_command_tests {
    use super::*;

    #[test]
    fn test_status_shows_worktree_counts() -> anyhow::Result<()> {
        let repo = create_multi_file_repo()?;

        repo.stager()
            .arg("status")
            .assert()
            .success()
            .stdout(assertions::has_status_header())
            .stdout(predicate::str::contains("  1: "))
            .stdout(assertions::has_file_row("unchanged", "+2/-1", "file1.txt"))
            .stdout(assertions::has_file_row("unchanged", "+2/-1", "file3.txt"))
            .stdout(predicate::str::contains("file4.txt").not());

        Ok(())
    }

    #[test]
    fn test_status_shows_staged_and_unstaged_columns() -> anyhow::Result<()> {
        let repo = create_mixed_repo()?;

        repo.stager()
            .arg("status")
            .assert()
            .success()
            .stdout(assertions::has_file_row("+2/-1", "nothing", "staged.txt"))
            .stdout(assertions::has_file_row("unchanged", "+2/-1", "unstaged.txt"))
            .stdout(predicate::str::contains("untracked.txt").not());

        Ok(())
    }

    #[test]
    fn test_status_never_prompts() -> anyhow::Result<()> {
        let repo = create_mixed_repo()?;

        repo.stager()
            .arg("status")
            .write_stdin("1\n")
            .assert()
            .success()
            .stdout(predicate::str::contains(">").not());

        assert_eq!(staged_paths(&repo.path)?, vec!["staged.txt"]);
        Ok(())
    }

    #[test]
    fn test_status_clean_repository() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;

        repo.stager()
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::eq("\n"));

        Ok(())
    }

    #[test]
    fn test_status_before_first_commit() -> anyhow::Result<()> {
        let repo = setup_test_repo()?;
        create_file(&repo.path, "first.txt", "a\nb\nc\n")?;
        git_add(&repo.path, "first.txt")?;

        repo.stager()
            .arg("status")
            .assert()
            .success()
            .stdout(assertions::has_file_row("+3/-0", "nothing", "first.txt"));

        Ok(())
    }

    #[test]
    fn test_status_outside_repository_fails() -> anyhow::Result<()> {
        let temp_dir = tempfile::TempDir::new()?;
        let mut cmd = assert_cmd::Command::cargo_bin("git-stager")?;

        cmd.arg("status")
            .current_dir(temp_dir.path())
            .env("XDG_CONFIG_HOME", temp_dir.path())
            .assert()
            .failure()
            .stderr(assertions::not_in_git_repo());

        Ok(())
    }

    #[test]
    fn test_status_color_always() -> anyhow::Result<()> {
        let repo = create_mixed_repo()?;

        repo.stager_with_color("always")
            .arg("status")
            .assert()
            .success()
            .stdout(assertions::has_ansi_codes());

        Ok(())
    }

    #[test]
    fn test_status_plain_when_not_a_terminal() -> anyhow::Result<()> {
        let repo = create_mixed_repo()?;

        repo.stager_default_color()
            .arg("status")
            .assert()
            .success()
            .stdout(assertions::has_ansi_codes().not());

        Ok(())
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_status_color_from_config_file() -> anyhow::Result<()> {
        let repo = create_mixed_repo()?;
        write_config(&repo, r#"{ "color": "always" }"#)?;

        repo.stager_default_color()
            .arg("status")
            .assert()
            .success()
            .stdout(assertions::has_ansi_codes());

        Ok(())
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_invalid_config_file_is_reported() -> anyhow::Result<()> {
        let repo = create_mixed_repo()?;
        write_config(&repo, "{ broken")?;

        repo.stager()
            .arg("status")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to parse config file"));

        Ok(())
    }
}
