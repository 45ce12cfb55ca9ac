use crate::commands::{file_catalog, paths_message, Session};
use crate::core::{
    error::Result, git::ChangeFilter, picker::ChooseOptions, render::status_header,
};
use std::io::{BufRead, Write};

/// Choose paths with staged changes and put their index entries back to HEAD
pub fn revert<R: BufRead, W: Write>(session: &mut Session<'_, R, W>) -> Result<()> {
    let changes = session.repo.collect_changes(ChangeFilter::IndexOnly)?;
    if changes.is_empty() {
        return Ok(());
    }

    let mut catalog = file_catalog(changes)?;
    let options = ChooseOptions::default()
        .with_header(status_header())
        .with_prompt("Revert");
    let paths: Vec<String> = session
        .picker
        .list_and_choose(&mut catalog, &options)?
        .into_iter()
        .map(|choice| choice.label.clone())
        .collect();

    if paths.is_empty() {
        return Ok(());
    }

    session.repo.reset_files(&paths)?;
    session.say(&paths_message("reverted", paths.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{committed_repo, git, run_scripted};
    use crate::core::git::GitRepo;

    #[test]
    fn test_revert_unstages_chosen_paths() {
        let temp_dir = committed_repo();
        let dir = temp_dir.path();
        std::fs::write(dir.join("tracked.txt"), "changed\n").unwrap();
        std::fs::write(dir.join("other.txt"), "new\n").unwrap();
        git(dir, &["add", "tracked.txt", "other.txt"]);

        let output = run_scripted(dir, "tr\n\n", |session| revert(session));

        assert!(output.contains("Revert>> "));
        assert!(output.contains("* 2:"));
        assert!(output.ends_with("reverted 1 path\n"));

        let repo = GitRepo::open(dir).unwrap();
        let staged: Vec<_> = repo
            .collect_changes(ChangeFilter::IndexOnly)
            .unwrap()
            .into_iter()
            .map(|c| c.path)
            .collect();
        assert_eq!(staged, vec!["other.txt"]);
    }

    #[test]
    fn test_revert_star_reverts_everything() {
        let temp_dir = committed_repo();
        let dir = temp_dir.path();
        std::fs::write(dir.join("tracked.txt"), "changed\n").unwrap();
        std::fs::write(dir.join("other.txt"), "new\n").unwrap();
        git(dir, &["add", "tracked.txt", "other.txt"]);

        let output = run_scripted(dir, "*\n", |session| revert(session));

        assert!(output.ends_with("reverted 2 paths\n"));
        let repo = GitRepo::open(dir).unwrap();
        assert!(repo.collect_changes(ChangeFilter::IndexOnly).unwrap().is_empty());
    }
}
