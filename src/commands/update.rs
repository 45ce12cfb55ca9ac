use crate::commands::{file_catalog, paths_message, Session};
use crate::core::{
    error::Result, git::ChangeFilter, picker::ChooseOptions, render::status_header,
};
use std::io::{BufRead, Write};

/// Choose paths with unstaged changes and stage them
pub fn update<R: BufRead, W: Write>(session: &mut Session<'_, R, W>) -> Result<()> {
    let changes = session.repo.collect_changes(ChangeFilter::WorktreeOnly)?;
    if changes.is_empty() {
        return Ok(());
    }

    let mut catalog = file_catalog(changes)?;
    let options = ChooseOptions::default()
        .with_header(status_header())
        .with_prompt("Update");
    let paths: Vec<String> = session
        .picker
        .list_and_choose(&mut catalog, &options)?
        .into_iter()
        .map(|choice| choice.label.clone())
        .collect();

    if paths.is_empty() {
        return Ok(());
    }

    session.repo.add_files(&paths)?;
    session.say(&paths_message("updated", paths.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{committed_repo, run_scripted};
    use crate::core::git::GitRepo;

    #[test]
    fn test_update_stages_chosen_paths() {
        let temp_dir = committed_repo();
        let dir = temp_dir.path();
        std::fs::write(dir.join("tracked.txt"), "a\nb\n").unwrap();

        let output = run_scripted(dir, "1\n\n", |session| update(session));

        assert!(output.contains("Update>> "));
        assert!(output.contains("[t]racked.txt"));
        assert!(output.ends_with("updated 1 path\n"));

        let repo = GitRepo::open(dir).unwrap();
        assert!(repo
            .collect_changes(ChangeFilter::WorktreeOnly)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_update_with_nothing_chosen_changes_nothing() {
        let temp_dir = committed_repo();
        let dir = temp_dir.path();
        std::fs::write(dir.join("tracked.txt"), "a\nb\n").unwrap();

        let output = run_scripted(dir, "\n", |session| update(session));

        assert!(!output.contains("updated"));
        let repo = GitRepo::open(dir).unwrap();
        assert_eq!(repo.collect_changes(ChangeFilter::WorktreeOnly).unwrap().len(), 1);
    }

    #[test]
    fn test_update_without_changes_is_silent() {
        let temp_dir = committed_repo();
        let output = run_scripted(temp_dir.path(), "1\n", |session| update(session));
        assert!(output.is_empty());
    }
}
