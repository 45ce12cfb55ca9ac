use crate::commands::{file_catalog, paths_message, Session};
use crate::core::{error::Result, picker::ChooseOptions, render::status_header};
use std::io::{BufRead, Write};

/// Choose untracked files and start tracking them
pub fn add_untracked<R: BufRead, W: Write>(session: &mut Session<'_, R, W>) -> Result<()> {
    let untracked = session.repo.collect_untracked()?;
    if untracked.is_empty() {
        return session.say("No untracked files.");
    }

    let mut catalog = file_catalog(untracked)?;
    let options = ChooseOptions::default()
        .with_header(status_header())
        .with_prompt("Add untracked");
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
    session.say(&paths_message("added", paths.len()))
}
