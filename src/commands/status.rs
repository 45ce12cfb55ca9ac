use crate::commands::{file_catalog, run_in_terminal, Session};
use crate::core::{
    config::ColorWhen,
    error::Result,
    git::ChangeFilter,
    picker::ChooseOptions,
    render::status_header,
};
use std::io::{BufRead, Write};

pub fn execute_status(color: Option<ColorWhen>) -> Result<()> {
    run_in_terminal(color, |session| show_status(session))
}

/// List every changed path with its staged and unstaged line counts
pub fn show_status<R: BufRead, W: Write>(session: &mut Session<'_, R, W>) -> Result<()> {
    let changes = session.repo.collect_changes(ChangeFilter::All)?;
    if changes.is_empty() {
        return session.say("");
    }

    let mut catalog = file_catalog(changes)?;
    let options = ChooseOptions::default()
        .list_only()
        .with_header(status_header());
    session.picker.list_and_choose(&mut catalog, &options)?;
    Ok(())
}
