use crate::commands::{file_catalog, Session};
use crate::core::{
    error::Result, git::ChangeFilter, picker::ChooseOptions, render::status_header,
};
use std::io::{BufRead, Write};

/// Choose one staged path and show its diff between HEAD and the index
pub fn review_diff<R: BufRead, W: Write>(session: &mut Session<'_, R, W>) -> Result<()> {
    let changes = session.repo.collect_changes(ChangeFilter::IndexOnly)?;
    if changes.is_empty() {
        return Ok(());
    }

    let mut catalog = file_catalog(changes)?;
    let options = ChooseOptions::default()
        .immediate()
        .with_header(status_header())
        .with_prompt("Review diff");
    let paths: Vec<String> = session
        .picker
        .list_and_choose(&mut catalog, &options)?
        .into_iter()
        .map(|choice| choice.label.clone())
        .collect();

    if paths.is_empty() {
        return Ok(());
    }

    let color = session.picker.palette().enabled;
    let diff = session.repo.diff_cached(&paths, color)?;
    write!(session.picker.output(), "{diff}")?;
    Ok(())
}
