use crate::commands::Session;
use crate::core::{colors::ColorRole, error::Result};
use std::io::{BufRead, Write};

pub const COMMAND_HELP: [(&str, &str); 5] = [
    ("status", "show paths with changes"),
    ("update", "add working tree state to the staged set of changes"),
    ("revert", "revert staged set of changes back to the HEAD version"),
    ("diff", "view diff between HEAD and index"),
    (
        "add untracked",
        "add contents of untracked files to the staged set of changes",
    ),
];

pub fn show_help<R: BufRead, W: Write>(session: &mut Session<'_, R, W>) -> Result<()> {
    for (command, description) in COMMAND_HELP {
        let line = format!("{command:<13} - {description}");
        session.picker.say(ColorRole::Help, &line)?;
    }
    Ok(())
}
