//! The main command menu.
//!
//! Shows the status, then offers the commands in a singleton, immediate menu until
//! the user quits or gives an empty answer.

use crate::commands::{
    add_untracked, review_diff, revert, run_in_terminal, show_help, show_status, update, Session,
};
use crate::core::{catalog::Catalog, config::ColorWhen, error::Result, picker::ChooseOptions};
use std::io::{BufRead, Write};

pub const MENU_HEADER: &str = "*** Commands ***";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Status,
    Update,
    Revert,
    AddUntracked,
    Diff,
    Quit,
    Help,
}

impl MenuCommand {
    /// Menu order
    pub const ALL: [MenuCommand; 7] = [
        MenuCommand::Status,
        MenuCommand::Update,
        MenuCommand::Revert,
        MenuCommand::AddUntracked,
        MenuCommand::Diff,
        MenuCommand::Quit,
        MenuCommand::Help,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuCommand::Status => "status",
            MenuCommand::Update => "update",
            MenuCommand::Revert => "revert",
            MenuCommand::AddUntracked => "add untracked",
            MenuCommand::Diff => "diff",
            MenuCommand::Quit => "quit",
            MenuCommand::Help => "help",
        }
    }
}

pub fn execute_interactive(color: Option<ColorWhen>) -> Result<()> {
    run_in_terminal(color, |session| run_menu(session))
}

pub fn run_menu<R: BufRead, W: Write>(session: &mut Session<'_, R, W>) -> Result<()> {
    show_status(session)?;

    let options = ChooseOptions::default()
        .singleton()
        .immediate()
        .with_columns(session.menu_columns)
        .with_header(MENU_HEADER)
        .with_header_indent(false)
        .with_prompt("What now");

    loop {
        let mut catalog =
            Catalog::commands(MenuCommand::ALL.iter().map(|command| (command.label(), *command)))?;
        let chosen = session
            .picker
            .list_and_choose(&mut catalog, &options)?
            .first()
            .and_then(|choice| choice.command())
            .copied();
        log::debug!("menu command: {chosen:?}");

        match chosen {
            None | Some(MenuCommand::Quit) => return session.say("Bye."),
            Some(MenuCommand::Status) => show_status(session)?,
            Some(MenuCommand::Update) => update(session)?,
            Some(MenuCommand::Revert) => revert(session)?,
            Some(MenuCommand::AddUntracked) => add_untracked(session)?,
            Some(MenuCommand::Diff) => review_diff(session)?,
            Some(MenuCommand::Help) => show_help(session)?,
        }
    }
}
