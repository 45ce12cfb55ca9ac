//! Host commands built on the picker: status, update, revert, add untracked, diff,
//! help and the interactive main menu.
//!
//! Every command works on a [`Session`], which bundles the repository with a
//! [`Picker`] over some input and output stream. The `execute_*` entry points wire a
//! session to the terminal.

pub mod add_untracked;
pub mod diff;
pub mod help;
pub mod interactive;
pub mod revert;
pub mod status;
pub mod update;

pub use add_untracked::*;
pub use diff::*;
pub use help::*;
pub use interactive::*;
pub use revert::*;
pub use status::*;
pub use update::*;

use crate::core::{
    catalog::Catalog,
    config::{ColorWhen, Settings},
    error::Result,
    git::{FileChange, GitRepo},
    picker::Picker,
};
use std::env;
use std::io::{BufRead, IsTerminal, Stdout, StdinLock, Write};

pub struct Session<'p, R, W> {
    pub repo: GitRepo,
    pub picker: Picker<'p, R, W>,
    pub menu_columns: usize,
}

impl<'p, R: BufRead, W: Write> Session<'p, R, W> {
    pub fn new(repo: GitRepo, picker: Picker<'p, R, W>, menu_columns: usize) -> Self {
        Self {
            repo,
            picker,
            menu_columns,
        }
    }

    /// Plain line on the session output
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.picker.output(), "{text}")?;
        Ok(())
    }
}

/// Open the repository around the current directory and resolve settings for it
pub fn prepare(color: Option<ColorWhen>) -> Result<(GitRepo, Settings)> {
    let repo = GitRepo::open(env::current_dir()?)?;
    let settings = Settings::resolve(color, Some(&repo.config()?))?;
    Ok((repo, settings))
}

/// Run `body` with a session reading stdin and writing stdout
pub fn run_in_terminal<F>(color: Option<ColorWhen>, body: F) -> Result<()>
where
    F: FnOnce(&mut Session<'_, StdinLock<'static>, Stdout>) -> Result<()>,
{
    let (repo, settings) = prepare(color)?;
    let palette = settings.palette(std::io::stdout().is_terminal());
    colored::control::set_override(palette.enabled);

    let picker = Picker::new(std::io::stdin().lock(), std::io::stdout(), &palette);
    let mut session = Session::new(repo, picker, settings.menu_columns);
    body(&mut session)?;
    session.picker.output().flush()?;
    Ok(())
}

/// Build a file catalog from collected changes
pub fn file_catalog(changes: Vec<FileChange>) -> Result<Catalog> {
    Catalog::files(changes.into_iter().map(|change| (change.path, change.stat)))
}

/// `"<verb> 1 path"` / `"<verb> N paths"`
pub fn paths_message(verb: &str, count: usize) -> String {
    let noun = if count == 1 { "path" } else { "paths" };
    format!("{verb} {count} {noun}")
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::core::colors::Palette;
    use std::io::Cursor;
    use std::path::Path;
    use std::process::Command;
    use tempfile::TempDir;

    pub fn git(dir: &Path, args: &[&str]) {
        Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .unwrap();
    }

    /// Repository with one commit of `tracked.txt` ("a\n")
    pub fn committed_repo() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        git(dir, &["init"]);
        git(dir, &["config", "user.name", "Test User"]);
        git(dir, &["config", "user.email", "test@example.com"]);
        git(dir, &["config", "commit.gpgsign", "false"]);
        std::fs::write(dir.join("tracked.txt"), "a\n").unwrap();
        git(dir, &["add", "tracked.txt"]);
        git(dir, &["commit", "-m", "Initial commit"]);
        temp_dir
    }

    /// Run `body` against `dir` with scripted `input`, returning everything printed
    pub fn run_scripted<F>(dir: &Path, input: &str, body: F) -> String
    where
        F: FnOnce(&mut Session<'_, Cursor<Vec<u8>>, Vec<u8>>) -> Result<()>,
    {
        let palette = Palette::plain();
        let picker = Picker::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), &palette);
        let mut session = Session::new(GitRepo::open(dir).unwrap(), picker, 4);
        body(&mut session).unwrap();
        String::from_utf8(session.picker.into_output()).unwrap()
    }
}
