//! The interactive list-and-choose loop.
//!
//! A [`Picker`] renders a catalog, prompts, reads one line at a time and applies it
//! to the selection until the user finishes. It runs as an explicit state machine:
//!
//! ```text
//! Render -> Prompt -> Read -> Dispatch -> Help  -> Render
//!                                      -> Parse -> Render | Terminate
//!                                      -> Terminate
//! ```
//!
//! Input and output are any `BufRead`/`Write` pair, so the same loop drives the
//! terminal and in-memory buffers.

use crate::core::catalog::{Catalog, Choice};
use crate::core::colors::{ColorRole, Palette};
use crate::core::error::Result;
use crate::core::render::Renderer;
use crate::core::selection::{SelectionParser, SelectionState};
use std::io::{BufRead, Write};

pub const SINGLETON_HELP: &str = "Prompt help:
1          - select a numbered item
foo        - select item based on unique prefix
           - (empty) select nothing";

pub const MULTI_HELP: &str = "Prompt help:
1          - select a single item
3-5        - select a range of items
2-3,6-9    - select multiple ranges
foo        - select item based on unique prefix
-...       - unselect specified items
*          - choose all items
           - (empty) finish selecting";

/// How one picker run behaves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChooseOptions {
    /// Exactly one item may be chosen per line
    pub singleton: bool,
    /// Finish after the first line that parses
    pub immediate: bool,
    /// Render once and return nothing, without prompting
    pub list_only: bool,
    /// Items per row, 0 for one per line
    pub columns: usize,
    pub header: Option<String>,
    pub header_indent: bool,
    pub prompt: String,
}

impl Default for ChooseOptions {
    fn default() -> Self {
        Self {
            singleton: false,
            immediate: false,
            list_only: false,
            columns: 0,
            header: None,
            header_indent: true,
            prompt: String::new(),
        }
    }
}

impl ChooseOptions {
    pub fn singleton(mut self) -> Self {
        self.singleton = true;
        self
    }

    pub fn immediate(mut self) -> Self {
        self.immediate = true;
        self
    }

    pub fn list_only(mut self) -> Self {
        self.list_only = true;
        self
    }

    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn with_header_indent(mut self, indent: bool) -> Self {
        self.header_indent = indent;
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Input marker printed after the prompt text
    pub fn marker(&self) -> &'static str {
        if self.singleton {
            "> "
        } else {
            ">> "
        }
    }

    pub fn help_text(&self) -> &'static str {
        if self.singleton {
            SINGLETON_HELP
        } else {
            MULTI_HELP
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Render,
    Prompt,
    Read,
    Dispatch(String),
    Help,
    Parse(String),
    Terminate,
}

pub struct Picker<'p, R, W> {
    input: R,
    output: W,
    palette: &'p Palette,
}

impl<'p, R: BufRead, W: Write> Picker<'p, R, W> {
    pub fn new(input: R, output: W, palette: &'p Palette) -> Self {
        Self {
            input,
            output,
            palette,
        }
    }

    pub fn palette(&self) -> &Palette {
        self.palette
    }

    /// Stream the menus are written to; host messages go here as well
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Write `text` in the given role's color followed by a newline
    pub fn say(&mut self, role: ColorRole, text: &str) -> Result<()> {
        writeln!(self.output, "{}", self.palette.paint(role, text))?;
        Ok(())
    }

    /// Show `catalog` and let the user choose from it.
    ///
    /// Returns the chosen items in catalog order. Ends on an empty line, end of
    /// input, a bare `*`, or after the first accepted line in immediate mode.
    /// Bad input is reported and re-prompted; only stream errors are returned.
    pub fn list_and_choose<'c, A>(
        &mut self,
        catalog: &'c mut Catalog<A>,
        options: &ChooseOptions,
    ) -> Result<Vec<&'c Choice<A>>> {
        if !options.list_only {
            catalog.assign_prefixes();
        }
        let catalog: &'c Catalog<A> = catalog;
        let renderer = Renderer::new(self.palette);
        let mut state = SelectionState::new(catalog.len());

        if options.list_only {
            write!(self.output, "{}", renderer.render(catalog, &state, options))?;
            self.output.flush()?;
            return Ok(Vec::new());
        }

        let mut step = Step::Render;
        loop {
            step = match step {
                Step::Render => {
                    write!(self.output, "{}", renderer.render(catalog, &state, options))?;
                    Step::Prompt
                }
                Step::Prompt => {
                    write!(
                        self.output,
                        "{}{}",
                        self.palette.paint(ColorRole::Prompt, &options.prompt),
                        options.marker()
                    )?;
                    self.output.flush()?;
                    Step::Read
                }
                Step::Read => match self.read_line()? {
                    Some(line) => Step::Dispatch(line),
                    None => {
                        writeln!(self.output)?;
                        Step::Terminate
                    }
                },
                Step::Dispatch(line) => match line.as_str() {
                    "" => Step::Terminate,
                    "?" => Step::Help,
                    _ => Step::Parse(line),
                },
                Step::Help => {
                    self.say(ColorRole::Help, options.help_text())?;
                    Step::Render
                }
                Step::Parse(line) => {
                    match SelectionParser::apply(&line, catalog, &mut state, options.singleton) {
                        Ok(()) if options.immediate || line == "*" => Step::Terminate,
                        Ok(()) => Step::Render,
                        Err(e) if e.is_input_error() => {
                            log::debug!("rejected input {line:?}: {e}");
                            self.say(ColorRole::Error, &e.to_string())?;
                            Step::Render
                        }
                        Err(e) => return Err(e),
                    }
                }
                Step::Terminate => break,
            };
        }

        log::debug!("picker finished with {} chosen", state.chosen_count());
        Ok(state.project(catalog))
    }

    /// Next trimmed line, `None` at end of input. Invalid UTF-8 is replaced, so it
    /// surfaces as an unknown token instead of a read failure.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }
}
