//! Menu rendering for the picker.
//!
//! Each choice is printed as `<marker><index>: <detail>`, where the marker is `*`
//! for chosen items and the index is 1-based. File rows show staged and unstaged
//! line counts in two right-aligned columns before the path; command rows show
//! the label only. The unique prefix of a label is highlighted with the prompt
//! color, or wrapped in brackets whenever that would print as plain text.

use crate::core::catalog::{ChangeCount, Choice, ChoiceKind};
use crate::core::catalog::Catalog;
use crate::core::colors::{ColorRole, Palette};
use crate::core::picker::ChooseOptions;
use crate::core::selection::SelectionState;
use std::fmt::Write;

/// Indentation of the header line above a one-per-line menu
pub const HEADER_INDENT: &str = "      ";

/// Placeholder for a file without staged changes
pub const NO_INDEX_CHANGES: &str = "unchanged";

/// Placeholder for a file without unstaged changes
pub const NO_WORKTREE_CHANGES: &str = "nothing";

/// Three columns: staged counts, unstaged counts, path
pub fn file_columns(staged: &str, unstaged: &str, path: &str) -> String {
    format!("{staged:>12} {unstaged:>12} {path}")
}

/// Header row matching [`file_columns`]
pub fn status_header() -> String {
    file_columns("staged", "unstaged", "path")
}

/// `+added/-deleted`, or `placeholder` when both are zero
pub fn format_changes(count: &ChangeCount, placeholder: &str) -> String {
    if count.is_empty() {
        placeholder.to_string()
    } else {
        format!("+{}/-{}", count.added, count.deleted)
    }
}

/// Whether a prefix can be typed as-is at the prompt.
///
/// Prefixes containing separators, or that would read as a number, a negation,
/// `*` or `?`, are never highlighted.
pub fn is_typeable_prefix(prefix: &str) -> bool {
    let starts_special = prefix
        .chars()
        .next()
        .is_some_and(|c| c == '-' || c.is_ascii_digit());
    !prefix.is_empty()
        && !starts_special
        && !prefix.chars().any(|c| c.is_whitespace() || c == ',')
        && prefix != "*"
        && prefix != "?"
}

pub struct Renderer<'p> {
    palette: &'p Palette,
}

impl<'p> Renderer<'p> {
    pub fn new(palette: &'p Palette) -> Self {
        Self { palette }
    }

    /// The label with its unique prefix marked
    pub fn highlight_label<A>(&self, choice: &Choice<A>) -> String {
        let Some(prefix) = choice.prefix().filter(|p| is_typeable_prefix(p)) else {
            return choice.label.clone();
        };
        let remainder = &choice.label[prefix.len()..];

        if self.palette.enabled {
            let painted = self.palette.paint(ColorRole::Prompt, prefix);
            // colored may still emit plain text (plain style, or its global override off)
            if painted != prefix {
                return format!("{painted}{remainder}");
            }
        }
        format!("[{prefix}]{remainder}")
    }

    /// Row body without marker and index
    pub fn detail<A>(&self, choice: &Choice<A>) -> String {
        let label = self.highlight_label(choice);
        match &choice.kind {
            ChoiceKind::FileStat(stat) => file_columns(
                &format_changes(&stat.index, NO_INDEX_CHANGES),
                &format_changes(&stat.worktree, NO_WORKTREE_CHANGES),
                &label,
            ),
            ChoiceKind::Command(_) => label,
        }
    }

    /// The whole menu: optional header, then one row per choice
    pub fn render<A>(
        &self,
        catalog: &Catalog<A>,
        state: &SelectionState,
        options: &ChooseOptions,
    ) -> String {
        let mut output = String::with_capacity(catalog.len() * 48 + 64);

        if let Some(header) = &options.header {
            if options.header_indent {
                output.push_str(HEADER_INDENT);
            }
            output.push_str(&self.palette.paint(ColorRole::Header, header));
            output.push('\n');
        }

        let mut ended_line = false;
        for (index, choice) in catalog.items().iter().enumerate() {
            let marker = if state.is_chosen(index) { '*' } else { ' ' };
            let _ = write!(output, "{marker}{:>2}: {}", index + 1, self.detail(choice));

            if options.columns > 0 && (index + 1) % options.columns != 0 {
                output.push('\t');
                ended_line = false;
            } else {
                output.push('\n');
                ended_line = true;
            }
        }

        if !ended_line {
            output.push('\n');
        }

        output
    }
}
