//! Parsing of selection lines typed at the picker prompt.
//!
//! This module provides [`SelectionParser`] which applies a line such as
//! `1 3-5,st -4` to a [`SelectionState`], the chosen/unchosen flags kept across
//! prompts of one picker run.
//!
//! # Supported Formats
//! - **Single indices**: `3` (1-based)
//! - **Ranges**: `3-5`, or `3-` for "3 to the end"
//! - **Everything**: `*`
//! - **Labels**: `status` or any unique abbreviation such as `sta`
//! - **Negation**: a leading `-` unselects instead, e.g. `-2`, `-3-5`, `-*`
//! - **Separators**: spaces and commas, applied left to right
//!
//! Indices outside the catalog are dropped, not reported. Unknown or ambiguous labels
//! and, in singleton mode, multi-item ranges are input errors.

use crate::core::catalog::{Catalog, Choice};
use crate::core::error::{GitStagerError, Result};
use crate::core::prefix_index::{self, Resolution};

/// Chosen flags, index-aligned with the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    chosen: Vec<bool>,
}

impl SelectionState {
    pub fn new(size: usize) -> Self {
        Self {
            chosen: vec![false; size],
        }
    }

    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    /// Whether the item at 0-based `index` is chosen
    pub fn is_chosen(&self, index: usize) -> bool {
        self.chosen.get(index).copied().unwrap_or(false)
    }

    /// Set every item of the inclusive 1-based range `[bottom, top]` that exists
    pub fn set_range(&mut self, bottom: usize, top: usize, choose: bool) {
        let first = bottom.max(1);
        let last = top.min(self.chosen.len());
        for position in first..=last {
            self.chosen[position - 1] = choose;
        }
    }

    pub fn clear(&mut self) {
        self.chosen.iter_mut().for_each(|flag| *flag = false);
    }

    /// 0-based indices of the chosen items, in catalog order
    pub fn chosen_indices(&self) -> Vec<usize> {
        self.chosen
            .iter()
            .enumerate()
            .filter_map(|(index, &flag)| flag.then_some(index))
            .collect()
    }

    pub fn chosen_count(&self) -> usize {
        self.chosen.iter().filter(|&&flag| flag).count()
    }

    /// The chosen choices, in catalog order
    pub fn project<'c, A>(&self, catalog: &'c Catalog<A>) -> Vec<&'c Choice<A>> {
        catalog
            .items()
            .iter()
            .zip(&self.chosen)
            .filter_map(|(choice, &flag)| flag.then_some(choice))
            .collect()
    }
}

/// One token of a selection line after classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Range { bottom: usize, top: usize },
    Item(usize),
}

pub struct SelectionParser;

impl SelectionParser {
    /// Apply one trimmed, non-empty input line to `state`.
    ///
    /// Tokens are applied left to right. On an input error in multi-select mode the
    /// tokens before the offending one stay applied; in singleton mode the whole
    /// line is discarded.
    pub fn apply<A>(
        line: &str,
        catalog: &Catalog<A>,
        state: &mut SelectionState,
        singleton: bool,
    ) -> Result<()> {
        let mut working = state.clone();
        let outcome = Self::apply_tokens(line, catalog, &mut working, singleton);

        if outcome.is_ok() || !singleton {
            *state = working;
        }
        outcome
    }

    fn apply_tokens<A>(
        line: &str,
        catalog: &Catalog<A>,
        state: &mut SelectionState,
        singleton: bool,
    ) -> Result<()> {
        for token in line.split([' ', ',']).filter(|s| !s.is_empty()) {
            let (choose, body) = match token.strip_prefix('-') {
                Some(rest) => (false, rest),
                None => (true, token),
            };

            let (bottom, top) = match Self::classify(token, body, catalog)? {
                Target::Range { bottom, top } => (bottom, top),
                Target::Item(index) => (index + 1, index + 1),
            };

            if singleton && bottom != top {
                return Err(GitStagerError::singleton_violation(token));
            }

            log::debug!("token {token:?}: choose={choose} range={bottom}..={top}");
            if singleton && choose {
                state.clear();
            }
            state.set_range(bottom, top, choose);
        }
        Ok(())
    }

    fn classify<A>(token: &str, body: &str, catalog: &Catalog<A>) -> Result<Target> {
        let size = catalog.len();

        if body == "*" {
            return Ok(Target::Range {
                bottom: 1,
                top: size,
            });
        }

        if is_digits(body) {
            let index = parse_index(body);
            return Ok(Target::Range {
                bottom: index,
                top: index,
            });
        }

        if let Some((low, high)) = body.split_once('-') {
            if is_digits(low) && (high.is_empty() || is_digits(high)) {
                let bottom = parse_index(low);
                let top = if high.is_empty() {
                    size
                } else {
                    parse_index(high)
                };
                return Ok(Target::Range { bottom, top });
            }
        }

        if body.is_empty() || body.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
            return Err(GitStagerError::malformed_token(token));
        }

        match prefix_index::resolve(catalog.items(), body) {
            Resolution::Unique(index) => Ok(Target::Item(index)),
            Resolution::Ambiguous => Err(GitStagerError::ambiguous_item(token)),
            Resolution::Missing => Err(GitStagerError::no_such_item(token)),
        }
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Digits only; values too large for `usize` saturate and are clamped away later
fn parse_index(digits: &str) -> usize {
    digits.parse().unwrap_or(usize::MAX)
}
