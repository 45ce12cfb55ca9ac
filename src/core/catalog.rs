//! Menu entries and the ordered catalog shown by the picker.
//!
//! # Public API
//! - [`Choice`]: One selectable entry with its label and unique-prefix length
//! - [`ChoiceKind`]: File-change row or command row
//! - [`FileStat`] / [`ChangeCount`]: Added/deleted line counts for index and worktree
//! - [`Catalog`]: Ordered, duplicate-free sequence of choices for one menu

use crate::core::error::{GitStagerError, Result};
use crate::core::prefix_index::PrefixIndex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeCount {
    pub added: u64,
    pub deleted: u64,
}

impl ChangeCount {
    pub fn new(added: u64, deleted: u64) -> Self {
        Self { added, deleted }
    }

    pub fn is_empty(&self) -> bool {
        self.added == 0 && self.deleted == 0
    }
}

/// Line counts of one path, staged (`index`) and unstaged (`worktree`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStat {
    pub index: ChangeCount,
    pub worktree: ChangeCount,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceKind<A> {
    FileStat(FileStat),
    Command(A),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    FileStat,
    Command,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice<A = ()> {
    pub label: String,
    pub kind: ChoiceKind<A>,
    /// Length of the shortest unambiguous abbreviation, 0 when there is none
    pub prefix_length: usize,
}

impl<A> Choice<A> {
    pub fn new(label: impl Into<String>, kind: ChoiceKind<A>) -> Self {
        Self {
            label: label.into(),
            kind,
            prefix_length: 0,
        }
    }

    /// The highlighted abbreviation, if one was found
    pub fn prefix(&self) -> Option<&str> {
        if self.prefix_length == 0 {
            return None;
        }
        self.label.get(..self.prefix_length)
    }

    pub fn file_stat(&self) -> Option<&FileStat> {
        match &self.kind {
            ChoiceKind::FileStat(stat) => Some(stat),
            ChoiceKind::Command(_) => None,
        }
    }

    pub fn command(&self) -> Option<&A> {
        match &self.kind {
            ChoiceKind::Command(action) => Some(action),
            ChoiceKind::FileStat(_) => None,
        }
    }
}

/// Ordered set of choices for a single picker run.
///
/// Labels are unique; the constructors reject duplicates since they would make
/// abbreviations and exact-match lookups meaningless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog<A = ()> {
    items: Vec<Choice<A>>,
    kind: CatalogKind,
}

impl Catalog {
    /// Build a file-change catalog from `(path, stat)` pairs, keeping their order
    pub fn files<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, FileStat)>,
        S: Into<String>,
    {
        let items = entries
            .into_iter()
            .map(|(path, stat)| Choice::new(path, ChoiceKind::FileStat(stat)))
            .collect();
        Self::from_items(CatalogKind::FileStat, items)
    }
}

impl<A> Catalog<A> {
    /// Build a command catalog from `(label, action)` pairs, keeping their order
    pub fn commands<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, A)>,
        S: Into<String>,
    {
        let items = entries
            .into_iter()
            .map(|(label, action)| Choice::new(label, ChoiceKind::Command(action)))
            .collect();
        Self::from_items(CatalogKind::Command, items)
    }

    fn from_items(kind: CatalogKind, items: Vec<Choice<A>>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.label.as_str()) {
                return Err(GitStagerError::duplicate_label(&item.label));
            }
        }
        Ok(Self { items, kind })
    }

    /// Compute and store every choice's unique-prefix length
    pub fn assign_prefixes(&mut self) {
        let index = PrefixIndex::build(self.items.iter().map(|c| c.label.as_str()));
        for (item, length) in self.items.iter_mut().zip(index.lengths()) {
            item.prefix_length = *length;
        }
        log::debug!(
            "assigned prefixes: {:?}",
            self.items
                .iter()
                .map(|c| (c.label.as_str(), c.prefix_length))
                .collect::<Vec<_>>()
        );
    }

    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    pub fn items(&self) -> &[Choice<A>] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Choice<A>> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|c| c.label.as_str())
    }
}
