//! Shortest unambiguous abbreviations for menu labels.
//!
//! Every prefix of every label, up to [`HARD_LIMIT`] bytes, is recorded in a table
//! keyed by the prefix bytes (the key length is the prefix length). The first label
//! to reach a key owns it; any later label reaching the same key marks it contested.
//! A label's abbreviation is its shortest prefix that it still owns once all labels
//! are in, which makes the table a flattened trie of depth [`HARD_LIMIT`].
//!
//! Abbreviations only grow through printable ASCII. A label whose leading bytes are
//! shared with another label up to the limit, or that runs into a multi-byte
//! character first, gets no abbreviation (length 0).

use crate::core::catalog::Choice;
use std::collections::HashMap;

/// Longest abbreviation ever offered
pub const HARD_LIMIT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Owned(usize),
    Contested,
}

/// Outcome of looking a typed token up against the catalog labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Unique(usize),
    Ambiguous,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixIndex {
    lengths: Vec<usize>,
}

impl PrefixIndex {
    pub fn build<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let labels: Vec<&[u8]> = labels.into_iter().map(str::as_bytes).collect();
        let mut table: HashMap<&[u8], Slot> = HashMap::new();

        for (owner, label) in labels.iter().enumerate() {
            for prefix in candidate_prefixes(label) {
                table
                    .entry(prefix)
                    .and_modify(|slot| *slot = Slot::Contested)
                    .or_insert(Slot::Owned(owner));
            }
        }

        let lengths: Vec<usize> = labels
            .iter()
            .enumerate()
            .map(|(owner, label)| {
                candidate_prefixes(label)
                    .find(|prefix| table.get(prefix) == Some(&Slot::Owned(owner)))
                    .map_or(0, <[u8]>::len)
            })
            .collect();

        debug_assert!(
            abbreviations_are_unique(&labels, &lengths),
            "abbreviation shared between labels"
        );

        Self { lengths }
    }

    /// Abbreviation length per label, in input order
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }
}

/// Prefixes of `label` eligible as abbreviations, shortest first
fn candidate_prefixes(label: &[u8]) -> impl Iterator<Item = &[u8]> + '_ {
    let limit = label.len().min(HARD_LIMIT);
    (1..=limit).map_while(move |length| {
        let byte = label[length - 1];
        (byte == b' ' || byte.is_ascii_graphic()).then(|| &label[..length])
    })
}

fn abbreviations_are_unique(labels: &[&[u8]], lengths: &[usize]) -> bool {
    labels.iter().zip(lengths).enumerate().all(|(i, (label, &length))| {
        length == 0
            || labels
                .iter()
                .enumerate()
                .all(|(j, other)| i == j || !other.starts_with(&label[..length]))
    })
}

/// Look `token` up among `items`: exact label first, then unique abbreviation.
///
/// A token abbreviates a label when it is a prefix of the label at least as long
/// as that label's abbreviation. `Ambiguous` means several labels start with the
/// token but none is picked out by it.
pub fn resolve<A>(items: &[Choice<A>], token: &str) -> Resolution {
    if let Some(position) = items.iter().position(|item| item.label == token) {
        return Resolution::Unique(position);
    }

    let mut abbreviated = items.iter().enumerate().filter(|(_, item)| {
        item.prefix_length != 0
            && token.len() >= item.prefix_length
            && item.label.starts_with(token)
    });
    if let Some((position, _)) = abbreviated.next() {
        debug_assert!(abbreviated.next().is_none());
        return Resolution::Unique(position);
    }

    match items.iter().filter(|item| item.label.starts_with(token)).count() {
        0 | 1 => Resolution::Missing,
        _ => Resolution::Ambiguous,
    }
}
