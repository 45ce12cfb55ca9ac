//! Common assertion helpers for test output validation

#![allow(dead_code)]

use predicates::prelude::*;

pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
}

/// The status header line with its default indentation
pub fn has_status_header() -> impl Predicate<str> {
    predicates::str::contains("            staged     unstaged path")
}

/// A file row with the given staged/unstaged columns and (possibly highlighted) path
pub fn has_file_row(staged: &str, unstaged: &str, path: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("{staged:>12} {unstaged:>12} {path}"))
}

pub fn has_command_menu() -> impl Predicate<str> {
    predicates::str::contains("*** Commands ***").and(predicates::str::contains("What now> "))
}

pub fn says_bye() -> impl Predicate<str> {
    predicates::str::ends_with("Bye.\n")
}

pub fn has_ansi_codes() -> impl Predicate<str> {
    predicates::str::contains("\u{1b}[")
}
