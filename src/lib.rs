//! Git Stager - an interactive, numbered menu for staging changes in git.
//!
//! The library is built around a small list-and-choose picker: a catalog of labelled
//! choices is rendered with 1-based indices and highlighted unique prefixes, and the
//! user picks items with lines such as `1 3-5,foo -4` or `*`.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - The picker: [`Catalog`], [`Picker`], [`ChooseOptions`], [`SelectionParser`]
//! - Unique-prefix computation with [`PrefixIndex`]
//! - Colors and layered configuration
//! - Git change collection and index updates
//! - Error handling and result types
//!
//! The host commands (status, update, revert, add untracked, diff, help and the main
//! menu) live in [`commands`].

pub mod commands;
pub mod core;

pub use core::{
    // Picker
    Catalog,
    CatalogKind,
    ChangeCount,
    Choice,
    ChoiceKind,
    ChooseOptions,
    // Colors and configuration
    ColorRole,
    ColorWhen,
    FileStat,
    Palette,
    Picker,
    PrefixIndex,
    Renderer,
    Resolution,
    SelectionParser,
    SelectionState,
    Settings,

    // Git operations
    ChangeFilter,
    FileChange,
    GitRepo,

    // Error handling
    GitStagerError,
    Result,
};
