//! Core functionality for git-stager.
//!
//! The picker itself (catalog, prefix index, selection parsing, rendering and the
//! interactive loop) plus the configuration, git access and output helpers the host
//! commands need.

pub mod catalog;
pub mod colors;
pub mod config;
pub mod dirs;
pub mod error;
pub mod git;
pub mod output;
pub mod picker;
pub mod prefix_index;
pub mod render;
pub mod selection;

// === Error handling ===
pub use error::{GitStagerError, Result};

// === Picker ===
// Catalog of choices, abbreviations, "1 3-5,foo"-style selection and the prompt loop
pub use catalog::{Catalog, CatalogKind, ChangeCount, Choice, ChoiceKind, FileStat};
pub use picker::{ChooseOptions, Picker};
pub use prefix_index::{PrefixIndex, Resolution};
pub use render::Renderer;
pub use selection::{SelectionParser, SelectionState};

// === Colors and configuration ===
pub use colors::{ColorRole, Palette, RoleStyle};
pub use config::{ColorWhen, FileConfig, Settings};

// === Git operations ===
pub use git::{ChangeFilter, FileChange, GitRepo};

// === Output formatting ===
pub use output::print_error;
