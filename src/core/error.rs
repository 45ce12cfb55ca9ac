//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitStagerError`] which covers both the picker core and the
//! git host commands built on top of it. It uses `thiserror` for ergonomic error
//! definitions and includes specialized constructors for common failure scenarios.
//!
//! # Public API
//! - [`GitStagerError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitStagerError>`
//!
//! # Error Categories
//! - **User input**: Unknown or ambiguous labels, singleton violations, malformed
//!   tokens. These are recoverable: the picker reports them and prompts again.
//! - **Catalog preconditions**: Duplicate labels are rejected when a catalog is built
//! - **Git operations**: Repository not found, git2 library errors, failed git commands
//! - **Configuration**: Unreadable config files, invalid color specs

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for git-stager
#[derive(Error, Debug)]
pub enum GitStagerError {
    // Selection input errors (recoverable)
    #[error("Huh ({token})?")]
    NoSuchItem { token: String },

    #[error("Huh ({token})? ambiguous, type more characters")]
    AmbiguousItem { token: String },

    #[error("Huh ({token})? only one item may be chosen here")]
    SingletonViolation { token: String },

    #[error("Huh ({token})? malformed selection")]
    MalformedToken { token: String },

    // Catalog precondition errors
    #[error("Duplicate label in menu: '{label}'")]
    DuplicateLabel { label: String },

    // Git repository errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    #[error("Invalid UTF-8 path in repository")]
    InvalidUtf8Path,

    #[error("Repository has no working directory")]
    BareRepository,

    #[error("git command failed: {message}")]
    GitCommandFailed { message: String },

    // File operation errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Configuration errors
    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid color value for '{slot}': '{value}'")]
    InvalidColor { slot: String, value: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using GitStagerError
pub type Result<T> = std::result::Result<T, GitStagerError>;

impl GitStagerError {
    /// Create a no such item error for an unmatched token
    pub fn no_such_item(token: impl Into<String>) -> Self {
        Self::NoSuchItem {
            token: token.into(),
        }
    }

    /// Create an ambiguous item error for a token matching several labels
    pub fn ambiguous_item(token: impl Into<String>) -> Self {
        Self::AmbiguousItem {
            token: token.into(),
        }
    }

    /// Create a singleton violation error
    pub fn singleton_violation(token: impl Into<String>) -> Self {
        Self::SingletonViolation {
            token: token.into(),
        }
    }

    /// Create a malformed token error
    pub fn malformed_token(token: impl Into<String>) -> Self {
        Self::MalformedToken {
            token: token.into(),
        }
    }

    /// Create a duplicate label error
    pub fn duplicate_label(label: impl Into<String>) -> Self {
        Self::DuplicateLabel {
            label: label.into(),
        }
    }

    /// Create a git command failed error
    pub fn git_command_failed(message: impl Into<String>) -> Self {
        Self::GitCommandFailed {
            message: message.into(),
        }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid color error
    pub fn invalid_color(slot: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidColor {
            slot: slot.into(),
            value: value.into(),
        }
    }

    /// True for errors caused by a bad selection line.
    ///
    /// The picker reports these and prompts again; everything else aborts the loop.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::NoSuchItem { .. }
                | Self::AmbiguousItem { .. }
                | Self::SingletonViolation { .. }
                | Self::MalformedToken { .. }
        )
    }

    /// The offending token of an input error, if any
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::NoSuchItem { token }
            | Self::AmbiguousItem { token }
            | Self::SingletonViolation { token }
            | Self::MalformedToken { token } => Some(token),
            _ => None,
        }
    }
}
