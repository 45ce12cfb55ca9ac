//! Shared test utilities for git-stager
//!
//! Integration tests run the real binary against throwaway repositories and feed
//! the interactive prompts through stdin.

pub mod assertions;
pub mod fixtures;
pub mod repository;
