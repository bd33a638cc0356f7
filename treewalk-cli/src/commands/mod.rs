//! Command implementations for the treewalk CLI
//!
//! Each command module provides a `run` function that executes the command logic.

use std::path::Path;

use anyhow::Context;
use treewalk_core::Node;

pub mod check;
pub mod completions;
pub mod interactive;
pub mod search;
pub mod show;

/// Read and build the tree at `path`, naming the file on failure.
pub fn load_tree(path: &Path) -> anyhow::Result<Node> {
    treewalk_core::load_tree(path)
        .with_context(|| format!("Failed to load tree from {}", path.display()))
}
