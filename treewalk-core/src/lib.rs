//! treewalk core - tree reconstruction and search.
//!
//! This crate rebuilds a single-rooted tree from parent-referencing records
//! (`ID`, `NODE`, `PARENT` rows, root marked by parent `0`) and searches it
//! depth-first or breadth-first, optionally stopping at the first node whose
//! label contains a key.
//!
//! # Features
//!
//! - **Deterministic build**: siblings keep input declaration order
//! - **Atomic validation**: duplicate ids, missing/duplicate roots, dangling
//!   parents and parent cycles are rejected before any tree is returned
//! - **Lazy search**: traversals stop at the matching node, not after a
//!   full walk
//! - **CSV source**: header-checked, trimmed record loading
//!
//! # Usage
//!
//! ```no_run
//! use treewalk_core::{load_tree, Algorithm};
//!
//! let root = load_tree("tree.csv")?;
//! let algorithm: Algorithm = "bfs".parse()?;
//! println!("{}", algorithm.traverse(Some(&root), "Up").join(", "));
//! # Ok::<(), treewalk_core::TreeError>(())
//! ```

pub mod builder;
pub mod error;
pub mod source;
pub mod traversal;
pub mod types;

pub use builder::build;
pub use error::{Result, TreeError};
pub use source::{load_tree, read_records, read_records_from_path};
pub use traversal::{bfs, dfs, walk_bfs, walk_dfs, Algorithm, Search};
pub use types::{FlatNode, Node, Record, Visit, ROOT_SENTINEL};

/// Get the version of treewalk-core.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
