//! Traversal engine: depth-first and breadth-first search over a built tree.
//!
//! Both walks use an explicit frontier (a stack for DFS, a queue for BFS),
//! so tree depth never turns into call-stack depth. Each walk can be cut
//! short with a search key: the first node whose label contains the key is
//! recorded and the walk stops right there, discarding the rest of the
//! frontier. An empty key means a full traversal.
//!
//! ```
//! use treewalk_core::{bfs, build, dfs, Record};
//!
//! let root = build(&[
//!     Record::new("1", "Root", "0"),
//!     Record::new("2", "A", "1"),
//!     Record::new("3", "B", "1"),
//!     Record::new("4", "Up", "2"),
//! ])
//! .unwrap();
//!
//! assert_eq!(dfs(Some(&root), ""), vec!["Root", "A", "Up", "B"]);
//! assert_eq!(dfs(Some(&root), "Up"), vec!["Root", "A", "Up"]);
//! assert_eq!(bfs(Some(&root), ""), vec!["Root", "A", "B", "Up"]);
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::TreeError;
use crate::types::{Node, Visit};

/// Traversal strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Algorithm {
    /// Depth-first, pre-order.
    Dfs,
    /// Breadth-first, level-order.
    Bfs,
}

impl Algorithm {
    /// Walk `root` with this strategy and return the visited labels.
    pub fn traverse(self, root: Option<&Node>, key: &str) -> Vec<String> {
        match self {
            Algorithm::Dfs => dfs(root, key),
            Algorithm::Bfs => bfs(root, key),
        }
    }

    /// Walk `root` with this strategy and return the visits with depths.
    pub fn walk<'a>(self, root: Option<&'a Node>, key: &str) -> Vec<Visit<'a>> {
        match self {
            Algorithm::Dfs => walk_dfs(root, key),
            Algorithm::Bfs => walk_bfs(root, key),
        }
    }
}

impl FromStr for Algorithm {
    type Err = TreeError;

    /// Parses `DFS` or `BFS`, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DFS" => Ok(Algorithm::Dfs),
            "BFS" => Ok(Algorithm::Bfs),
            _ => Err(TreeError::InvalidAlgorithmSelector {
                selector: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dfs => write!(f, "DFS"),
            Algorithm::Bfs => write!(f, "BFS"),
        }
    }
}

/// Depth-first (pre-order) traversal returning visited labels.
///
/// Returns an empty sequence when `root` is `None`.
pub fn dfs(root: Option<&Node>, key: &str) -> Vec<String> {
    labels(walk_dfs(root, key))
}

/// Breadth-first (level-order) traversal returning visited labels.
///
/// Returns an empty sequence when `root` is `None`.
pub fn bfs(root: Option<&Node>, key: &str) -> Vec<String> {
    labels(walk_bfs(root, key))
}

/// Depth-first walk with depth information.
///
/// Children are pushed in reverse so the first child is popped next,
/// which keeps siblings in declaration order.
pub fn walk_dfs<'a>(root: Option<&'a Node>, key: &str) -> Vec<Visit<'a>> {
    let Some(root) = root else {
        return Vec::new();
    };

    let mut visits = Vec::new();
    let mut stack = vec![Visit {
        node: root,
        depth: 0,
    }];

    while let Some(visit) = stack.pop() {
        visits.push(visit);

        if is_match(visit.node, key) {
            tracing::debug!(
                label = %visit.node.label,
                visited = visits.len(),
                "DFS stopped at match"
            );
            break;
        }

        stack.extend(visit.node.children.iter().rev().map(|child| Visit {
            node: child,
            depth: visit.depth + 1,
        }));
    }

    visits
}

/// Breadth-first walk with depth information.
///
/// Stops at the matching node itself, not at the end of its level.
pub fn walk_bfs<'a>(root: Option<&'a Node>, key: &str) -> Vec<Visit<'a>> {
    let Some(root) = root else {
        return Vec::new();
    };

    let mut visits = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back(Visit {
        node: root,
        depth: 0,
    });

    while let Some(visit) = queue.pop_front() {
        visits.push(visit);

        if is_match(visit.node, key) {
            tracing::debug!(
                label = %visit.node.label,
                visited = visits.len(),
                "BFS stopped at match"
            );
            break;
        }

        queue.extend(visit.node.children.iter().map(|child| Visit {
            node: child,
            depth: visit.depth + 1,
        }));
    }

    visits
}

/// Outcome of a keyed traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Search {
    pub algorithm: Algorithm,
    /// Search key; `None` for a full traversal.
    pub key: Option<String>,
    /// Visited labels in visitation order.
    pub visited: Vec<String>,
    /// Whether the walk stopped on a label containing the key.
    pub matched: bool,
}

impl Search {
    /// Run `algorithm` over `root` and record the result.
    pub fn run(algorithm: Algorithm, root: Option<&Node>, key: &str) -> Self {
        Self::from_visits(algorithm, key, &algorithm.walk(root, key))
    }

    /// Summarise visits already produced by `algorithm` for `key`.
    pub fn from_visits(algorithm: Algorithm, key: &str, visits: &[Visit<'_>]) -> Self {
        Self {
            algorithm,
            key: (!key.is_empty()).then(|| key.to_string()),
            visited: visits.iter().map(|v| v.label().to_string()).collect(),
            matched: visits.last().is_some_and(|v| is_match(v.node, key)),
        }
    }

    /// Visited labels joined with `", "`.
    pub fn joined(&self) -> String {
        self.visited.join(", ")
    }
}

fn is_match(node: &Node, key: &str) -> bool {
    !key.is_empty() && node.label.contains(key)
}

fn labels(visits: Vec<Visit<'_>>) -> Vec<String> {
    visits.into_iter().map(|v| v.node.label.clone()).collect()
}
