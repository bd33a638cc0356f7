//! Error types for treewalk-core.

use thiserror::Error;

/// Result type alias for treewalk-core operations.
pub type Result<T> = std::result::Result<T, TreeError>;

/// Errors that can occur while loading records, building a tree or
/// selecting a traversal algorithm.
///
/// Traversal itself never fails; every variant here is raised before the
/// first node is visited.
#[derive(Error, Debug)]
pub enum TreeError {
    /// The record source could not be opened or read.
    #[error("Cannot read record source {path}: {source}")]
    SourceUnavailable {
        /// Path (or `<reader>`) of the source.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Header mismatch or a row with too few fields.
    #[error("Malformed input at line {line}: {message}")]
    MalformedShape {
        /// 1-based line of the offending header or row.
        line: u64,
        /// Description of the shape problem.
        message: String,
    },

    /// A record has an empty id, label or parent id.
    #[error("Invalid record at position {position}: empty {field}")]
    InvalidField {
        /// 0-based position of the record in the input sequence.
        position: usize,
        /// Name of the empty field (`id`, `label` or `parent_id`).
        field: &'static str,
    },

    /// The same id appears on more than one record.
    #[error("Duplicate node id '{id}'")]
    DuplicateId {
        /// The repeated id.
        id: String,
    },

    /// More than one record carries the root sentinel as parent.
    #[error("Multiple root nodes: '{first}' and '{second}' both have parent 0")]
    DuplicateRoot {
        /// Id of the root found first.
        first: String,
        /// Id of the second root record.
        second: String,
    },

    /// No record carries the root sentinel as parent.
    #[error("No root node found (no record has parent 0)")]
    MissingRoot,

    /// A record references a parent id that is not in the record set.
    #[error("Parent node with id '{parent_id}' not found (referenced by '{id}')")]
    DanglingParent {
        /// Id of the record holding the reference.
        id: String,
        /// The unresolved parent id.
        parent_id: String,
    },

    /// A record's ancestor chain loops back on itself.
    #[error("Node '{id}' is part of a parent cycle and cannot reach the root")]
    CyclicParent {
        /// Id of a record inside the cycle.
        id: String,
    },

    /// The algorithm selector is neither DFS nor BFS.
    #[error("Invalid search method '{selector}': choose DFS or BFS")]
    InvalidAlgorithmSelector {
        /// The rejected selector as given.
        selector: String,
    },
}

impl From<csv::Error> for TreeError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => TreeError::SourceUnavailable {
                path: "<reader>".to_string(),
                source,
            },
            _ => TreeError::MalformedShape { line, message },
        }
    }
}
