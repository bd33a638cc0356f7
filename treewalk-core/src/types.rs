//! Data model for parent-referencing records and the tree built from them.
//!
//! A [`Record`] is one raw input row. The builder turns a sequence of records
//! into an owned [`Node`] tree; traversals report what they visit as
//! [`Visit`] values.

use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Parent id that marks a record as the root.
pub const ROOT_SENTINEL: &str = "0";

/// A raw input row: `(ID, NODE, PARENT)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    pub label: String,
    pub parent_id: String,
}

impl Record {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        parent_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            parent_id: parent_id.into(),
        }
    }

    /// Whether this record carries the root sentinel as its parent.
    pub fn is_root(&self) -> bool {
        self.parent_id == ROOT_SENTINEL
    }
}

/// A tree vertex. Children are owned and kept in input declaration order.
///
/// Serializes as a flat depth-first list of [`FlatNode`] entries, so even a
/// very deep tree serializes without recursion. Each entry names its parent
/// and children by id.
#[derive(Debug)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub parent_id: String,
    pub children: Vec<Node>,
}

impl Node {
    /// Creates a childless node from a record.
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: record.id.clone(),
            label: record.label.clone(),
            parent_id: record.parent_id.clone(),
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in the subtree rooted here, including this node.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// Height of the subtree rooted here; a leaf has height 0.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.children.iter().map(|child| (child, depth + 1)));
        }
        height
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.id != b.id
                || a.label != b.label
                || a.parent_id != b.parent_id
                || a.children.len() != b.children.len()
            {
                return false;
            }
            stack.extend(a.children.iter().zip(&b.children));
        }
        true
    }
}

impl Eq for Node {}

/// One serialized entry of a [`Node`] tree.
#[derive(Debug, serde::Serialize)]
pub struct FlatNode<'a> {
    pub id: &'a str,
    pub label: &'a str,
    pub parent_id: &'a str,
    /// Depth below the serialized node (0 for itself)
    pub depth: usize,
    /// Child ids in declaration order
    pub children: Vec<&'a str>,
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.node_count()))?;
        let mut stack = vec![(self, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            seq.serialize_element(&FlatNode {
                id: &node.id,
                label: &node.label,
                parent_id: &node.parent_id,
                depth,
                children: node.children.iter().map(|c| c.id.as_str()).collect(),
            })?;
            stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
        }
        seq.end()
    }
}

// Dismantle iteratively so deep chains don't overflow the stack on drop.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// A node reached during a traversal, with its depth below the start (root = 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visit<'a> {
    pub node: &'a Node,
    pub depth: usize,
}

impl<'a> Visit<'a> {
    pub fn label(&self) -> &'a str {
        &self.node.label
    }
}
