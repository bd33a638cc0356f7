//! Tree reconstruction from parent-referencing records.
//!
//! The builder runs in three steps:
//!
//! 1. **Index**: validate every record and map `id -> position`.
//! 2. **Link**: walk the records in input order, picking out the root and
//!    appending each other record to its parent's child list. Iterating the
//!    records (never the index) keeps siblings in declaration order.
//! 3. **Assemble**: move nodes into their parents bottom-up, starting from
//!    the root. Records the root cannot reach sit on a parent cycle and are
//!    rejected.
//!
//! The build is atomic: it returns either a fully linked tree or the first
//! error found, never a partial tree.

use std::collections::{HashMap, HashSet};

use crate::error::{Result, TreeError};
use crate::types::{Node, Record};

/// Builds a tree from records and returns its root.
///
/// # Arguments
///
/// * `records` - Rows in input order; each `id` must be unique and exactly one
///   row must have the root sentinel `"0"` as parent
///
/// # Errors
///
/// * [`TreeError::InvalidField`] - empty id, label or parent id
/// * [`TreeError::DuplicateId`] - an id appears twice
/// * [`TreeError::DuplicateRoot`] - a second root record
/// * [`TreeError::DanglingParent`] - a parent id with no matching record
/// * [`TreeError::MissingRoot`] - no root record (including empty input)
/// * [`TreeError::CyclicParent`] - a parent chain that never reaches the root
///
/// # Example
///
/// ```
/// use treewalk_core::{build, Record};
///
/// let root = build(&[
///     Record::new("1", "Root", "0"),
///     Record::new("2", "A", "1"),
/// ])
/// .unwrap();
/// assert_eq!(root.children[0].label, "A");
/// ```
pub fn build(records: &[Record]) -> Result<Node> {
    let index = index_records(records)?;
    let links = link_records(records, &index)?;

    let order = assembly_order(links.root, &links.children);
    if order.len() != records.len() {
        return Err(cycle_error(records, &links, &order));
    }

    let mut slots: Vec<Option<Node>> =
        records.iter().map(|r| Some(Node::from_record(r))).collect();
    for &position in &order {
        let children: Vec<Node> = links.children[position]
            .iter()
            .filter_map(|&child| slots[child].take())
            .collect();
        if let Some(node) = slots[position].as_mut() {
            node.children = children;
        }
    }

    let root = slots[links.root].take().ok_or(TreeError::MissingRoot)?;
    tracing::debug!(
        nodes = records.len(),
        root = %root.label,
        "Built tree"
    );
    Ok(root)
}

/// Parent/child structure of a record set, by record position.
struct Links {
    root: usize,
    parent: Vec<Option<usize>>,
    children: Vec<Vec<usize>>,
}

/// Validate fields and map each id to its record position.
fn index_records(records: &[Record]) -> Result<HashMap<&str, usize>> {
    let mut index = HashMap::with_capacity(records.len());

    for (position, record) in records.iter().enumerate() {
        let empty_field = if record.id.is_empty() {
            Some("id")
        } else if record.label.is_empty() {
            Some("label")
        } else if record.parent_id.is_empty() {
            Some("parent_id")
        } else {
            None
        };
        if let Some(field) = empty_field {
            return Err(TreeError::InvalidField { position, field });
        }

        if index.insert(record.id.as_str(), position).is_some() {
            return Err(TreeError::DuplicateId {
                id: record.id.clone(),
            });
        }
    }

    Ok(index)
}

/// Resolve the root and every parent reference, in input order.
fn link_records(records: &[Record], index: &HashMap<&str, usize>) -> Result<Links> {
    let mut root: Option<usize> = None;
    let mut parent = vec![None; records.len()];
    let mut children = vec![Vec::new(); records.len()];

    for (position, record) in records.iter().enumerate() {
        if record.is_root() {
            if let Some(first) = root {
                return Err(TreeError::DuplicateRoot {
                    first: records[first].id.clone(),
                    second: record.id.clone(),
                });
            }
            root = Some(position);
            continue;
        }

        let parent_position = *index.get(record.parent_id.as_str()).ok_or_else(|| {
            TreeError::DanglingParent {
                id: record.id.clone(),
                parent_id: record.parent_id.clone(),
            }
        })?;
        parent[position] = Some(parent_position);
        children[parent_position].push(position);
    }

    let root = root.ok_or(TreeError::MissingRoot)?;
    Ok(Links {
        root,
        parent,
        children,
    })
}

/// Positions reachable from `root`, every child listed before its parent.
fn assembly_order(root: usize, children: &[Vec<usize>]) -> Vec<usize> {
    let mut order = Vec::with_capacity(children.len());
    let mut stack = vec![root];

    while let Some(current) = stack.pop() {
        order.push(current);
        stack.extend(children[current].iter().copied());
    }

    order.reverse();
    order
}

/// Name a record that sits on a parent cycle.
///
/// Every unreachable record has a parent chain that never hits the root,
/// so following it from the first unreachable record must revisit a node.
fn cycle_error(records: &[Record], links: &Links, reachable: &[usize]) -> TreeError {
    let reachable: HashSet<usize> = reachable.iter().copied().collect();
    let start = (0..records.len())
        .find(|position| !reachable.contains(position))
        .unwrap_or(links.root);

    let mut seen = HashSet::new();
    let mut current = start;
    while seen.insert(current) {
        match links.parent[current] {
            Some(parent) => current = parent,
            None => break,
        }
    }

    TreeError::CyclicParent {
        id: records[current].id.clone(),
    }
}
