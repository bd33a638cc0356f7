//! Check command - validate a CSV tree and summarise it

use std::path::Path;

use colored::Colorize;
use serde::Serialize;
use treewalk_core::{walk_bfs, Node};

use crate::commands::load_tree;
use crate::output::{Column, CsvOutput, Output, OutputConfig, Outputter, TableOutput};

/// Summary of a valid tree
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub file: String,
    pub nodes: usize,
    pub leaves: usize,
    pub root_id: String,
    pub root_label: String,
    /// Edges on the longest root-to-leaf path
    pub height: usize,
}

impl CheckReport {
    pub fn new(file: &Path, root: &Node) -> Self {
        let visits = walk_bfs(Some(root), "");
        Self {
            file: file.display().to_string(),
            nodes: visits.len(),
            leaves: visits.iter().filter(|v| v.node.is_leaf()).count(),
            root_id: root.id.clone(),
            root_label: root.label.clone(),
            height: root.height(),
        }
    }
}

impl Outputter for CheckReport {
    fn to_plain(&self, config: &OutputConfig) -> String {
        let mark = if config.use_colors() {
            "OK".green().bold().to_string()
        } else {
            "OK".to_string()
        };
        format!(
            "{} {}: {} nodes, {} leaves, root '{}' [{}], height {}",
            mark, self.file, self.nodes, self.leaves, self.root_label, self.root_id, self.height
        )
    }

    fn to_table(&self, config: &OutputConfig) -> String {
        let pairs = [
            ("File", self.file.clone()),
            ("Nodes", self.nodes.to_string()),
            ("Leaves", self.leaves.to_string()),
            ("Root", format!("{} [{}]", self.root_label, self.root_id)),
            ("Height", self.height.to_string()),
        ];
        TableOutput::format_key_value(&pairs, config)
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        let columns = [
            Column::new("file", "file"),
            Column::new("nodes", "nodes"),
            Column::new("leaves", "leaves"),
            Column::new("root_id", "root_id"),
            Column::new("root_label", "root_label"),
            Column::new("height", "height"),
        ];
        CsvOutput::format_with_columns(std::slice::from_ref(self), &columns)
    }
}

/// Run the check command
pub fn run(file: &Path, config: &OutputConfig) -> anyhow::Result<()> {
    let root = load_tree(file)?;
    Output::new(CheckReport::new(file, &root), config).render()
}
