//! Show command - print the rebuilt hierarchy
//!
//! Plain output draws the tree with box-drawing characters. JSON, table and
//! CSV list one node per row in depth-first order.

use std::path::Path;

use serde::Serialize;
use treewalk_core::{walk_dfs, Node};

use crate::commands::load_tree;
use crate::output::{
    Alignment, Column, CsvOutput, Output, OutputConfig, Outputter, TableOutput, TreeOutput,
};

/// Flat view of one node
#[derive(Debug, Serialize)]
struct NodeRow<'a> {
    id: &'a str,
    label: &'a str,
    parent_id: &'a str,
    depth: usize,
    children: usize,
}

/// The built tree, ready to render
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct TreeView {
    pub root: Node,
}

impl TreeView {
    fn rows(&self) -> Vec<NodeRow<'_>> {
        walk_dfs(Some(&self.root), "")
            .into_iter()
            .map(|visit| NodeRow {
                id: &visit.node.id,
                label: visit.label(),
                parent_id: &visit.node.parent_id,
                depth: visit.depth,
                children: visit.node.children.len(),
            })
            .collect()
    }
}

impl Outputter for TreeView {
    fn to_plain(&self, config: &OutputConfig) -> String {
        TreeOutput::render_node(&self.root, config)
    }

    fn to_table(&self, config: &OutputConfig) -> String {
        let columns = [
            Column::new("ID", "id"),
            Column::new("Label", "label"),
            Column::new("Parent", "parent_id"),
            Column::new("Depth", "depth").with_alignment(Alignment::Right),
            Column::new("Children", "children").with_alignment(Alignment::Right),
        ];
        TableOutput::format_with_columns(&self.rows(), &columns, config)
    }

    /// Same layout as the input file, so the output can be loaded again.
    fn to_csv(&self, _config: &OutputConfig) -> String {
        let columns = [
            Column::new("ID", "id"),
            Column::new("NODE", "label"),
            Column::new("PARENT", "parent_id"),
        ];
        CsvOutput::format_with_columns(&self.rows(), &columns)
    }
}

/// Run the show command
pub fn run(file: &Path, config: &OutputConfig) -> anyhow::Result<()> {
    let root = load_tree(file)?;
    tracing::debug!(file = %file.display(), nodes = root.node_count(), "show");
    Output::new(TreeView { root }, config).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use treewalk_core::{build, read_records, Record};

    fn view() -> TreeView {
        let root = build(&[
            Record::new("1", "Root", "0"),
            Record::new("2", "A", "1"),
            Record::new("3", "B", "1"),
            Record::new("4", "A1", "2"),
        ])
        .unwrap();
        TreeView { root }
    }

    #[test]
    fn test_plain_draws_tree() {
        let config = OutputConfig::new(OutputFormat::Plain).without_colors();
        let output = view().render(&config);

        assert!(output.starts_with("Root [1]\n"));
        assert_eq!(output.lines().count(), 4);
    }

    #[test]
    fn test_csv_reloads_to_same_tree() {
        let original = view();
        let csv = original.render(&OutputConfig::new(OutputFormat::Csv));

        assert!(csv.starts_with("ID,NODE,PARENT\n1,Root,0\n"));
        let reloaded = build(&read_records(csv.as_bytes()).unwrap()).unwrap();
        assert_eq!(reloaded, original.root);
    }

    #[test]
    fn test_json_lists_nodes_depth_first() {
        let config = OutputConfig::new(OutputFormat::Json).with_compact(true);
        let value: serde_json::Value = serde_json::from_str(&view().render(&config)).unwrap();

        assert_eq!(value[0]["label"], "Root");
        assert_eq!(value[0]["children"], serde_json::json!(["2", "3"]));
        assert_eq!(value[2]["label"], "A1");
        assert_eq!(value[2]["depth"], 2);
    }

    #[test]
    fn test_json_deep_chain() {
        let mut records = vec![Record::new("1", "n1", "0")];
        records.extend((2..=100_000).map(|i| {
            Record::new(i.to_string(), format!("n{}", i), (i - 1).to_string())
        }));
        let view = TreeView {
            root: build(&records).unwrap(),
        };

        let config = OutputConfig::new(OutputFormat::Json).with_compact(true);
        let output = view.render(&config);

        assert!(output.starts_with(r#"[{"id":"1","label":"n1""#));
        assert!(output.ends_with(r#""depth":99999,"children":[]}]"#));
    }

    #[test]
    fn test_table_lists_every_node() {
        let config = OutputConfig::new(OutputFormat::Table)
            .without_colors()
            .without_truncation();
        let table = view().render(&config);

        for label in ["Root", "A", "B", "A1"] {
            assert!(table.contains(label));
        }
        assert!(table.contains("Children"));
    }
}
