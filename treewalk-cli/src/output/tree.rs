//! Tree output formatting for hierarchical display.
//!
//! Draws a `Node` hierarchy the way the `tree` command does, with Unicode
//! box-drawing characters. Rendering uses an explicit stack so deep
//! hierarchies do not recurse.

use super::OutputConfig;
use colored::Colorize;
use treewalk_core::Node;

/// Tree output formatter
pub struct TreeOutput;

/// Tree branch characters
struct TreeChars {
    /// Vertical line for continuing branches (|)
    pipe: &'static str,
    /// Branch for non-last items (|-)
    branch: &'static str,
    /// Branch for last item in a level (L-)
    last: &'static str,
    /// Spacing for items under last branch
    space: &'static str,
}

impl TreeChars {
    const UNICODE: TreeChars = TreeChars {
        pipe: "\u{2502}   ",                 // |
        branch: "\u{251c}\u{2500}\u{2500} ", // |--
        last: "\u{2514}\u{2500}\u{2500} ",   // L--
        space: "    ",
    };
}

/// Pending line in the render stack.
struct Frame<'a> {
    node: &'a Node,
    prefix: String,
    is_last: bool,
    is_root: bool,
}

impl TreeOutput {
    /// Render a node and all its descendants, one line per node.
    ///
    /// Labels are followed by the node id in brackets; with colors enabled
    /// the root label is bold and ids are dimmed.
    pub fn render_node(root: &Node, config: &OutputConfig) -> String {
        let chars = &TreeChars::UNICODE;
        let mut lines = Vec::new();
        let mut stack = vec![Frame {
            node: root,
            prefix: String::new(),
            is_last: true,
            is_root: true,
        }];

        while let Some(frame) = stack.pop() {
            let connector = if frame.is_root {
                ""
            } else if frame.is_last {
                chars.last
            } else {
                chars.branch
            };
            lines.push(format!(
                "{}{}{}",
                frame.prefix,
                connector,
                Self::format_label(frame.node, frame.is_root, config)
            ));

            let child_prefix = if frame.is_root {
                String::new()
            } else if frame.is_last {
                format!("{}{}", frame.prefix, chars.space)
            } else {
                format!("{}{}", frame.prefix, chars.pipe)
            };

            let count = frame.node.children.len();
            for (i, child) in frame.node.children.iter().enumerate().rev() {
                stack.push(Frame {
                    node: child,
                    prefix: child_prefix.clone(),
                    is_last: i + 1 == count,
                    is_root: false,
                });
            }
        }

        lines.join("\n")
    }

    fn format_label(node: &Node, is_root: bool, config: &OutputConfig) -> String {
        let id = format!("[{}]", node.id);
        if !config.use_colors() {
            return format!("{} {}", node.label, id);
        }
        let label = if is_root {
            node.label.bold().to_string()
        } else if node.is_leaf() {
            node.label.green().to_string()
        } else {
            node.label.cyan().to_string()
        };
        format!("{} {}", label, id.dimmed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use treewalk_core::{build, Record};

    fn sample_tree() -> Node {
        build(&[
            Record::new("1", "Root", "0"),
            Record::new("2", "A", "1"),
            Record::new("3", "B", "1"),
            Record::new("4", "A1", "2"),
        ])
        .unwrap()
    }

    #[test]
    fn test_render_sample_tree() {
        let config = OutputConfig::new(OutputFormat::Plain).without_colors();
        let output = TreeOutput::render_node(&sample_tree(), &config);

        let expected = [
            "Root [1]",
            "\u{251c}\u{2500}\u{2500} A [2]",
            "\u{2502}   \u{2514}\u{2500}\u{2500} A1 [4]",
            "\u{2514}\u{2500}\u{2500} B [3]",
        ]
        .join("\n");
        assert_eq!(output, expected);
    }

    #[test]
    fn test_render_single_node() {
        let root = build(&[Record::new("7", "Solo", "0")]).unwrap();
        let config = OutputConfig::new(OutputFormat::Plain).without_colors();
        assert_eq!(TreeOutput::render_node(&root, &config), "Solo [7]");
    }

    #[test]
    fn test_render_last_branch_uses_spaces() {
        let root = build(&[
            Record::new("1", "Root", "0"),
            Record::new("2", "Only", "1"),
            Record::new("3", "Deep", "2"),
        ])
        .unwrap();
        let config = OutputConfig::new(OutputFormat::Plain).without_colors();
        let output = TreeOutput::render_node(&root, &config);

        assert_eq!(output.lines().nth(2), Some("    \u{2514}\u{2500}\u{2500} Deep [3]"));
    }
}
