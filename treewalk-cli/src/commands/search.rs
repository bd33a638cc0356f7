//! Search command - walk a CSV tree depth-first or breadth-first
//!
//! Prints the visited labels, stopping at the first label containing the
//! key. Inputs missing from the command line come from the config file or,
//! on a terminal, from prompts.

use std::io::IsTerminal;
use std::path::PathBuf;

use colored::Colorize;
use serde::Serialize;
use treewalk_core::{Algorithm, Node, Search};

use crate::commands::interactive::{stdin_prompter, Prompter, FILE_PROMPT, METHOD_PROMPT};
use crate::commands::load_tree;
use crate::config::{TreewalkConfig, CONFIG_FILE};
use crate::output::{Alignment, Column, CsvOutput, Output, OutputConfig, Outputter, TableOutput};

/// One visited node
#[derive(Debug, Clone, Serialize)]
pub struct VisitRow {
    /// 1-based position in visitation order
    pub step: usize,
    pub id: String,
    pub label: String,
    /// Distance from the root (root = 0)
    pub depth: usize,
}

/// Search outcome with per-visit detail
#[derive(Debug, Serialize)]
pub struct SearchReport {
    #[serde(flatten)]
    pub search: Search,
    pub steps: Vec<VisitRow>,
}

impl SearchReport {
    /// Walk `root` with `algorithm` and collect the report.
    pub fn run(algorithm: Algorithm, root: &Node, key: &str) -> Self {
        let visits = algorithm.walk(Some(root), key);
        let steps = visits
            .iter()
            .enumerate()
            .map(|(i, visit)| VisitRow {
                step: i + 1,
                id: visit.node.id.clone(),
                label: visit.label().to_string(),
                depth: visit.depth,
            })
            .collect();

        Self {
            search: Search::from_visits(algorithm, key, &visits),
            steps,
        }
    }

    /// Visited labels joined with `", "`.
    pub fn joined(&self) -> String {
        self.search.joined()
    }

    pub fn matched(&self) -> bool {
        self.search.matched
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("Step", "step").with_alignment(Alignment::Right),
            Column::new("ID", "id"),
            Column::new("Label", "label"),
            Column::new("Depth", "depth").with_alignment(Alignment::Right),
        ]
    }
}

impl Outputter for SearchReport {
    fn to_plain(&self, config: &OutputConfig) -> String {
        if !config.use_colors() || !self.matched() {
            return self.joined();
        }

        // Highlight the label the walk stopped on
        let mut labels: Vec<String> = self.search.visited.clone();
        if let Some(last) = labels.last_mut() {
            *last = last.green().bold().to_string();
        }
        labels.join(", ")
    }

    fn to_table(&self, config: &OutputConfig) -> String {
        let title = match &self.search.key {
            Some(key) => format!("{} search for \"{}\"", self.search.algorithm, key),
            None => format!("{} traversal", self.search.algorithm),
        };
        let status = match (&self.search.key, self.matched()) {
            (None, _) => format!("{} nodes visited", self.steps.len()),
            (Some(_), true) => "match found".to_string(),
            (Some(_), false) => "no match".to_string(),
        };

        let (title, status) = if config.use_colors() {
            let status = if self.matched() {
                status.green().to_string()
            } else {
                status.dimmed().to_string()
            };
            (title.cyan().bold().to_string(), status)
        } else {
            (title, status)
        };

        format!(
            "{} ({})\n{}",
            title,
            status,
            TableOutput::format_with_columns(&self.steps, &Self::columns(), config)
        )
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        CsvOutput::format_with_columns(&self.steps, &Self::columns())
    }
}

/// Resolve the CSV path and algorithm from flags, config and prompts.
///
/// # Arguments
///
/// * `file` - Path given on the command line
/// * `algorithm` - Selector given on the command line
/// * `config` - Loaded `.treewalkrc.toml`
/// * `prompter` - Used for values still missing; `None` when stdin is not a terminal
///
/// # Returns
///
/// The path and algorithm, or an error naming the missing input.
pub fn resolve_inputs(
    file: Option<PathBuf>,
    algorithm: Option<&str>,
    config: &TreewalkConfig,
    mut prompter: Option<&mut dyn Prompter>,
) -> anyhow::Result<(PathBuf, Algorithm)> {
    let file = match file {
        Some(file) => file,
        None => match prompter.as_deref_mut() {
            Some(p) => PathBuf::from(p.ask(FILE_PROMPT)?),
            None => anyhow::bail!("No CSV file given. Pass FILE or run from a terminal."),
        },
    };

    let algorithm: Algorithm = match algorithm {
        Some(selector) => selector.parse()?,
        None => match (config.default_algorithm(), prompter) {
            (Some(algorithm), _) => algorithm,
            (None, Some(p)) => p.ask(METHOD_PROMPT)?.parse()?,
            (None, None) => anyhow::bail!(
                "No search method given. Pass --algorithm dfs|bfs or set [search] algorithm in {}.",
                CONFIG_FILE
            ),
        },
    };

    Ok((file, algorithm))
}

/// Run the search command
pub fn run(
    file: Option<PathBuf>,
    algorithm: Option<String>,
    key: Option<String>,
    settings: &TreewalkConfig,
    config: &OutputConfig,
) -> anyhow::Result<()> {
    let mut prompter = std::io::stdin().is_terminal().then(stdin_prompter);
    let (file, algorithm) = resolve_inputs(
        file,
        algorithm.as_deref(),
        settings,
        prompter.as_mut().map(|p| p.as_mut() as &mut dyn Prompter),
    )?;

    let root = load_tree(&file)?;
    let key = key.as_deref().map(str::trim).unwrap_or("");
    tracing::debug!(file = %file.display(), %algorithm, key, "search");

    Output::new(SearchReport::run(algorithm, &root, key), config).render()
}
