//! Interactive session - prompt for file, method and key, then search.
//!
//! Runs when `treewalk` is invoked without a subcommand. Prompts go through
//! the [`Prompter`] trait: a dialoguer-backed prompter on a terminal, a
//! line reader when stdin is piped.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Context;
use thiserror::Error;
use treewalk_core::Algorithm;

use crate::commands::{load_tree, search::SearchReport};
use crate::output::{Output, OutputConfig};

pub const FILE_PROMPT: &str = "Enter CSV file path";
pub const METHOD_PROMPT: &str = "Enter search method (DFS/BFS)";
pub const KEY_PROMPT: &str = "Enter search key (leave blank for complete tree)";

/// Errors raised while asking the user for input.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("No input for '{prompt}': stdin closed")]
    EndOfInput { prompt: String },

    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("Prompt failed: {0}")]
    Dialog(#[from] dialoguer::Error),
}

/// Source of answers to interactive questions.
pub trait Prompter {
    /// Ask `prompt` and return the trimmed answer (possibly empty).
    fn ask(&mut self, prompt: &str) -> Result<String, PromptError>;
}

/// Prompter backed by `dialoguer` for terminals.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        let answer: String = dialoguer::Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer.trim().to_string())
    }
}

/// Prompter reading one line per question.
///
/// Prompts are written to `prompts` (stderr in practice) so stdout carries
/// only the result line.
pub struct LinePrompter<R, W> {
    input: R,
    prompts: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, prompts: W) -> Self {
        Self { input, prompts }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.prompts, "{}: ", prompt)?;
        self.prompts.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::EndOfInput {
                prompt: prompt.to_string(),
            });
        }
        Ok(line.trim().to_string())
    }
}

/// Pick the prompter for the current stdin.
pub fn stdin_prompter() -> Box<dyn Prompter> {
    if io::stdin().is_terminal() {
        Box::new(TerminalPrompter)
    } else {
        Box::new(LinePrompter::new(io::stdin().lock(), io::stderr()))
    }
}

/// Ask the three questions and run the search.
///
/// The tree is loaded right after the path is answered, so a bad file fails
/// before the remaining prompts are shown.
pub fn session(prompter: &mut dyn Prompter) -> anyhow::Result<SearchReport> {
    let path = PathBuf::from(prompter.ask(FILE_PROMPT)?);
    let root = load_tree(&path)?;

    let method = prompter.ask(METHOD_PROMPT)?;
    let algorithm: Algorithm = method
        .parse()
        .context("Invalid search method. Please choose DFS or BFS.")?;

    let key = prompter.ask(KEY_PROMPT)?;
    tracing::debug!(path = %path.display(), %algorithm, %key, "interactive search");

    Ok(SearchReport::run(algorithm, &root, &key))
}

/// Run the interactive session against stdin.
pub fn run(config: &OutputConfig) -> anyhow::Result<()> {
    let mut prompter = stdin_prompter();
    let report = session(prompter.as_mut())?;
    Output::new(report, config).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    fn sample_csv() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "ID,NODE,PARENT").unwrap();
        writeln!(file, "1,Root,0").unwrap();
        writeln!(file, "2,A,1").unwrap();
        writeln!(file, "3,B,1").unwrap();
        writeln!(file, "4,A1,2").unwrap();
        file
    }

    fn prompter(answers: &str) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        LinePrompter::new(Cursor::new(answers.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_line_prompter_trims_and_echoes_prompt() {
        let mut p = prompter("  dfs  \n");
        assert_eq!(p.ask(METHOD_PROMPT).unwrap(), "dfs");
        assert_eq!(
            String::from_utf8(p.prompts).unwrap(),
            "Enter search method (DFS/BFS): "
        );
    }

    #[test]
    fn test_line_prompter_blank_answer() {
        let mut p = prompter("\n");
        assert_eq!(p.ask(KEY_PROMPT).unwrap(), "");
    }

    #[test]
    fn test_line_prompter_end_of_input() {
        let mut p = prompter("");
        assert!(matches!(
            p.ask(FILE_PROMPT),
            Err(PromptError::EndOfInput { .. })
        ));
    }

    #[test]
    fn test_session_full_bfs() {
        let csv = sample_csv();
        let mut p = prompter(&format!("{}\nbfs\n\n", csv.path().display()));

        let report = session(&mut p).unwrap();
        assert_eq!(report.joined(), "Root, A, B, A1");
        assert!(!report.matched());
    }

    #[test]
    fn test_session_keyed_dfs() {
        let csv = sample_csv();
        let mut p = prompter(&format!("{}\n DFS \nA1\n", csv.path().display()));

        let report = session(&mut p).unwrap();
        assert_eq!(report.joined(), "Root, A, A1");
        assert!(report.matched());
    }

    #[test]
    fn test_session_rejects_unknown_method() {
        let csv = sample_csv();
        let mut p = prompter(&format!("{}\nastar\n\n", csv.path().display()));

        let err = session(&mut p).unwrap_err();
        assert!(err.to_string().contains("DFS or BFS"));
    }

    #[test]
    fn test_session_fails_before_method_on_missing_file() {
        let mut p = prompter("/nonexistent/tree.csv\ndfs\n\n");

        assert!(session(&mut p).is_err());
        let prompts = String::from_utf8(p.prompts).unwrap();
        assert!(!prompts.contains(METHOD_PROMPT));
    }
}
