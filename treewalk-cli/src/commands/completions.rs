//! Shell completions command - Generate shell completion scripts for `treewalk`
//!
//! Generates completion scripts for various shells:
//! - bash: Add to ~/.bashrc or ~/.bash_completion
//! - zsh: Add to ~/.zshrc or put in fpath
//! - fish: Add to ~/.config/fish/completions/
//! - powershell: Add to $PROFILE
//! - elvish: Add to ~/.elvish/rc.elv

use std::io;

use clap::Command;
use clap_complete::{generate, shells};
use colored::Colorize;
use serde::Serialize;

use crate::output::{CsvOutput, Output, OutputConfig, Outputter};

/// Supported shells for completion generation
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

impl std::fmt::Display for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shell::Bash => write!(f, "bash"),
            Shell::Zsh => write!(f, "zsh"),
            Shell::Fish => write!(f, "fish"),
            Shell::PowerShell => write!(f, "powershell"),
            Shell::Elvish => write!(f, "elvish"),
        }
    }
}

/// Instructions for installing completions
#[derive(Debug, Serialize)]
pub struct CompletionInstructions {
    pub shell: String,
    pub instructions: Vec<String>,
}

impl Outputter for CompletionInstructions {
    fn to_plain(&self, _config: &OutputConfig) -> String {
        self.instructions.join("\n")
    }

    fn to_table(&self, config: &OutputConfig) -> String {
        let (name, shell, heading) = if config.use_colors() {
            (
                "treewalk".cyan().bold().to_string(),
                self.shell.yellow().to_string(),
                "Installation:".cyan().bold().to_string(),
            )
        } else {
            ("treewalk".to_string(), self.shell.clone(), "Installation:".to_string())
        };

        let mut output = format!("{} completions for {}\n\n{}\n", name, shell, heading);
        for instruction in &self.instructions {
            output.push_str(&format!("  {}\n", instruction));
        }
        output
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        let mut lines = vec!["shell,instruction".to_string()];
        lines.extend(self.instructions.iter().map(|i| {
            format!("{},{}", self.shell, CsvOutput::escape_value(i))
        }));
        lines.join("\n")
    }
}

/// Get installation instructions for a shell
fn get_instructions(shell: Shell) -> Vec<String> {
    match shell {
        Shell::Bash => vec![
            "# Add to ~/.bashrc:".to_string(),
            "eval \"$(treewalk completions bash)\"".to_string(),
            "".to_string(),
            "# Or save to a file:".to_string(),
            "treewalk completions bash > ~/.local/share/bash-completion/completions/treewalk"
                .to_string(),
        ],
        Shell::Zsh => vec![
            "# Add to ~/.zshrc:".to_string(),
            "eval \"$(treewalk completions zsh)\"".to_string(),
            "".to_string(),
            "# Or save to a file in fpath:".to_string(),
            "treewalk completions zsh > ~/.zfunc/_treewalk".to_string(),
            "# Then add to ~/.zshrc before compinit:".to_string(),
            "fpath=(~/.zfunc $fpath)".to_string(),
        ],
        Shell::Fish => vec![
            "# Save to fish completions directory:".to_string(),
            "treewalk completions fish > ~/.config/fish/completions/treewalk.fish".to_string(),
        ],
        Shell::PowerShell => vec![
            "# Add to $PROFILE:".to_string(),
            "Invoke-Expression (& treewalk completions powershell | Out-String)".to_string(),
        ],
        Shell::Elvish => vec![
            "# Add to ~/.elvish/rc.elv:".to_string(),
            "eval (treewalk completions elvish | slurp)".to_string(),
        ],
    }
}

/// Write the completion script for `shell` to `out`
pub fn generate_completions(shell: Shell, cmd: &mut Command, out: &mut dyn io::Write) {
    let name = "treewalk";
    match shell {
        Shell::Bash => generate(shells::Bash, cmd, name, out),
        Shell::Zsh => generate(shells::Zsh, cmd, name, out),
        Shell::Fish => generate(shells::Fish, cmd, name, out),
        Shell::PowerShell => generate(shells::PowerShell, cmd, name, out),
        Shell::Elvish => generate(shells::Elvish, cmd, name, out),
    }
}

/// Run the completions command
///
/// Prints the script itself, or the installation steps with `--instructions`.
pub fn run(
    shell: Shell,
    show_instructions: bool,
    cmd: &mut Command,
    config: &OutputConfig,
) -> anyhow::Result<()> {
    if show_instructions {
        let instructions = CompletionInstructions {
            shell: shell.to_string(),
            instructions: get_instructions(shell),
        };
        Output::new(instructions, config).render()
    } else {
        generate_completions(shell, cmd, &mut io::stdout());
        Ok(())
    }
}
