//! treewalk CLI - rebuild a tree from a CSV file and search it
//!
//! Reads `ID,NODE,PARENT` records, links them into a single-rooted tree and
//! prints a depth-first or breadth-first walk that stops at the first label
//! containing the search key.

use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::*;
use config::TreewalkConfig;
use output::{OutputConfig, OutputFormat};

/// Rebuild a tree from CSV records and search it.
///
/// Without a subcommand, treewalk asks for the CSV path, the search method
/// and the key, then prints the visited labels.
#[derive(Parser)]
#[command(name = "treewalk")]
#[command(author, version)]
#[command(about = "Rebuild a tree from CSV records and search it depth- or breadth-first")]
#[command(propagate_version = true)]
#[command(next_help_heading = "Options")]
#[command(after_help = "Input:
  A CSV file with the header ID,NODE,PARENT. The root row has PARENT 0.

Examples:
  treewalk                               Interactive session
  treewalk search tree.csv -a bfs        Full breadth-first walk
  treewalk search tree.csv -a dfs -k Up  Depth-first until a label contains 'Up'
  treewalk show tree.csv                 Draw the hierarchy")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format (overrides config default)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Show detailed version information
    #[arg(long = "version-verbose")]
    version_verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk the tree and print the visited labels
    #[command(visible_alias = "s")]
    Search {
        /// CSV file (prompted for on a terminal when omitted)
        file: Option<PathBuf>,

        /// Search method: dfs or bfs (case-insensitive)
        #[arg(short, long)]
        algorithm: Option<String>,

        /// Stop at the first label containing this text (omit for the complete tree)
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Print the rebuilt hierarchy
    Show {
        /// CSV file
        file: PathBuf,
    },

    /// Validate a CSV file and summarise the tree
    Check {
        /// CSV file
        file: PathBuf,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: completions::Shell,

        /// Show installation instructions instead of generating completions
        #[arg(long)]
        instructions: bool,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

/// Print verbose version information
fn print_verbose_version() {
    use colored::Colorize;

    let cli_version = env!("CARGO_PKG_VERSION");
    let platform = format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS);

    println!("treewalk {}", cli_version);
    println!("  {:<15} {}", "treewalk-cli:".cyan(), cli_version);
    println!("  {:<15} {}", "treewalk-core:".cyan(), treewalk_core::version());
    println!("  {:<15} {}", "Platform:".cyan(), platform);
}

/// Resolve the output format: CLI flag > config default > plain.
fn resolve_format(flag: Option<OutputFormat>, settings: &TreewalkConfig) -> OutputFormat {
    flag.or_else(|| {
        settings
            .default_format()
            .and_then(|f| match f.parse() {
                Ok(format) => Some(format),
                Err(e) => {
                    tracing::warn!("Ignoring [output] format in {}: {}", config::CONFIG_FILE, e);
                    None
                }
            })
    })
    .unwrap_or_default()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.version_verbose {
        print_verbose_version();
        return Ok(());
    }

    setup_logging(cli.verbose, cli.quiet);

    let settings = TreewalkConfig::load(Path::new("."));

    // Apply color override from config if set
    if let Some(use_color) = settings.use_color() {
        colored::control::set_override(use_color);
    }

    let format = resolve_format(cli.format, &settings);
    let config = OutputConfig::auto_detect_with_color_override(format, settings.use_color())
        .with_compact(settings.output.compact);

    let Some(command) = cli.command else {
        return interactive::run(&config);
    };

    match command {
        Commands::Search {
            file,
            algorithm,
            key,
        } => search::run(file, algorithm, key, &settings, &config),
        Commands::Show { file } => show::run(&file, &config),
        Commands::Check { file } => check::run(&file, &config),
        Commands::Completions {
            shell,
            instructions,
        } => completions::run(shell, instructions, &mut Cli::command(), &config),
    }
}
