//! Output formatting module for the treewalk CLI
//!
//! Provides unified output formatting across all commands with support for
//! multiple formats: plain (the joined label line), json (machine-readable),
//! table (human-readable) and csv.
//!
//! Automatically detects TTY context to adjust colors and truncation behavior.

use clap::ValueEnum;
use serde::Serialize;
use std::io::IsTerminal;
use std::str::FromStr;

mod csv;
mod json;
mod table;
mod tree;

pub use self::csv::CsvOutput;
pub use self::json::JsonOutput;
pub use self::table::TableOutput;
pub use self::tree::TreeOutput;

/// Output format for CLI results
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text: visited labels joined by ", " (default)
    #[default]
    Plain,
    /// JSON format for machine consumption
    Json,
    /// Human-readable table format
    Table,
    /// CSV format for spreadsheet/data processing
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown output format: '{}'", s)),
        }
    }
}

/// Configuration for output rendering
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// The output format to use
    pub format: OutputFormat,
    /// Disable colored output
    pub no_color: bool,
    /// Disable truncation of long values
    pub no_truncate: bool,
    /// Override terminal width (None = auto-detect)
    pub width: Option<usize>,
    /// Compact mode (less whitespace)
    pub compact: bool,
}

impl OutputConfig {
    /// Create a new OutputConfig with the specified format
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            no_color: false,
            no_truncate: false,
            width: None,
            compact: false,
        }
    }

    /// Create an OutputConfig with automatic TTY detection and optional color override.
    ///
    /// When output is not a TTY (piped or redirected):
    /// - Colors are disabled (unless `color_override` is `Some(true)`)
    /// - Truncation is disabled
    pub fn auto_detect_with_color_override(
        format: OutputFormat,
        color_override: Option<bool>,
    ) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let mut config = Self::new(format);
        if !color_override.unwrap_or(is_tty) {
            config = config.without_colors();
        }
        if !is_tty {
            config = config.without_truncation();
        }
        config
    }

    /// Get the effective terminal width
    pub fn effective_width(&self) -> usize {
        self.width.unwrap_or_else(|| {
            terminal_size::terminal_size()
                .map(|(w, _)| w.0 as usize)
                .unwrap_or(80)
        })
    }

    /// Check if colors should be used
    pub fn use_colors(&self) -> bool {
        !self.no_color
    }

    /// Check if truncation should be applied
    pub fn should_truncate(&self) -> bool {
        !self.no_truncate
    }

    /// Builder: disable colors
    pub fn without_colors(mut self) -> Self {
        self.no_color = true;
        self
    }

    /// Builder: disable truncation
    pub fn without_truncation(mut self) -> Self {
        self.no_truncate = true;
        self
    }

    /// Builder: set compact mode
    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }
}

/// Column definition for table and CSV output
#[derive(Debug, Clone)]
pub struct Column {
    /// Display name for the column header
    pub name: String,
    /// Key used to extract data from the serialized row
    pub key: String,
    /// Alignment for the column content
    pub align: Alignment,
}

impl Column {
    /// Create a new left-aligned column
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            align: Alignment::Left,
        }
    }

    /// Builder: set alignment
    pub fn with_alignment(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }
}

/// Text alignment for columns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Right,
}

/// Trait for command results that can be rendered in every format.
pub trait Outputter: Serialize {
    /// Render as plain text
    fn to_plain(&self, config: &OutputConfig) -> String;

    /// Render as table format
    fn to_table(&self, config: &OutputConfig) -> String;

    /// Render as CSV format
    fn to_csv(&self, config: &OutputConfig) -> String;

    /// Render as JSON format
    fn to_json(&self, config: &OutputConfig) -> String {
        JsonOutput::format(self, config)
    }

    /// Render using the format specified in config
    fn render(&self, config: &OutputConfig) -> String {
        match config.format {
            OutputFormat::Plain => self.to_plain(config),
            OutputFormat::Json => self.to_json(config),
            OutputFormat::Table => self.to_table(config),
            OutputFormat::Csv => self.to_csv(config),
        }
    }
}

/// Result wrapper that prints a command result with a given config
pub struct Output<'a, T> {
    data: T,
    config: &'a OutputConfig,
}

impl<'a, T: Outputter> Output<'a, T> {
    pub fn new(data: T, config: &'a OutputConfig) -> Self {
        Self { data, config }
    }

    /// Render the output to stdout
    pub fn render(&self) -> anyhow::Result<()> {
        let rendered = self.render_to_string();
        if !rendered.is_empty() {
            println!("{}", rendered);
        }
        Ok(())
    }

    /// Get the rendered string without printing
    pub fn render_to_string(&self) -> String {
        self.data.render(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Greeting {
        text: String,
    }

    impl Outputter for Greeting {
        fn to_plain(&self, _config: &OutputConfig) -> String {
            self.text.clone()
        }

        fn to_table(&self, config: &OutputConfig) -> String {
            TableOutput::format_key_value(&[("Text", self.text.clone())], config)
        }

        fn to_csv(&self, _config: &OutputConfig) -> String {
            format!("text\n{}", self.text)
        }
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("plain".parse::<OutputFormat>().unwrap(), OutputFormat::Plain);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_config_builder() {
        let config = OutputConfig::new(OutputFormat::Json)
            .without_colors()
            .without_truncation()
            .with_compact(true);

        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.use_colors());
        assert!(!config.should_truncate());
        assert!(config.compact);
    }

    #[test]
    fn test_render_dispatches_on_format() {
        let greeting = Greeting {
            text: "hi".to_string(),
        };

        let json = OutputConfig::new(OutputFormat::Json).with_compact(true);
        assert_eq!(greeting.render(&json), r#"{"text":"hi"}"#);

        let csv = OutputConfig::new(OutputFormat::Csv);
        assert_eq!(greeting.render(&csv), "text\nhi");

        let plain = OutputConfig::new(OutputFormat::Plain);
        assert_eq!(Output::new(greeting, &plain).render_to_string(), "hi");
    }
}
