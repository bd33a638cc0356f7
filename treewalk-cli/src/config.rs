//! Configuration loading from `.treewalkrc.toml`.
//!
//! Configuration is optional. Without a config file every setting falls back
//! to its default, and command-line flags always win over the file.
//!
//! # Example Configuration
//!
//! ```toml
//! [search]
//! algorithm = "bfs"
//!
//! [output]
//! format = "table"
//! color = false
//! compact = true
//! ```

use serde::Deserialize;
use std::path::Path;
use treewalk_core::Algorithm;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = ".treewalkrc.toml";

/// Root configuration structure loaded from `.treewalkrc.toml`.
///
/// All sections are optional and will use defaults if not specified.
#[derive(Debug, Deserialize, Default)]
pub struct TreewalkConfig {
    /// Search defaults.
    #[serde(default)]
    pub search: SearchSettings,

    /// Output formatting preferences.
    #[serde(default)]
    pub output: OutputSettings,
}

/// Defaults for `treewalk search`.
#[derive(Debug, Deserialize, Default)]
pub struct SearchSettings {
    /// Algorithm used when `--algorithm` is not given and no prompt is shown.
    ///
    /// Valid values: `dfs`, `bfs` (case-insensitive).
    #[serde(default)]
    pub algorithm: Option<String>,
}

/// Output formatting preferences.
///
/// Distinct from the runtime `OutputConfig` in the output module, which
/// handles actual rendering. These settings only provide user preferences.
#[derive(Debug, Deserialize, Default)]
pub struct OutputSettings {
    /// Default output format.
    ///
    /// Valid values: `plain`, `json`, `table`, `csv`
    /// Default: `plain`
    #[serde(default)]
    pub format: Option<String>,

    /// Whether to use colored output.
    ///
    /// Defaults to `true` when stdout is a TTY.
    #[serde(default)]
    pub color: Option<bool>,

    /// Compact JSON and borderless tables.
    #[serde(default)]
    pub compact: bool,
}

impl TreewalkConfig {
    /// Load configuration from `.treewalkrc.toml` in the given directory.
    ///
    /// If the config file doesn't exist or can't be parsed, returns defaults.
    /// Parse errors are logged as warnings but don't cause failures.
    ///
    /// # Arguments
    ///
    /// * `root` - Directory to search for `.treewalkrc.toml`
    ///
    /// # Returns
    ///
    /// Loaded configuration, or defaults if no config file exists.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse {}: {}", CONFIG_FILE, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", CONFIG_FILE, e);
                }
            }
        }
        Self::default()
    }

    /// Get the default output format, if configured.
    pub fn default_format(&self) -> Option<&str> {
        self.output.format.as_deref()
    }

    /// Check if colored output should be used.
    ///
    /// Returns the configured value, or `None` to use auto-detection.
    pub fn use_color(&self) -> Option<bool> {
        self.output.color
    }

    /// Get the configured default algorithm.
    ///
    /// An unrecognised value is logged and ignored.
    pub fn default_algorithm(&self) -> Option<Algorithm> {
        let raw = self.search.algorithm.as_deref()?;
        match raw.parse() {
            Ok(algorithm) => Some(algorithm),
            Err(e) => {
                tracing::warn!("Ignoring [search] algorithm in {}: {}", CONFIG_FILE, e);
                None
            }
        }
    }
}
