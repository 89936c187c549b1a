//! CLI configuration

use std::path::Path;

use serde::{Deserialize, Serialize};
use synthio_engine::config::EngineConfig;
use synthio_engine::core::ZeroDivision;

use crate::error::{CliError, CliResult};

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - evaluations
    Verbose,
    /// Debug - every key press
    Debug,
    /// Trace - ignored keys too
    Trace,
}

impl Verbosity {
    /// Derives the level from `-q` and the number of `-v` flags
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Check if verbose or higher
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug | Self::Trace)
    }

    /// The `tracing` level this verbosity maps to
    #[must_use]
    pub const fn log_level(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => console::Term::stdout().features().colors_supported(),
        }
    }
}

/// CLI configuration
///
/// Only `log_level` and `engine` live in the config file; verbosity and
/// color come from flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Verbosity level
    #[serde(skip)]
    pub verbosity: Verbosity,
    /// Color output choice
    #[serde(skip)]
    pub color: ColorChoice,
    /// `tracing` filter used when no `-v`/`-q` flag is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    /// Engine session settings
    pub engine: EngineConfig,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a YAML document
    pub fn from_yaml(yaml: &str) -> CliResult<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Loads a YAML config file
    pub fn load(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CliError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_yaml(&text)
            .map_err(|e| CliError::config(format!("{}: {e}", path.display())))
    }

    /// Serializes the file-backed part of the configuration
    pub fn to_yaml(&self) -> CliResult<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// The filter directive for the subscriber.
    ///
    /// Explicit `-v`/`-q` flags beat the file's `log_level`.
    #[must_use]
    pub fn log_directive(&self) -> String {
        match (&self.log_level, self.verbosity) {
            (Some(level), Verbosity::Normal) => level.clone(),
            (_, verbosity) => verbosity.log_level().to_string(),
        }
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set the log level
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Set the zero-division policy
    #[must_use]
    pub const fn with_zero_division(mut self, policy: ZeroDivision) -> Self {
        self.engine.zero_division = policy;
        self
    }
}
