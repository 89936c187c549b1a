//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use synthio_engine::core::ZeroDivision;

use crate::output::OutputFormat;

/// Synthio: the smartwatch calculator engine on the command line
#[derive(Parser, Debug)]
#[command(name = "synthio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// YAML configuration file
    #[arg(long, value_name = "PATH", env = "SYNTHIO_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// What division by zero produces (overrides the config file)
    #[arg(long, value_enum, global = true)]
    pub zero_division: Option<ZeroDivisionArg>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press a sequence of keys and print the display
    Eval(EvalArgs),

    /// Interactive calculator reading key sequences from stdin
    Repl,

    /// Show the watch keypad layout
    Keypad,

    /// Show the effective configuration as YAML
    Config,
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Keys to press, e.g. `12+3=` or `"2 × 3 ="`
    #[arg(required = true, allow_hyphen_values = true)]
    pub keys: Vec<String>,

    /// Print the display after every key
    #[arg(long)]
    pub steps: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: FormatArg,
}

/// Zero-division policy argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZeroDivisionArg {
    /// Division by zero shows 0
    #[default]
    Zero,
    /// Division by zero is an error
    Reject,
}

impl From<ZeroDivisionArg> for ZeroDivision {
    fn from(arg: ZeroDivisionArg) -> Self {
        match arg {
            ZeroDivisionArg::Zero => Self::Zero,
            ZeroDivisionArg::Reject => Self::Reject,
        }
    }
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// JSON report
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Color output argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
