//! Synthio CLI library
//!
//! Command-line front end for `synthio-engine`: argument parsing, YAML
//! configuration, logging setup and the subcommand handlers behind the
//! `synthio` binary.

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{Cli, ColorArg, Commands, EvalArgs, FormatArg, ZeroDivisionArg};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{render_display, EvalReport, OutputFormat, Step};
