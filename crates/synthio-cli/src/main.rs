//! Synthio CLI: the smartwatch calculator in a terminal
//!
//! ## Usage
//!
//! ```bash
//! synthio eval "2 + 3 × 4 ="          # prints 20
//! synthio eval --steps 5%             # display after every key
//! synthio --zero-division reject repl
//! synthio keypad
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use synthio_cli::{handlers, logging, Cli, CliConfig, CliResult, Commands, Verbosity};
use tracing::debug;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let config = build_config(&cli)?;
    logging::init(&config);
    debug!(?config, "effective configuration");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Eval(args) => handlers::execute_eval(&config, &args, &mut out)?,
        Commands::Repl => handlers::execute_repl(&config, io::stdin().lock(), &mut out)?,
        Commands::Keypad => handlers::execute_keypad(&mut out, config.color.should_color())?,
        Commands::Config => handlers::execute_config(&config, &mut out)?,
    }
    out.flush()?;
    Ok(())
}

/// Config file (if any) first, then command-line overrides
fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::new(),
    };

    let mut config = config
        .with_verbosity(Verbosity::from_flags(cli.verbose, cli.quiet))
        .with_color(cli.color.into());

    if let Some(policy) = cli.zero_division {
        config = config.with_zero_division(policy.into());
    }

    Ok(config)
}
