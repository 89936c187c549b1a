//! Repl command handler
//!
//! One line is one key sequence; the display is printed after every line.
//! `history` prints the tape and `quit`/`exit` (or end of input) stops.

use std::io::{BufRead, Write};

use synthio_engine::keypad::Keypad;
use synthio_engine::session::Session;
use tracing::debug;

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::render_display;

use super::press_key;

/// Lines the repl treats as commands rather than keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReplCommand {
    Quit,
    History,
}

impl ReplCommand {
    fn parse(line: &str) -> Option<Self> {
        match line {
            "quit" | "exit" => Some(Self::Quit),
            "history" => Some(Self::History),
            _ => None,
        }
    }
}

/// Presses every key on the line, stopping at an unknown key
fn press_line(session: &mut Session, line: &str) -> CliResult<()> {
    Keypad::tokenize(line)
        .into_iter()
        .try_for_each(|key| press_key(session, key))
}

/// Execute the repl command
pub fn execute_repl<R: BufRead, W: Write>(
    config: &CliConfig,
    input: R,
    out: &mut W,
) -> CliResult<()> {
    let use_color = config.color.should_color();
    let mut session = Session::with_config(config.engine.clone());

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match ReplCommand::parse(line) {
            Some(ReplCommand::Quit) => break,
            Some(ReplCommand::History) => {
                for entry in session.history().iter() {
                    writeln!(out, "{}", entry.display())?;
                }
            }
            None => match press_line(&mut session, line) {
                Ok(()) => writeln!(out, "{}", render_display(session.display(), use_color))?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
        }
        out.flush()?;
    }

    debug!(evaluations = session.history().len(), "repl finished");
    Ok(())
}
