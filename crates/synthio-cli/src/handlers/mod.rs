//! Command handlers, one module per subcommand
//!
//! Handlers write to any `io::Write` so tests can capture what the
//! binary would print.

pub mod config;
pub mod eval;
pub mod keypad;
pub mod repl;

use synthio_engine::core::CalcError;
use synthio_engine::session::Session;

use crate::error::CliResult;

pub use config::execute_config;
pub use eval::{evaluate, execute_eval};
pub use keypad::{execute_keypad, render_keypad};
pub use repl::execute_repl;

/// Presses one key the way the watch does.
///
/// A rejected division leaves the error indicator up and is not an error
/// here; the next key starts over. Unknown keys fail.
pub fn press_key(session: &mut Session, key: &str) -> CliResult<()> {
    match session.press_glyph(key).map(|_| ()) {
        Ok(()) | Err(CalcError::UndefinedResult) => Ok(()),
        Err(err) => Err(err.into()),
    }
}
