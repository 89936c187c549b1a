//! A calculator session: engine state plus configuration and tape
//!
//! This is what a presentation layer holds. It applies key presses with
//! the configured zero-division policy, records evaluations and emits
//! `tracing` events; it never installs a subscriber.

use tracing::{debug, info, trace, warn};

use crate::config::EngineConfig;
use crate::core::{CalcError, CalcResult, EngineState, InputSymbol, Transition};
use crate::history::History;
use crate::keypad::Keypad;

/// Shown instead of the display after a rejected input
pub const ERROR_INDICATOR: &str = "Error";

/// One user's calculator, from power-on to power-off
#[derive(Debug, Clone)]
pub struct Session {
    state: EngineState,
    config: EngineConfig,
    history: History,
    fault: Option<CalcError>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates a session with custom configuration
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            state: EngineState::new(),
            history: History::with_capacity(config.history_capacity),
            config,
            fault: None,
        }
    }

    /// Applies one key press and returns the new display.
    ///
    /// A rejected input (division by zero under `ZeroDivision::Reject`)
    /// resets the engine and shows [`ERROR_INDICATOR`] until the next
    /// press.
    pub fn press(&mut self, symbol: InputSymbol) -> CalcResult<&str> {
        match self.state.try_apply_with(symbol, self.config.zero_division) {
            Ok(transition) => {
                self.fault = None;
                match transition {
                    Transition::Evaluated(evaluation) => {
                        info!(
                            expression = %evaluation.expression(),
                            display = self.state.display(),
                            "evaluated"
                        );
                        if self.config.record_history {
                            self.history.record(&evaluation);
                        }
                    }
                    Transition::Ignored => trace!(key = %symbol, "key had no effect"),
                    Transition::Updated => {}
                }
                debug!(key = %symbol, display = self.state.display(), "key applied");
                Ok(self.display())
            }
            Err(err) => {
                warn!(key = %symbol, error = %err, "input rejected");
                self.state = EngineState::new();
                self.fault = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Applies the key named by a glyph or keyboard alias
    pub fn press_glyph(&mut self, glyph: &str) -> CalcResult<&str> {
        let symbol = Keypad::key_to_symbol(glyph)
            .ok_or_else(|| CalcError::invalid_input(format!("unknown key '{glyph}'")))?;
        self.press(symbol)
    }

    /// Applies every key in typed input (see [`Keypad::tokenize`]),
    /// stopping at the first error
    pub fn press_sequence(&mut self, input: &str) -> CalcResult<&str> {
        for key in Keypad::tokenize(input) {
            self.press_glyph(key)?;
        }
        Ok(self.display())
    }

    /// Returns what the watch shows
    #[must_use]
    pub fn display(&self) -> &str {
        if self.fault.is_some() {
            ERROR_INDICATOR
        } else {
            self.state.display()
        }
    }

    /// Returns the error behind [`ERROR_INDICATOR`], if showing
    #[must_use]
    pub fn fault(&self) -> Option<&CalcError> {
        self.fault.as_ref()
    }

    /// Returns the underlying engine state
    #[must_use]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Returns the session configuration
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the evaluation tape
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Clears the tape without touching the engine
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Resets the engine; the tape is kept
    pub fn reset(&mut self) {
        self.state = EngineState::new();
        self.fault = None;
    }
}
