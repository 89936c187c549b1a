//! Synthio calculator engine
//!
//! The input/operation state machine behind the Synthio smartwatch
//! calculator: four binary operators evaluated strictly left to right, a
//! running accumulator, decimal/sign/percent keys and the watch's display
//! formatting. Rendering is left to whatever front end holds the state.
//!
//! # Example
//!
//! ```rust
//! use synthio_engine::prelude::*;
//!
//! // Pure transitions
//! let state = [InputSymbol::digit(5).unwrap(), InputSymbol::Percent]
//!     .into_iter()
//!     .fold(reset(), apply);
//! assert_eq!(current_display(&state), "0.05");
//!
//! // A session with a tape
//! let mut session = Session::new();
//! assert_eq!(session.press_sequence("2 + 3 × 4 =").unwrap(), "20");
//! assert_eq!(session.history().len(), 2);
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod history;
pub mod keypad;
pub mod session;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::core::{
        apply, current_display, format_result, reset, CalcError, CalcResult, Calculator, Digit,
        EngineState, EntryPhase, Evaluation, InputSymbol, Operation, Transition, ZeroDivision,
        MAX_INPUT_LEN,
    };
    pub use crate::history::{History, HistoryEntry};
    pub use crate::keypad::{ButtonKind, Keypad, KeypadButton};
    pub use crate::session::{Session, ERROR_INDICATOR};
}
