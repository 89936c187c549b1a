//! Core calculator engine
//!
//! The pure state machine lives in [`engine`]. Arithmetic, result
//! formatting and input symbols are split out so a presentation layer can
//! reuse them without holding an [`EngineState`].

pub mod engine;
pub mod format;
mod operations;
pub mod symbol;

pub use engine::{
    apply, current_display, reset, EngineState, EntryPhase, Evaluation, Transition, MAX_INPUT_LEN,
};
pub use format::format_result;
pub use operations::{Calculator, Operation, ZeroDivision};
pub use symbol::{Digit, InputSymbol};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A key, glyph or digit outside the input grammar
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Division by zero under [`ZeroDivision::Reject`]
    #[error("Undefined result: division by zero")]
    UndefinedResult,
}

impl CalcError {
    /// Create an invalid input error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
